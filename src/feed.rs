//! A pull-based feed of prices extracted from one column of a delimited file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::csv::{CsvReader, Row};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot open price file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read price file: {0}")]
    Read(#[source] io::Error),

    #[error("line {line}: malformed record: {message}")]
    Malformed { line: u64, message: String },

    #[error("line {line}: no column {column} in a record of {fields} field(s)")]
    MissingColumn { line: u64, column: usize, fields: usize },

    #[error("line {line}: invalid price '{value}'")]
    InvalidPrice { line: u64, value: String },
}
impl FeedError {
    /// Whether the feed cannot continue past this error. Anything else is confined to one row.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FeedError::Open { .. } | FeedError::Read(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub line: u64,
    pub value: f64,
}

/// Extracts the price in `column` (zero-based) from each row of the underlying feed.
pub struct PriceFeed<I> {
    rows: I,
    column: usize,
}
impl PriceFeed<CsvReader> {
    pub fn open(path: impl Into<PathBuf>, column: usize) -> Result<Self, FeedError> {
        Ok(Self::new(CsvReader::open(path.into())?, column))
    }
}

impl<I> PriceFeed<I>
where
    I: Iterator<Item = Result<Row, FeedError>>,
{
    pub fn new(rows: I, column: usize) -> Self {
        Self { rows, column }
    }

    fn extract(&self, row: Row) -> Result<Price, FeedError> {
        let value = row.fields.get(self.column).ok_or(FeedError::MissingColumn {
            line: row.line,
            column: self.column,
            fields: row.fields.len(),
        })?;
        match value.parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(Price {
                line: row.line,
                value: price,
            }),
            _ => Err(FeedError::InvalidPrice {
                line: row.line,
                value: value.to_string(),
            }),
        }
    }
}

impl<I> Iterator for PriceFeed<I>
where
    I: Iterator<Item = Result<Row, FeedError>>,
{
    type Item = Result<Price, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.and_then(|row| self.extract(row)))
    }
}
