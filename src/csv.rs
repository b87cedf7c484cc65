//! Utilities for working with CSV files.

use std::fs::File;
use std::io;
use std::path::Path;

use ::csv::{ErrorKind, ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim, Writer};
use serde::Serialize;

use crate::feed::FeedError;

/// Writes serialisable records, emitting a header row derived from the first record's field names.
pub struct CsvWriter<W: io::Write = File> {
    writer: Writer<W>,
}
impl CsvWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: io::Write> CsvWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Writer::from_writer(writer),
        }
    }

    pub fn append<S: Serialize>(&mut self, record: S) -> Result<(), io::Error> {
        self.writer.serialize(record).map_err(io::Error::from)
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> Result<W, io::Error> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }
}

/// A single record together with the (1-based) line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: u64,
    pub fields: StringRecord,
}

/// Reads header-less, comma-delimited records one at a time. Malformed records surface as
/// recoverable errors; an I/O error is surfaced once and ends the sequence.
pub struct CsvReader<R: io::Read = File> {
    records: StringRecordsIntoIter<R>,
    done: bool,
}
impl CsvReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FeedError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<R: io::Read> CsvReader<R> {
    pub fn from_reader(reader: R) -> Self {
        let records = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(reader)
            .into_records();
        Self {
            records,
            done: false,
        }
    }

    pub fn read(&mut self) -> Option<Result<Row, FeedError>> {
        if self.done {
            return None;
        }
        let next = match self.records.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(next) => next,
        };
        let row = next.map(|fields| Row {
            line: fields.position().map(|pos| pos.line()).unwrap_or_default(),
            fields,
        });
        Some(row.map_err(|err| {
            let line = err.position().map(|pos| pos.line()).unwrap_or_default();
            match err.into_kind() {
                ErrorKind::Io(err) => {
                    self.done = true;
                    FeedError::Read(err)
                }
                ErrorKind::UnequalLengths { expected_len, len, .. } => FeedError::Malformed {
                    line,
                    message: format!("expected {expected_len} field(s), found {len}"),
                },
                ErrorKind::Utf8 { err, .. } => FeedError::Malformed {
                    line,
                    message: format!("invalid UTF-8 in field {}", err.field() + 1),
                },
                other => FeedError::Malformed {
                    line,
                    message: format!("{other:?}"),
                },
            }
        }))
    }
}

impl<R: io::Read> Iterator for CsvReader<R> {
    type Item = Result<Row, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}
