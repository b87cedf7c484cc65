//! Drives one pass over a price file, from settings to the final set of surviving rates.
//!
//! Settings are validated before the file is touched. Prices are then pulled one at a time and
//! handed to a [RateSurvivalTracker]; rows that cannot be read as prices are reported and
//! skipped. Once the feed is exhausted, the survivors are emitted exactly once, as a JSON array,
//! through the caller's output sink. A session that fails emits nothing.

use std::io;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, Settings};
use crate::csv::CsvWriter;
use crate::decompose::DecompositionEngine;
use crate::feed::{FeedError, Price, PriceFeed};
use crate::survival::{CandidateSet, RateSurvivalTracker};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Feed(#[from] FeedError),

    #[error("cannot write decompositions: {0}")]
    Dump(#[source] io::Error),

    #[error("cannot serialise surviving rates: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub survivors: CandidateSet,
    /// Rows pulled from the feed, including rejected ones.
    pub rows: usize,
    pub rejected: usize,
    pub evicted: usize,
}

pub struct Session<'a> {
    settings: &'a Settings,
}
impl<'a> Session<'a> {
    pub fn new(settings: &'a Settings) -> Result<Self, SessionError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Reads prices from the configured file.
    pub fn run(&self, output: impl FnMut(&str)) -> Result<SessionOutcome, SessionError> {
        info!(
            "parsing price file {} column {}",
            self.settings.price_file_path.display(),
            self.settings.column_number
        );
        let feed = PriceFeed::open(&self.settings.price_file_path, self.settings.column_number)?;
        self.run_with_feed(feed, output)
    }

    /// Reads prices from an arbitrary feed. Fatal feed errors abort the session; all other errors
    /// are logged and the offending row is skipped.
    pub fn run_with_feed<I>(&self, prices: I, mut output: impl FnMut(&str)) -> Result<SessionOutcome, SessionError>
    where
        I: IntoIterator<Item = Result<Price, FeedError>>,
    {
        let start_time = Instant::now();
        let range = self.settings.rate_range();
        let engine = DecompositionEngine::new(self.settings.model, self.settings.precision());
        let mut tracker = RateSurvivalTracker::new(engine, CandidateSet::from(&range));
        debug!(
            "{} candidate rate(s) in {range} under the {} model",
            tracker.candidates().len(),
            self.settings.model
        );

        let mut dump = match &self.settings.dump_path {
            None => None,
            Some(path) => Some(CsvWriter::create(path).map_err(SessionError::Dump)?),
        };

        let (mut rows, mut rejected) = (0, 0);
        for price in prices {
            rows += 1;
            let price = match price {
                Ok(price) => price,
                Err(err) if err.is_fatal() => return Err(err.into()),
                Err(err) => {
                    warn!("skipping row: {err}");
                    rejected += 1;
                    continue;
                }
            };

            match &mut dump {
                None => {
                    tracker.observe(price.value);
                }
                Some(dump) => {
                    let mut dump_err = None;
                    tracker.observe_with(price.value, |decomposition| {
                        if dump_err.is_none() {
                            dump_err = dump.append(decomposition).err();
                        }
                    });
                    if let Some(err) = dump_err {
                        return Err(SessionError::Dump(err));
                    }
                }
            }
        }
        if let Some(dump) = &mut dump {
            dump.flush().map_err(SessionError::Dump)?;
        }

        let evicted = tracker.evicted();
        let survivors = tracker.into_survivors();
        output(&serde_json::to_string(&survivors)?);

        let elapsed_time = start_time.elapsed();
        info!(
            "processed {rows} row(s) ({rejected} rejected) in {}s; {} of {} rate(s) survived",
            elapsed_time.as_millis() as f64 / 1_000.,
            survivors.len(),
            range.len()
        );
        Ok(SessionOutcome {
            survivors,
            rows,
            rejected,
            evicted,
        })
    }
}
