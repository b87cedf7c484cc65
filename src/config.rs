//! Session settings and their validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::pricing::PricingModel;
use crate::rate::{Rate, RateIncrement, RateRange};
use crate::rounding::Precision;

pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
pub const DEFAULT_START_RATE: f64 = 1.0;
pub const DEFAULT_END_RATE: f64 = 25.0;
pub const DEFAULT_INCREMENT_RATE: u32 = RateIncrement::HUNDREDTH;

/// Largest magnitude accepted for either rate bound, in percent.
pub const MAX_RATE_MAGNITUDE: f64 = 1_000_000.0;

/// Most candidate rates a single session will track.
pub const MAX_CANDIDATE_RATES: usize = 1_000_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("rate bounds must be finite, got {start}..={end}")]
    NonFiniteRate { start: f64, end: f64 },

    #[error("rate bounds must lie within ±{}%, got {start}..={end}", MAX_RATE_MAGNITUDE)]
    RateOutOfBounds { start: f64, end: f64 },

    #[error("rate increment must be at least one hundredth of a percent")]
    ZeroIncrement,

    #[error("rate range {range} holds {len} candidates, more than the limit of {}", MAX_CANDIDATE_RATES)]
    TooManyRates { range: RateRange, len: usize },

    #[error("empty rate range {0}")]
    EmptyRange(RateRange),

    #[error("rate range {range} includes {rate}, at which the {model} model is undefined")]
    SingularRate {
        range: RateRange,
        rate: Rate,
        model: PricingModel,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub price_file_path: PathBuf,
    pub column_number: usize,
    pub decimal_places: u32,
    pub start_rate: f64,
    pub end_rate: f64,
    /// Step between candidate rates, in hundredths of a percent.
    pub increment_rate: u32,
    pub model: PricingModel,
    /// Where to write every decomposition as CSV, if anywhere.
    pub dump_path: Option<PathBuf>,
}
impl Settings {
    pub fn new(price_file_path: impl Into<PathBuf>, column_number: usize) -> Self {
        Self {
            price_file_path: price_file_path.into(),
            column_number,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            start_rate: DEFAULT_START_RATE,
            end_rate: DEFAULT_END_RATE,
            increment_rate: DEFAULT_INCREMENT_RATE,
            model: PricingModel::default(),
            dump_path: None,
        }
    }

    pub fn precision(&self) -> Precision {
        Precision::from(self.decimal_places)
    }

    pub fn rate_range(&self) -> RateRange {
        RateRange::new(self.start_rate, self.end_rate, self.increment_rate)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_rates(self.start_rate, self.end_rate, self.increment_rate, self.model).map(|_| ())
    }
}

/// Checks that the given bounds yield at least one and at most [MAX_CANDIDATE_RATES] candidate rates,
/// and that none of them sits on the singularity of `model`. Returns the validated range.
pub fn validate_rates(
    start_rate: f64,
    end_rate: f64,
    increment_rate: u32,
    model: PricingModel,
) -> Result<RateRange, ConfigError> {
    if !start_rate.is_finite() || !end_rate.is_finite() {
        return Err(ConfigError::NonFiniteRate {
            start: start_rate,
            end: end_rate,
        });
    }
    if start_rate.abs() > MAX_RATE_MAGNITUDE || end_rate.abs() > MAX_RATE_MAGNITUDE {
        return Err(ConfigError::RateOutOfBounds {
            start: start_rate,
            end: end_rate,
        });
    }
    if increment_rate == 0 {
        return Err(ConfigError::ZeroIncrement);
    }
    let range = RateRange::new(start_rate, end_rate, increment_rate);
    if range.is_empty() {
        return Err(ConfigError::EmptyRange(range));
    }
    let len = range.len();
    if len > MAX_CANDIDATE_RATES {
        return Err(ConfigError::TooManyRates { range, len });
    }
    let singular = Rate::from_percent(model.singular_rate());
    if range.contains(singular) {
        return Err(ConfigError::SingularRate {
            range,
            rate: singular,
            model,
        });
    }
    Ok(range)
}
