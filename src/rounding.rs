//! Decimal rounding of `f64` values by scaling to an integer grid.
//!
//! Prices are rounded by multiplying by `10^N`, applying an integer rounding rule and dividing
//! back. Values near a rounding boundary inherit the usual floating-point representation error;
//! this is deliberate, as the decision rule downstream is exact equality of the rounded results.

use strum_macros::{Display, EnumCount, EnumIter};

/// Converts a number of decimal places into a scale factor. Counts below 1 collapse to a factor
/// of 1 (whole units); fractional counts are rounded to the nearest integer.
pub fn scale_factor(decimal_places: f64) -> f64 {
    if decimal_places < 1.0 {
        1.0
    } else {
        10f64.powi(decimal_places.round() as i32)
    }
}

pub fn round(number: f64, decimal_places: f64) -> f64 {
    Precision::new(decimal_places).round(number)
}

pub fn floor(number: f64, decimal_places: f64) -> f64 {
    Precision::new(decimal_places).floor(number)
}

pub fn ceiling(number: f64, decimal_places: f64) -> f64 {
    Precision::new(decimal_places).ceiling(number)
}

/// Rounds to the nearest integer, with exact ties going towards positive infinity.
#[inline(always)]
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum RoundingMode {
    Floor,
    Nearest,
    Ceiling,
}

/// A fixed number of decimal places, with its scale factor computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    factor: f64,
}
impl Precision {
    pub fn new(decimal_places: f64) -> Self {
        Self {
            factor: scale_factor(decimal_places),
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline]
    pub fn apply(&self, mode: RoundingMode, number: f64) -> f64 {
        match mode {
            RoundingMode::Floor => self.floor(number),
            RoundingMode::Nearest => self.round(number),
            RoundingMode::Ceiling => self.ceiling(number),
        }
    }

    #[inline]
    pub fn round(&self, number: f64) -> f64 {
        round_half_up(number * self.factor) / self.factor
    }

    #[inline]
    pub fn floor(&self, number: f64) -> f64 {
        (number * self.factor).floor() / self.factor
    }

    #[inline]
    pub fn ceiling(&self, number: f64) -> f64 {
        (number * self.factor).ceil() / self.factor
    }
}

impl From<u32> for Precision {
    fn from(decimal_places: u32) -> Self {
        Self::new(decimal_places as f64)
    }
}

#[cfg(test)]
mod tests;
