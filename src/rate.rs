//! Percentage rates held in fixed point, and the inclusive ranges that enumerate them.
//!
//! A [Rate] counts hundredths of a percent, so stepping through a range never drifts the way
//! repeated floating-point addition would. Rates only become `f64` when handed to a transform or
//! serialised.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Stepping presets, in hundredths of a percent.
pub struct RateIncrement;
impl RateIncrement {
    pub const ONE: u32 = 100;
    pub const HALF: u32 = 50;
    pub const QUARTER: u32 = 25;
    pub const TENTH: u32 = 10;
    pub const TWENTIETH: u32 = 5;
    pub const HUNDREDTH: u32 = 1;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rate(i64);

impl Rate {
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Converts a percentage to the nearest hundredth. Out-of-range and non-finite inputs saturate.
    pub fn from_percent(percent: f64) -> Self {
        Self((percent * 100.0).round() as i64)
    }

    pub fn hundredths(&self) -> i64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Display for Rate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.as_percent())
    }
}

/// Serialises as a number of percent: whole percentages as integers, the rest as decimals.
impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_percent())
        }
    }
}

/// An inclusive range of rates, enumerated from `start` in steps of `increment` hundredths.
/// The end is included only if a step lands on it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRange {
    pub start: Rate,
    pub end: Rate,
    pub increment: u32,
}
impl RateRange {
    pub fn new(start_percent: f64, end_percent: f64, increment: u32) -> Self {
        Self {
            start: Rate::from_percent(start_percent),
            end: Rate::from_percent(end_percent),
            increment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.increment == 0 || self.start > self.end
    }

    /// Number of rates in the range, or `None` if it does not fit in a `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        let steps = (self.end.0 as i128 - self.start.0 as i128) / self.increment as i128;
        usize::try_from(steps + 1).ok()
    }

    /// Number of rates in the range, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    pub fn contains(&self, rate: Rate) -> bool {
        !self.is_empty()
            && rate >= self.start
            && rate <= self.end
            && (rate.0 as i128 - self.start.0 as i128) % self.increment as i128 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Rate> + '_ {
        (0..self.len()).map_while(move |step| {
            i64::try_from(step)
                .ok()
                .and_then(|step| step.checked_mul(self.increment as i64))
                .and_then(|offset| self.start.0.checked_add(offset))
                .map(Rate)
        })
    }
}

impl Display for RateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} step {:.2}", self.start, self.end, self.increment as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests;
