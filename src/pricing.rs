//! Forward and reverse pricing transforms.
//!
//! A forward transform takes a base price and a percentage rate to a retail price; the reverse
//! recovers the base from the retail price. The two are algebraic inverses in exact arithmetic.
//!
//! The reverse transform divides by `1 ± rate/100`, so it is undefined at the model's
//! [singular rate](PricingModel::singular_rate). Infinite and NaN results are returned as-is.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;
use strum_macros::{EnumCount, EnumIter};

/// A base price of `b` sold at a markup of `r` percent retails at `b × (1 + r/100)`.
#[inline(always)]
pub fn markup(base: f64, rate: f64) -> f64 {
    base * (1.0 + rate / 100.0)
}

#[inline(always)]
pub fn reverse_markup(price: f64, rate: f64) -> f64 {
    price / (1.0 + rate / 100.0)
}

/// A base price of `b` sold at a margin of `r` percent retails at `b × (1 − r/100)`.
#[inline(always)]
pub fn margin(base: f64, rate: f64) -> f64 {
    base * (1.0 - rate / 100.0)
}

#[inline(always)]
pub fn reverse_margin(price: f64, rate: f64) -> f64 {
    price / (1.0 - rate / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCount, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    #[default]
    Markup,
    Margin,
}
impl PricingModel {
    #[inline]
    pub fn forward(&self, base: f64, rate: f64) -> f64 {
        match self {
            PricingModel::Markup => markup(base, rate),
            PricingModel::Margin => margin(base, rate),
        }
    }

    #[inline]
    pub fn reverse(&self, price: f64, rate: f64) -> f64 {
        match self {
            PricingModel::Markup => reverse_markup(price, rate),
            PricingModel::Margin => reverse_margin(price, rate),
        }
    }

    /// The rate (in percent) at which [reverse](Self::reverse) divides by zero.
    pub fn singular_rate(&self) -> f64 {
        match self {
            PricingModel::Markup => -100.0,
            PricingModel::Margin => 100.0,
        }
    }
}

impl Display for PricingModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingModel::Markup => write!(f, "markup"),
            PricingModel::Margin => write!(f, "margin"),
        }
    }
}

impl FromStr for PricingModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" => Ok(PricingModel::Markup),
            "margin" => Ok(PricingModel::Margin),
            _ => bail!("unsupported pricing model {s}"),
        }
    }
}

#[cfg(test)]
mod tests;
