//! Decomposition of an observed price into the base prices a rate could have started from.
//!
//! For every candidate rate, the observed price is reversed into an unrounded base, which is then
//! floored, rounded and ceiled to the configured precision. Each of the three bases is pushed
//! forward through the same rate and rounded again, yielding the prices that a retailer would have
//! displayed had they started from that base.

use serde::Serialize;

use crate::pricing::PricingModel;
use crate::rate::Rate;
use crate::rounding::{Precision, RoundingMode};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decomposition {
    pub input: f64,
    pub rate: Rate,
    pub reversed_min: f64,
    pub reversed_mid: f64,
    pub reversed_max: f64,
    pub rebuilt_min: f64,
    pub rebuilt_mid: f64,
    pub rebuilt_max: f64,
}
impl Decomposition {
    /// Whether the input price is reproduced from either the floored or the ceiled base. The
    /// mid-rounded base is not consulted; it always lies between the other two.
    pub fn reproduces_input(&self) -> bool {
        self.input == self.rebuilt_min || self.input == self.rebuilt_max
    }

    pub fn reversed(&self, mode: RoundingMode) -> f64 {
        match mode {
            RoundingMode::Floor => self.reversed_min,
            RoundingMode::Nearest => self.reversed_mid,
            RoundingMode::Ceiling => self.reversed_max,
        }
    }

    pub fn rebuilt(&self, mode: RoundingMode) -> f64 {
        match mode {
            RoundingMode::Floor => self.rebuilt_min,
            RoundingMode::Nearest => self.rebuilt_mid,
            RoundingMode::Ceiling => self.rebuilt_max,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecompositionEngine {
    model: PricingModel,
    precision: Precision,
}
impl DecompositionEngine {
    pub fn new(model: PricingModel, precision: Precision) -> Self {
        Self { model, precision }
    }

    pub fn decompose(&self, price: f64, rate: Rate) -> Decomposition {
        let percent = rate.as_percent();
        let reversed = self.model.reverse(price, percent);
        let reversed_min = self.precision.floor(reversed);
        let reversed_mid = self.precision.round(reversed);
        let reversed_max = self.precision.ceiling(reversed);
        Decomposition {
            input: price,
            rate,
            reversed_min,
            reversed_mid,
            reversed_max,
            rebuilt_min: self.rebuild(reversed_min, percent),
            rebuilt_mid: self.rebuild(reversed_mid, percent),
            rebuilt_max: self.rebuild(reversed_max, percent),
        }
    }

    /// Decomposes `price` under each of the given `rates`, lazily and in order.
    pub fn run<'a, I>(&'a self, price: f64, rates: I) -> impl Iterator<Item = Decomposition> + 'a
    where
        I: IntoIterator<Item = Rate>,
        I::IntoIter: 'a,
    {
        rates.into_iter().map(move |rate| self.decompose(price, rate))
    }

    #[inline(always)]
    fn rebuild(&self, base: f64, percent: f64) -> f64 {
        self.precision.round(self.model.forward(base, percent))
    }
}
