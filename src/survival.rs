//! Incremental narrowing of the candidate rate set.
//!
//! Every observed price is decomposed under each rate still in the [CandidateSet]. A rate whose
//! decomposition reproduces the price from neither the floored nor the ceiled base cannot have been
//! the rate used, and is evicted for good. Evictions are independent per rate, so the surviving set
//! does not depend on the order in which prices are observed.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::decompose::{Decomposition, DecompositionEngine};
use crate::rate::{Rate, RateRange};

/// An ordered set of rates that can only shrink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    rates: BTreeSet<Rate>,
}
impl CandidateSet {
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn contains(&self, rate: Rate) -> bool {
        self.rates.contains(&rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = Rate> + '_ {
        self.rates.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Rate> {
        self.iter().collect()
    }

    fn remove(&mut self, rate: Rate) -> bool {
        self.rates.remove(&rate)
    }
}

impl From<&RateRange> for CandidateSet {
    fn from(range: &RateRange) -> Self {
        range.iter().collect()
    }
}

impl FromIterator<Rate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Rate>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

/// Owns the live [CandidateSet] for a session and applies the survival test to each price.
#[derive(Debug)]
pub struct RateSurvivalTracker {
    engine: DecompositionEngine,
    candidates: CandidateSet,
    observed: usize,
    evicted: usize,
}
impl RateSurvivalTracker {
    pub fn new(engine: DecompositionEngine, candidates: CandidateSet) -> Self {
        Self {
            engine,
            candidates,
            observed: 0,
            evicted: 0,
        }
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of prices observed so far.
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Total number of rates evicted so far.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Tests every live rate against `price`, evicting the ones that fail. Returns the evicted
    /// rates in ascending order.
    pub fn observe(&mut self, price: f64) -> Vec<Rate> {
        self.observe_with(price, |_| {})
    }

    /// As [observe](Self::observe), additionally passing every decomposition to `inspect` before
    /// the survival test is applied to it.
    pub fn observe_with(&mut self, price: f64, mut inspect: impl FnMut(&Decomposition)) -> Vec<Rate> {
        self.observed += 1;
        let failing: Vec<_> = self
            .engine
            .run(price, self.candidates.to_vec())
            .filter_map(|decomposition| {
                inspect(&decomposition);
                (!decomposition.reproduces_input()).then_some(decomposition.rate)
            })
            .collect();

        for &rate in &failing {
            self.candidates.remove(rate);
        }
        self.evicted += failing.len();
        if !failing.is_empty() {
            debug!(
                "price {price} evicted {} rate(s), {} remaining",
                failing.len(),
                self.candidates.len()
            );
        }
        failing
    }

    pub fn into_survivors(self) -> CandidateSet {
        self.candidates
    }
}
