//! Testing helpers.

use assert_float_eq::*;

use crate::rate::Rate;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Shorthand for a list of rates given in percent.
pub fn rates(percents: &[f64]) -> Vec<Rate> {
    percents.iter().map(|&percent| Rate::from_percent(percent)).collect()
}
