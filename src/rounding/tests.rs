use super::*;
use assert_float_eq::*;
use strum::IntoEnumIterator;

#[test]
fn scale_factor_below_one() {
    assert_eq!(1.0, scale_factor(0.0));
    assert_eq!(1.0, scale_factor(0.99));
    assert_eq!(1.0, scale_factor(-3.0));
}

#[test]
fn scale_factor_rounds_decimal_places() {
    assert_eq!(10.0, scale_factor(1.0));
    assert_eq!(100.0, scale_factor(2.0));
    assert_eq!(100.0, scale_factor(2.4));
    assert_eq!(1000.0, scale_factor(2.5));
    assert_eq!(10_000.0, scale_factor(4.0));
}

#[test]
fn round_floor_ceiling() {
    assert_float_absolute_eq!(93.46, round(93.457943925, 2.0), 1e-12);
    assert_float_absolute_eq!(93.45, floor(93.457943925, 2.0), 1e-12);
    assert_float_absolute_eq!(93.46, ceiling(93.457943925, 2.0), 1e-12);

    assert_eq!(3.0, round(2.5, 0.0));
    assert_eq!(2.0, floor(2.5, 0.0));
    assert_eq!(3.0, ceiling(2.5, 0.0));
}

#[test]
fn round_ties_towards_positive_infinity() {
    assert_eq!(1.0, round(0.5, 0.0));
    assert_eq!(-2.0, round(-2.5, 0.0));
    assert_eq!(-3.0, round(-2.6, 0.0));
}

#[test]
fn whole_numbers_are_unchanged() {
    for mode in RoundingMode::iter() {
        assert_eq!(100.0, Precision::new(2.0).apply(mode, 100.0));
        assert_eq!(119.0, Precision::new(2.0).apply(mode, 119.0));
    }
}

#[test]
fn round_idempotent_for_fixed_decimal_places() {
    let values = [0.0, 0.004, 1.005, 12.3456, 93.457943925, 99.9915, 100.0022, 1234.56789];
    for decimal_places in [0.0, 1.0, 2.0, 3.0] {
        let precision = Precision::new(decimal_places);
        for value in values {
            let once = precision.round(value);
            assert_eq!(once, precision.round(once), "{value} at {decimal_places}dp");
        }
    }
}

#[test]
fn floor_not_above_ceiling() {
    let precision = Precision::from(2);
    for value in [0.011, 5.555, 80.016, 111.2149] {
        let floor = precision.floor(value);
        let mid = precision.round(value);
        let ceiling = precision.ceiling(value);
        assert!(floor <= mid && mid <= ceiling, "{floor} ≤ {mid} ≤ {ceiling}");
    }
}

#[test]
fn representation_error_at_boundary() {
    // 0.07 × 100 = 7.000000000000001 in binary floating point
    assert_eq!(0.08, ceiling(0.07, 2.0));
    assert_eq!(0.07, round(0.07, 2.0));
}
