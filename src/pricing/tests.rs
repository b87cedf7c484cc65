use super::*;
use crate::rounding::Precision;
use assert_float_eq::*;
use strum::IntoEnumIterator;

#[test]
fn markup_transforms() {
    assert_float_absolute_eq!(119.0, markup(100.0, 19.0), 1e-12);
    assert_float_absolute_eq!(100.0, reverse_markup(119.0, 19.0), 1e-12);
    assert_float_absolute_eq!(93.457943925, reverse_markup(100.0, 7.0), 1e-9);
}

#[test]
fn margin_transforms() {
    assert_float_absolute_eq!(75.0, margin(100.0, 25.0), 1e-12);
    assert_float_absolute_eq!(100.0, reverse_margin(75.0, 25.0), 1e-12);
}

#[test]
fn forward_and_reverse_are_inverses() {
    for model in PricingModel::iter() {
        for rate in [0.0, 1.0, 7.5, 19.0, 25.0] {
            for base in [0.01, 1.0, 93.46, 1234.5] {
                let price = model.forward(base, rate);
                assert_float_relative_eq!(base, model.reverse(price, rate), 1e-12);
            }
        }
    }
}

#[test]
fn rebuilt_generated_prices_match() {
    let precision = Precision::new(2.0);
    for model in PricingModel::iter() {
        for rate in 1..=25 {
            let rate = rate as f64;
            for cents in (1..5_000).step_by(7) {
                let base = cents as f64 / 100.0;
                let price = precision.round(model.forward(base, rate));
                let reversed = model.reverse(price, rate);
                let candidates = [precision.floor(reversed), precision.ceiling(reversed)];
                assert!(
                    candidates
                        .iter()
                        .any(|&candidate| precision.round(model.forward(candidate, rate)) == price),
                    "{model} at {rate}% for base {base} (price {price})"
                );
            }
        }
    }
}

#[test]
fn singularities_propagate() {
    assert!(PricingModel::Markup.reverse(10.0, PricingModel::Markup.singular_rate()).is_infinite());
    assert!(PricingModel::Margin.reverse(10.0, PricingModel::Margin.singular_rate()).is_infinite());
    assert!(PricingModel::Margin.reverse(0.0, 100.0).is_nan());
}

#[test]
fn parse_and_display() {
    assert_eq!(PricingModel::Markup, "markup".parse().unwrap());
    assert_eq!(PricingModel::Margin, "Margin".parse().unwrap());
    assert_eq!(
        "unsupported pricing model discount",
        "discount".parse::<PricingModel>().unwrap_err().to_string()
    );
    for model in PricingModel::iter() {
        assert_eq!(model, model.to_string().parse().unwrap());
    }
    assert_eq!(PricingModel::Markup, PricingModel::default());
}
