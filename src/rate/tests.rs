use super::*;

#[test]
fn default_range_by_hundredths() {
    let range = RateRange::new(1.0, 25.0, RateIncrement::HUNDREDTH);
    assert_eq!(2401, range.len());
    let rates: Vec<_> = range.iter().collect();
    assert_eq!(2401, rates.len());
    assert_eq!(Rate::from_hundredths(100), rates[0]);
    assert_eq!(Rate::from_hundredths(101), rates[1]);
    assert_eq!(Rate::from_hundredths(2500), rates[2400]);
    assert!(rates.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn whole_percent_range() {
    let range = RateRange::new(1.0, 5.0, RateIncrement::ONE);
    let rates: Vec<_> = range.iter().map(|rate| rate.as_percent()).collect();
    assert_eq!(vec![1.0, 2.0, 3.0, 4.0, 5.0], rates);
}

#[test]
fn end_excluded_when_not_on_a_step() {
    let range = RateRange::new(1.0, 2.0, 30);
    let rates: Vec<_> = range.iter().map(|rate| rate.as_percent()).collect();
    assert_eq!(vec![1.0, 1.3, 1.6, 1.9], rates);
    assert!(range.contains(Rate::from_percent(1.6)));
    assert!(!range.contains(Rate::from_percent(2.0)));
}

#[test]
fn no_drift_on_fractional_steps() {
    let range = RateRange::new(0.0, 1.0, RateIncrement::TENTH);
    let rates: Vec<_> = range.iter().map(|rate| rate.as_percent()).collect();
    assert_eq!(vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0], rates);
}

#[test]
fn empty_ranges() {
    assert!(RateRange::new(25.0, 1.0, RateIncrement::ONE).is_empty());
    assert_eq!(0, RateRange::new(25.0, 1.0, RateIncrement::ONE).iter().count());
    assert!(RateRange::new(1.0, 25.0, 0).is_empty());
    assert_eq!(0, RateRange::new(1.0, 25.0, 0).len());
    assert_eq!(1, RateRange::new(5.0, 5.0, RateIncrement::HALF).len());
}

#[test]
fn negative_rates() {
    let range = RateRange::new(-1.0, 1.0, RateIncrement::ONE);
    let rates: Vec<_> = range.iter().map(|rate| rate.hundredths()).collect();
    assert_eq!(vec![-100, 0, 100], rates);
}

#[test]
fn rate_from_percent_rounds_to_hundredths() {
    assert_eq!(Rate::from_hundredths(1907), Rate::from_percent(19.07));
    assert_eq!(Rate::from_hundredths(29), Rate::from_percent(0.29));
    assert_eq!(Rate::from_hundredths(1), Rate::from_percent(0.005));
}

#[test]
fn display_and_serialise() {
    assert_eq!("7.00", Rate::from_percent(7.0).to_string());
    assert_eq!("19.05", Rate::from_percent(19.05).to_string());
    assert_eq!("1.00-25.00 step 0.01", RateRange::new(1.0, 25.0, 1).to_string());
    let rates = vec![Rate::from_hundredths(100), Rate::from_hundredths(1905)];
    assert_eq!("[1,19.05]", serde_json::to_string(&rates).unwrap());
    let rates = vec![Rate::from_hundredths(-100), Rate::from_hundredths(0), Rate::from_hundredths(-5)];
    assert_eq!("[-1,0,-0.05]", serde_json::to_string(&rates).unwrap());
}

#[test]
fn extreme_ranges_do_not_overflow() {
    assert_eq!(Rate::from_hundredths(i64::MAX), Rate::from_percent(1e17));
    assert_eq!(Rate::from_hundredths(i64::MIN), Rate::from_percent(-1e17));

    let range = RateRange::new(-1e17, 1e17, RateIncrement::HUNDREDTH);
    assert_eq!(None, range.checked_len());
    assert_eq!(usize::MAX, range.len());
    assert!(range.contains(Rate::from_hundredths(i64::MAX)));
    let head: Vec<_> = range.iter().take(2).map(|rate| rate.hundredths()).collect();
    assert_eq!(vec![i64::MIN, i64::MIN + 1], head);

    let range = RateRange {
        start: Rate::from_hundredths(i64::MAX - 2),
        end: Rate::from_hundredths(i64::MAX),
        increment: RateIncrement::HUNDREDTH,
    };
    assert_eq!(Some(3), range.checked_len());
    let tail: Vec<_> = range.iter().map(|rate| rate.hundredths()).collect();
    assert_eq!(vec![i64::MAX - 2, i64::MAX - 1, i64::MAX], tail);
}
