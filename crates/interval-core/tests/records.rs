// File: crates/interval-core/tests/records.rs
// Purpose: Record validation policy (reject non-finite, negative and inverted bounds).

use interval_core::record::default_bounds;
use interval_core::{ChartError, IntervalRecord, IntervalSeries};

#[test]
fn accepts_valid_record() {
    let r = IntervalRecord::try_new("08:30", 3.0, 2.0, 2.0, 4.0).unwrap();
    assert_eq!(r.label, "08:30");
    assert_eq!(r.upper_bound, 4.0);
    // equal bounds are fine
    assert!(IntervalRecord::try_new("x", 0.0, 0.0, 1.0, 1.0).is_ok());
}

#[test]
fn rejects_negative_values() {
    let err = IntervalRecord::try_new("x", -1.0, 0.0, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, ChartError::Negative { field: "required", .. }));
    let err = IntervalRecord::try_new("x", 1.0, -0.5, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, ChartError::Negative { field: "assigned", .. }));
}

#[test]
fn rejects_non_finite_values() {
    let err = IntervalRecord::try_new("x", f64::NAN, 0.0, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { field: "required", .. }));
    let err = IntervalRecord::try_new("x", 1.0, 1.0, 0.0, f64::INFINITY).unwrap_err();
    assert!(matches!(err, ChartError::NonFinite { field: "upper_bound", .. }));
}

#[test]
fn rejects_inverted_bounds() {
    let err = IntervalRecord::try_new("x", 1.0, 1.0, 5.0, 2.0).unwrap_err();
    assert!(matches!(err, ChartError::InvertedBounds { lower, upper, .. } if lower == 5.0 && upper == 2.0));
}

#[test]
fn series_reports_offending_index() {
    let good = IntervalRecord::try_new("a", 1.0, 1.0, 0.0, 2.0).unwrap();
    let bad = IntervalRecord { label: "b".into(), required: 1.0, assigned: 1.0, lower_bound: 3.0, upper_bound: 2.0 };
    let err = IntervalSeries::try_from_records(vec![good.clone(), good, bad]).unwrap_err();
    assert!(matches!(err, ChartError::InvertedBounds { index: Some(2), .. }));
    assert!(err.to_string().contains("record 2"));
}

#[test]
fn standalone_error_has_no_position() {
    let err = IntervalRecord::try_new("x", -1.0, 0.0, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, ChartError::Negative { index: None, .. }));
    assert_eq!(err.to_string(), "required must be non-negative, got -1");
}

#[test]
fn default_bounds_follow_required_bands() {
    // below 10: +/- 1, floored at zero
    assert_eq!(default_bounds(0.0), (0.0, 1.0));
    assert_eq!(default_bounds(5.0), (4.0, 6.0));
    assert_eq!(default_bounds(9.0), (8.0, 10.0));
    // 10..20: +/- 2
    assert_eq!(default_bounds(10.0), (8.0, 12.0));
    assert_eq!(default_bounds(19.0), (17.0, 21.0));
    // 20 and up: floor(90%) ..= ceil(110%)
    assert_eq!(default_bounds(20.0), (18.0, 22.0));
    assert_eq!(default_bounds(25.0), (22.0, 28.0));
    assert_eq!(default_bounds(100.0), (90.0, 110.0));
}

#[test]
fn with_default_bounds_builds_valid_record() {
    let r = IntervalRecord::with_default_bounds("09:00", 12.0, 11.0).unwrap();
    assert_eq!((r.lower_bound, r.upper_bound), (10.0, 14.0));
    assert!(IntervalRecord::with_default_bounds("x", f64::NAN, 0.0).is_err());
}

#[test]
fn empty_series_is_valid() {
    let s = IntervalSeries::try_from_records(Vec::new()).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.max_upper_bound(), 0.0);
}
