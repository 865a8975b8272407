// File: crates/interval-core/tests/layout.rs
// Purpose: Layout quantities and the linear scale invariants.

use interval_core::{ChartError, ChartLayout, IntervalRecord, IntervalSeries};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

fn rec(required: f64, assigned: f64, lo: f64, hi: f64) -> IntervalRecord {
    IntervalRecord::try_new("00:00", required, assigned, lo, hi).expect("valid record")
}

#[test]
fn single_record_scenario() {
    let series = IntervalSeries::try_from_records(vec![rec(5.0, 5.0, 4.0, 6.0)]).unwrap();
    let l = ChartLayout::compute(&series, 700, 350, 50).unwrap();

    assert_eq!(l.max_y, 7.0);
    assert!(approx(l.chart_width, 600.0));
    assert!(approx(l.chart_height, 250.0));
    assert!(approx(l.step_x, 600.0));
    assert!(approx(l.unit_y, 250.0 / 7.0));
    assert!(approx(l.x_at(0), 650.0));
    assert!(approx(l.y_scale.length_px(5.0), 178.571));
    assert!(approx(l.y_at(5.0), 121.429));
    assert!(approx(l.y_at(4.0), 157.143));
    assert!(approx(l.y_at(6.0), 85.714));
}

#[test]
fn empty_series_defaults_ceiling_to_one() {
    let l = ChartLayout::compute(&IntervalSeries::empty(), 700, 350, 50).unwrap();
    assert_eq!(l.max_y, 1.0);
    assert_eq!(l.step_x, 0.0);
    assert!(l.unit_y.is_finite());
}

#[test]
fn ceiling_is_above_every_upper_bound() {
    let series = IntervalSeries::try_from_records(vec![
        rec(1.0, 1.0, 0.0, 2.5),
        rec(3.0, 2.0, 1.0, 9.0),
        rec(0.0, 0.0, 0.0, 0.0),
    ])
    .unwrap();
    let l = ChartLayout::compute(&series, 700, 350, 50).unwrap();
    assert!(l.max_y >= 1.0);
    for r in series.iter() {
        assert!(l.max_y > r.upper_bound);
    }
    assert_eq!(l.max_y, 10.0);
}

#[test]
fn all_zero_bounds_give_unit_ceiling() {
    let series = IntervalSeries::try_from_records(vec![rec(0.0, 0.0, 0.0, 0.0); 4]).unwrap();
    let l = ChartLayout::compute(&series, 700, 350, 50).unwrap();
    assert_eq!(l.max_y, 1.0);
}

#[test]
fn baseline_and_top_map_exactly() {
    let series = IntervalSeries::try_from_records(vec![rec(2.0, 1.0, 1.0, 3.0)]).unwrap();
    for (w, h, off) in [(700, 350, 50), (1024, 640, 20), (300, 200, 0)] {
        let l = ChartLayout::compute(&series, w, h, off).unwrap();
        assert!(approx(l.y_at(0.0), off as f32 + l.chart_height));
        assert!(approx(l.y_at(l.max_y), off as f32));
        assert!(approx(l.y_scale.from_px(l.y_at(2.0)) as f32, 2.0));
    }
}

#[test]
fn anchors_strictly_increase() {
    let series = IntervalSeries::try_from_records(vec![rec(1.0, 1.0, 0.0, 1.0); 48]).unwrap();
    let l = ChartLayout::compute(&series, 700, 350, 50).unwrap();
    for i in 0..series.len() - 1 {
        assert!(l.x_at(i + 1) > l.x_at(i));
    }
    // last anchor lands on the right edge of the plot area
    assert!(approx(l.x_at(series.len() - 1), 50.0 + l.chart_width));
}

#[test]
fn rejects_margin_without_plot_area() {
    let err = ChartLayout::compute(&IntervalSeries::empty(), 100, 350, 50).unwrap_err();
    assert!(matches!(err, ChartError::InvalidSurface { width: 100, height: 350, offset: 50 }));
    assert!(ChartLayout::compute(&IntervalSeries::empty(), 700, 350, -1).is_err());
}

#[test]
fn huge_margin_is_rejected_not_overflowed() {
    for offset in [i32::MAX / 2 + 1, i32::MAX] {
        let err = ChartLayout::compute(&IntervalSeries::empty(), 700, 350, offset).unwrap_err();
        assert!(matches!(err, ChartError::InvalidSurface { offset: o, .. } if o == offset));
    }
    // one pixel of plot area left at the extreme
    let l = ChartLayout::compute(&IntervalSeries::empty(), i32::MAX, i32::MAX, i32::MAX / 2).unwrap();
    assert_eq!(l.chart_width, 1.0);
}

#[test]
fn anchors_start_at_left_margin() {
    let series = IntervalSeries::try_from_records(vec![rec(1.0, 1.0, 0.0, 1.0); 2]).unwrap();
    let l = ChartLayout::compute(&series, 500, 300, 20).unwrap();
    assert!(approx(l.x_scale.left_px, 20.0));
    assert!(approx(l.x_at(0), 20.0 + 230.0));
}
