// tests/differencer_properties.rs

use proptest::prelude::*;
use udp_jitter_render::data_analysis::differencer::{difference, difference_values, SampleSeries};

fn sorted_series() -> impl Strategy<Value = SampleSeries> {
    prop::collection::vec((0.0f64..1_000.0, -1_000.0f64..1_000.0), 0..64).prop_map(|mut pts| {
        pts.sort_by(|a, b| a.0.total_cmp(&b.0));
        SampleSeries::new(pts)
    })
}

proptest! {
    #[test]
    fn prop_length_is_one_shorter(series in sorted_series()) {
        let diff = difference(&series);
        prop_assert_eq!(diff.len(), series.len().saturating_sub(1));
    }

    #[test]
    fn prop_each_delta_is_consecutive_difference(series in sorted_series()) {
        let diff = difference(&series);
        for (i, &(t, d)) in diff.points.iter().enumerate() {
            prop_assert_eq!(t, series.points[i + 1].0);
            prop_assert_eq!(d, series.points[i + 1].1 - series.points[i].1);
        }
    }

    #[test]
    fn prop_repeat_calls_agree(series in sorted_series()) {
        prop_assert_eq!(difference(&series), difference(&series));
    }

    #[test]
    fn prop_constant_shift_does_not_change_deltas(
        series in sorted_series(),
        c in -1_000.0f64..1_000.0,
    ) {
        let shifted = SampleSeries::new(series.points.iter().map(|&(t, v)| (t, v + c)).collect());
        let a = difference(&series);
        let b = difference(&shifted);
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.points.iter().zip(&b.points) {
            prop_assert_eq!(x.0, y.0);
            prop_assert!((x.1 - y.1).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_value_form_matches_series_form(series in sorted_series()) {
        prop_assert_eq!(difference_values(&series.values()), difference(&series).deltas());
    }
}

#[test]
fn test_documented_scenarios() {
    let diff = difference(&SampleSeries::new(vec![(0.0, 10.0), (1.0, 12.0), (2.0, 9.0)]));
    assert_eq!(diff.points, vec![(1.0, 2.0), (2.0, -3.0)]);

    assert!(difference(&SampleSeries::new(vec![])).is_empty());
    assert!(difference(&SampleSeries::new(vec![(0.0, 5.0)])).is_empty());
}
