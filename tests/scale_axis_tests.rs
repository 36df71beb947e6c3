use approx::assert_abs_diff_eq;
use estate_charts::core::{LinearScale, axis_ticks, thin_labels};
use proptest::prelude::*;

#[test]
fn scale_maps_domain_bounds_onto_range_bounds() {
    let scale = LinearScale::from_values(&[10.0, 30.0, 20.0], 0.0, 200.0).expect("scale");
    assert_eq!(scale.domain(), (10.0, 30.0));
    assert_abs_diff_eq!(scale.map(10.0), 0.0);
    assert_abs_diff_eq!(scale.map(20.0), 100.0);
    assert_abs_diff_eq!(scale.map(30.0), 200.0);
}

#[test]
fn constant_series_maps_to_range_center() {
    let scale = LinearScale::from_values(&[7.0, 7.0, 7.0], 260.0, 0.0).expect("scale");
    assert_abs_diff_eq!(scale.span(), 1.0);
    assert_abs_diff_eq!(scale.map(7.0), 130.0);
}

#[test]
fn explicit_collapsed_domain_gets_unit_span() {
    let scale = LinearScale::new(3.0, 3.0, 0.0, 10.0).expect("scale");
    assert_eq!(scale.domain(), (3.0, 4.0));
    assert!(scale.map(3.0).is_finite());
}

#[test]
fn zero_anchored_scale_substitutes_unit_max() {
    let scale = LinearScale::from_zero(0.0, 0.0, 260.0).expect("scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert_abs_diff_eq!(scale.map(0.0), 0.0);
}

#[test]
fn scale_rejects_empty_and_non_finite_values() {
    let err = LinearScale::from_values(&[], 0.0, 1.0).expect_err("empty values");
    assert!(format!("{err}").contains("at least one value"));

    let err = LinearScale::from_values(&[1.0, f64::NAN], 0.0, 1.0).expect_err("nan value");
    assert!(format!("{err}").contains("finite"));
}

#[test]
fn invert_recovers_domain_value() {
    let scale = LinearScale::new(0.0, 500.0, 300.0, 20.0).expect("scale");
    let position = scale.map(125.0);
    assert_abs_diff_eq!(scale.invert(position), 125.0, epsilon = 1e-9);
}

#[test]
fn default_ticks_are_quarter_fractions_of_domain() {
    let scale = LinearScale::new(0.0, 20.0, 270.0, 10.0).expect("scale");
    let ticks = axis_ticks(scale, 5);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    let positions: Vec<f64> = ticks.iter().map(|tick| tick.position).collect();
    assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    assert_eq!(positions, vec![270.0, 205.0, 140.0, 75.0, 10.0]);
}

#[test]
fn tick_count_below_two_still_covers_both_bounds() {
    let scale = LinearScale::new(-5.0, 5.0, 0.0, 100.0).expect("scale");
    let ticks = axis_ticks(scale, 0);
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].value, -5.0);
    assert_eq!(ticks[1].value, 5.0);
}

#[test]
fn thinning_empty_and_single_series() {
    assert!(thin_labels::<u8>(&[], 6).is_empty());
    assert_eq!(thin_labels(&["only"], 6).into_iter().collect::<Vec<_>>(), vec![0]);
}

proptest! {
    #[test]
    fn scale_is_monotonic_for_increasing_and_inverted_ranges(
        a in -1_000_000.0f64..1_000_000.0,
        delta in 0.001f64..1_000_000.0,
        extra in -1_000_000.0f64..1_000_000.0,
        extent in 1.0f64..2_000.0
    ) {
        let b = a + delta;
        let values = [a, b, extra];

        let increasing = LinearScale::from_values(&values, 0.0, extent).expect("scale");
        prop_assert!(increasing.map(a) <= increasing.map(b));

        let inverted = LinearScale::from_values(&values, extent, 0.0).expect("scale");
        prop_assert!(inverted.map(a) >= inverted.map(b));
    }

    #[test]
    fn thinning_always_keeps_first_and_last_index(
        len in 2usize..300,
        max_visible in 1usize..60
    ) {
        let series = vec![0u8; len];
        let visible = thin_labels(&series, max_visible);
        prop_assert!(visible.contains(&0));
        prop_assert!(visible.contains(&(len - 1)));

        let indices: Vec<usize> = visible.iter().copied().collect();
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
