use approx::assert_relative_eq;
use chart_axis::ChartError;
use chart_axis::api::{
    NumericFormat, TickBounds, TickCount, find_endpoint_aligned_ticks, format_numeric_ticks,
    select_tick_count,
};
use chart_axis::core::{LinearScale, TickScale};

#[test]
fn negative_domain_aligns_both_endpoints() {
    let scale = LinearScale::new(-50.0, 100.0).expect("valid scale");
    let ticks = find_endpoint_aligned_ticks(&scale, TickBounds::new(4, 8), 6)
        .expect("an aligned set exists");
    assert_eq!(ticks, vec![-50.0, 0.0, 50.0, 100.0]);

    let labels = format_numeric_ticks(&ticks, NumericFormat::Si, "", "");
    assert_eq!(labels, vec!["-50", "0", "50", "100"]);
}

#[test]
fn positive_domain_only_needs_the_last_tick_aligned() {
    let scale = LinearScale::new(0.0, 100.0).expect("valid scale");
    let ticks = find_endpoint_aligned_ticks(&scale, TickBounds::default(), 5)
        .expect("an aligned set exists");
    assert_eq!(ticks.last(), Some(&100.0));
    assert_eq!(ticks.first(), Some(&0.0));
}

#[test]
fn unaligned_domain_reports_no_qualifying_set() {
    let scale = LinearScale::new(0.3, 9.7).expect("valid scale");
    let err = find_endpoint_aligned_ticks(&scale, TickBounds::default(), 5)
        .expect_err("9.7 is never a nice tick");
    assert!(matches!(err, ChartError::NoQualifyingTickSet { .. }));
}

#[test]
fn auto_count_falls_back_to_default_scale_ticks() {
    let scale = LinearScale::new(0.3, 9.7).expect("valid scale");
    let ticks = select_tick_count(&scale, TickCount::Auto, TickBounds::default(), 5);
    assert_eq!(ticks, scale.ticks(10));
    assert_eq!(ticks.len(), 9);
    assert_relative_eq!(ticks[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(ticks[8], 9.0, epsilon = 1e-12);
}

#[test]
fn fixed_count_bypasses_the_search() {
    let scale = LinearScale::new(-50.0, 100.0).expect("valid scale");
    let ticks = select_tick_count(&scale, TickCount::Fixed(10), TickBounds::new(4, 8), 6);
    assert_eq!(ticks, scale.ticks(10));
    assert_ne!(ticks, vec![-50.0, 0.0, 50.0, 100.0]);
}

#[test]
fn custom_scales_plug_into_the_search() {
    struct Quarters;

    impl TickScale for Quarters {
        fn domain(&self) -> (f64, f64) {
            (0.0, 1.0)
        }

        fn ticks(&self, count: usize) -> Vec<f64> {
            (0..=count).map(|i| i as f64 / count as f64).collect()
        }
    }

    let ticks = find_endpoint_aligned_ticks(&Quarters, TickBounds::new(3, 8), 5)
        .expect("every set ends at 1");
    assert_eq!(ticks.len(), 5);
}
