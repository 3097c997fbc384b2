use chart_axis::api::{
    STEP_LOWER_BOUND, STEP_UPPER_BOUND, Tick, TickBounds, TickLabel, TimeLabelConfig,
    find_endpoint_aligned_ticks, format_time_ticks, resolve_collisions, select_step,
};
use chart_axis::core::{
    CalendarIntervals, Granularity, LabelBox, LinearScale, TimeDomain, TimeIntervalSource,
    nice_ticks,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid timestamp")
}

proptest! {
    #[test]
    fn selected_step_is_closest_to_goal(
        start_minutes in 0i64..600,
        span_hours in 4i64..200,
        tick_goal in 2usize..12
    ) {
        let start = base() + Duration::minutes(start_minutes);
        let domain = TimeDomain::new(start, start + Duration::hours(span_hours)).expect("domain");
        let intervals = CalendarIntervals::default();
        let selected = select_step(&intervals, domain, Granularity::Hours, tick_goal)
            .expect("hour boundaries exist");

        let distance = |step: u32| {
            intervals
                .range(Granularity::Hours, domain.min(), domain.max(), step)
                .len()
                .abs_diff(tick_goal)
        };
        let best = distance(selected.step);
        for step in STEP_LOWER_BOUND..=STEP_UPPER_BOUND {
            if step < selected.step {
                prop_assert!(distance(step) > best);
            } else {
                prop_assert!(distance(step) >= best);
            }
        }
        prop_assert!(selected.ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn resolved_labels_never_overlap(
        widths in prop::collection::vec(1.0f64..60.0, 1..40),
        gap in 1.0f64..40.0,
        tolerance in 0.0f64..8.0
    ) {
        let mut ticks: Vec<Tick<usize>> = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let left = index as f64 * gap;
                Tick::new(index, TickLabel::plain("t"), left)
                    .with_bbox(Some(LabelBox::new(left, left + width)))
            })
            .collect();

        resolve_collisions(&mut ticks, tolerance);
        prop_assert!(ticks[0].visible);

        let kept: Vec<LabelBox> = ticks
            .iter()
            .filter(|tick| tick.visible)
            .filter_map(|tick| tick.bbox)
            .collect();
        for pair in kept.windows(2) {
            prop_assert!(!pair[0].overlaps(pair[1], tolerance));
        }
        prop_assert_eq!(resolve_collisions(&mut ticks, tolerance), 0);
    }

    #[test]
    fn nice_ticks_stay_inside_the_domain(
        start in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        count in 1usize..20
    ) {
        let stop = start + span;
        let ticks = nice_ticks(start, stop, count);
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(ticks.iter().all(|tick| *tick >= start && *tick <= stop));
    }

    #[test]
    fn aligned_ticks_end_on_the_domain_max(
        min in -500i32..500,
        span in 1i32..500
    ) {
        let (min, max) = (f64::from(min), f64::from(min + span));
        let scale = LinearScale::new(min, max).expect("valid scale");
        if let Ok(ticks) = find_endpoint_aligned_ticks(&scale, TickBounds::default(), 5) {
            prop_assert_eq!(ticks.last().copied(), Some(max));
            if min < 0.0 {
                prop_assert_eq!(ticks.first().copied(), Some(min));
            }
        }
    }

    #[test]
    fn first_month_label_always_carries_the_year(
        month_offset in 0u32..120,
        count in 1usize..24
    ) {
        let start = base()
            .checked_add_months(chrono::Months::new(month_offset))
            .expect("in range");
        let values: Vec<NaiveDateTime> = (0..count)
            .map(|i| start.checked_add_months(chrono::Months::new(i as u32)).expect("in range"))
            .collect();
        let labels = format_time_ticks(&values, Granularity::Months, &TimeLabelConfig::default());

        prop_assert!(labels[0].secondary.is_some());
        let year_lines = labels.iter().filter(|label| label.secondary.is_some()).count();
        let distinct_years = {
            let mut years: Vec<i32> = values.iter().map(chrono::Datelike::year).collect();
            years.dedup();
            years.len()
        };
        prop_assert_eq!(year_lines, distinct_years);
    }
}
