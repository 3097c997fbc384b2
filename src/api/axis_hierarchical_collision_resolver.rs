use chrono::{Datelike, NaiveDateTime, Timelike};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::Granularity;

use super::axis_collision_resolver::{
    resolve_collisions, resolve_collisions_in_range, resolve_unanchored_range,
};
use super::axis_tick::Tick;
use super::label_formatter_context::FormatContext;

/// Hides every visible tick whose displayed date components repeat those of
/// the previous visible tick. Returns the number of ticks hidden.
pub fn drop_redundant_ticks(ticks: &mut [Tick<NaiveDateTime>], granularity: Granularity) -> usize {
    let mut context: Option<FormatContext> = None;
    let mut hidden = 0;
    for tick in ticks.iter_mut().filter(|tick| tick.visible) {
        if context.is_some_and(|context| context.repeats(tick.value, granularity)) {
            tick.visible = false;
            hidden += 1;
        }
        context = Some(FormatContext::after(tick.value));
    }
    if hidden > 0 {
        debug!(%granularity, hidden, "dropped redundant ticks");
    }
    hidden
}

/// Component that must change for a tick to count as major.
fn major_key(value: NaiveDateTime, granularity: Granularity) -> (i32, u32, u32, u32) {
    match granularity {
        Granularity::Years | Granularity::Months => (value.year(), 0, 0, 0),
        Granularity::Weeks | Granularity::Days => (value.year(), value.month(), 0, 0),
        Granularity::Hours => (value.year(), value.month(), value.day(), 0),
        Granularity::Minutes => (value.year(), value.month(), value.day(), value.hour()),
    }
}

/// Flags visible ticks that open a new coarser period and returns their
/// indices. The first visible tick is always major; at year granularity every
/// visible tick is.
pub fn mark_major_ticks(
    ticks: &mut [Tick<NaiveDateTime>],
    granularity: Granularity,
) -> SmallVec<[usize; 8]> {
    let mut majors = SmallVec::new();
    let mut previous = None;
    for (index, tick) in ticks.iter_mut().enumerate() {
        if !tick.visible {
            tick.is_major = false;
            continue;
        }
        let key = major_key(tick.value, granularity);
        tick.is_major = granularity == Granularity::Years || previous != Some(key);
        if tick.is_major {
            majors.push(index);
        }
        previous = Some(key);
    }
    majors
}

/// Drops redundant ticks, then resolves label collisions independently inside
/// each run of ticks bounded by consecutive major ticks, with the closing
/// major tick of each run protected as the boundary anchor. The trailing run
/// only has an anchor when the last visible tick is itself major.
pub fn resolve_hierarchical_collisions(
    ticks: &mut [Tick<NaiveDateTime>],
    granularity: Granularity,
    tolerance: f64,
) -> usize {
    let mut hidden = drop_redundant_ticks(ticks, granularity);
    let majors = mark_major_ticks(ticks, granularity);

    if granularity == Granularity::Years || majors.len() < 2 {
        return hidden + resolve_collisions(ticks, tolerance);
    }

    let visible: Vec<usize> = (0..ticks.len()).filter(|&i| ticks[i].visible).collect();
    let (Some(&first), Some(&last)) = (visible.first(), visible.last()) else {
        return hidden;
    };

    let mut bounds: SmallVec<[usize; 10]> = SmallVec::with_capacity(majors.len() + 2);
    bounds.push(first);
    bounds.extend(majors.iter().copied());
    bounds.push(last);

    for window in bounds.windows(2) {
        let (from, to) = (window[0], window[1]);
        if to <= from {
            continue;
        }
        hidden += if ticks[to].is_major {
            resolve_collisions_in_range(ticks, tolerance, from, to)
        } else {
            resolve_unanchored_range(ticks, tolerance, from, to)
        };
    }
    hidden
}
