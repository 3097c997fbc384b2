use tracing::{debug, trace};

use super::axis_tick::Tick;

/// Hides ticks whose label boxes overlap, scanning left to right over the
/// whole sequence. Returns the number of ticks hidden.
pub fn resolve_collisions<V>(ticks: &mut [Tick<V>], tolerance: f64) -> usize {
    let Some(last) = ticks.len().checked_sub(1) else {
        return 0;
    };
    resolve_span(ticks, tolerance, 0, last, None)
}

/// Like [`resolve_collisions`] restricted to indices `from..=to`, with the tick
/// at `to` acting as the boundary anchor: when the anchor collides with the
/// current tick, the current tick is hidden instead of the anchor.
pub fn resolve_collisions_in_range<V>(
    ticks: &mut [Tick<V>],
    tolerance: f64,
    from: usize,
    to: usize,
) -> usize {
    if ticks.is_empty() || from >= to {
        return 0;
    }
    let to = to.min(ticks.len() - 1);
    resolve_span(ticks, tolerance, from, to, Some(to))
}

/// Range resolution without a protected tick: the later tick of an
/// overlapping pair is always the one hidden.
pub(crate) fn resolve_unanchored_range<V>(
    ticks: &mut [Tick<V>],
    tolerance: f64,
    from: usize,
    to: usize,
) -> usize {
    if ticks.is_empty() || from >= to {
        return 0;
    }
    let to = to.min(ticks.len() - 1);
    resolve_span(ticks, tolerance, from, to, None)
}

fn resolve_span<V>(
    ticks: &mut [Tick<V>],
    tolerance: f64,
    from: usize,
    to: usize,
    anchor: Option<usize>,
) -> usize {
    let mut hidden = 0;
    let mut current: Option<usize> = None;

    for index in from..=to {
        if !ticks[index].visible {
            continue;
        }
        let Some(next_box) = ticks[index].bbox else {
            trace!(index, "tick label has no measurable box, skipping");
            continue;
        };
        let Some(current_index) = current else {
            current = Some(index);
            continue;
        };
        // `current` only ever holds measured ticks.
        let Some(current_box) = ticks[current_index].bbox else {
            current = Some(index);
            continue;
        };

        if !current_box.overlaps(next_box, tolerance) {
            current = Some(index);
        } else if anchor == Some(index) {
            ticks[current_index].visible = false;
            hidden += 1;
            current = Some(index);
        } else {
            ticks[index].visible = false;
            hidden += 1;
        }
    }

    if hidden > 0 {
        debug!(from, to, hidden, tolerance, "resolved tick label collisions");
    }
    hidden
}

/// Hides the last visible tick when the rendered extent of the axis, shifted
/// by the first tick's offset, reaches `tick_width`. Returns whether a tick
/// was hidden.
pub fn hide_overset_tick<V>(ticks: &mut [Tick<V>], tick_width: f64) -> bool {
    let mut visible = ticks.iter().filter(|tick| tick.visible);
    let Some(first) = visible.next() else {
        return false;
    };
    let first_offset = first.position_px;

    let (mut left, mut right) = (first_offset, first_offset);
    for tick in ticks.iter().filter(|tick| tick.visible) {
        left = left.min(tick.position_px);
        right = right.max(tick.position_px);
        if let Some(bbox) = tick.bbox {
            left = left.min(bbox.left);
            right = right.max(bbox.right);
        }
    }

    if (right - left) + first_offset < tick_width {
        return false;
    }
    let Some(last) = ticks.iter_mut().rev().find(|tick| tick.visible) else {
        return false;
    };
    last.visible = false;
    debug!(right, tick_width, "hid overset last tick");
    true
}
