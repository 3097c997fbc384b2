use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::core::{Granularity, TickScale, TimeDomain, TimeIntervalSource};
use crate::error::{ChartError, ChartResult};

use super::axis_config::{TickBounds, TickCount};

pub const STEP_LOWER_BOUND: u32 = 1;
/// Beyond this many units per tick a coarser granularity should have been chosen.
pub const STEP_UPPER_BOUND: u32 = 12;
/// Tick count requested from the scale when no endpoint-aligned set exists.
pub const DEFAULT_SCALE_TICK_COUNT: usize = 10;

/// Winning interval step and the ticks it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStep {
    pub step: u32,
    pub ticks: Vec<NaiveDateTime>,
}

/// Index of the first count with the smallest distance to `goal`; later
/// candidates only win when strictly closer.
fn closest_to_goal<I>(counts: I, goal: usize) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut best: Option<(usize, usize)> = None;
    for (index, count) in counts.into_iter().enumerate() {
        let distance = count.abs_diff(goal);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Picks the step in `[1, 12]` whose tick count is closest to `tick_goal`.
///
/// When the first tick lands more than half a step after the domain start,
/// the start itself is prepended so the axis origin stays labelled.
pub fn select_step<S>(
    source: &S,
    domain: TimeDomain,
    granularity: Granularity,
    tick_goal: usize,
) -> ChartResult<CandidateStep>
where
    S: TimeIntervalSource + ?Sized,
{
    let candidates: Vec<CandidateStep> = (STEP_LOWER_BOUND..=STEP_UPPER_BOUND)
        .map(|step| CandidateStep {
            step,
            ticks: source.range(granularity, domain.min(), domain.max(), step),
        })
        .collect();

    if candidates.iter().all(|candidate| candidate.ticks.is_empty()) {
        return Err(ChartError::DegenerateDomain(format!(
            "no {granularity} boundaries between {} and {}",
            domain.min(),
            domain.max()
        )));
    }

    let winner = closest_to_goal(candidates.iter().map(|c| c.ticks.len()), tick_goal)
        .unwrap_or_default();
    let Some(mut selected) = candidates.into_iter().nth(winner) else {
        return Err(ChartError::DegenerateDomain(
            "tick candidate search produced no winner".to_owned(),
        ));
    };

    if let [first, second, ..] = selected.ticks[..] {
        let start_gap = first - domain.min();
        let tick_gap = second - first;
        if start_gap * 2 > tick_gap {
            trace!(start = %domain.min(), "anchoring domain start as first tick");
            selected.ticks.insert(0, domain.min());
        }
    }

    debug!(
        %granularity,
        step = selected.step,
        ticks = selected.ticks.len(),
        tick_goal,
        "selected time tick step"
    );
    Ok(selected)
}

/// Searches `scale.ticks(n)` for `n` in `bounds` and keeps only sets whose last
/// tick is the domain max (and, for negative domains, whose first tick is the
/// domain min), returning the one closest to `tick_goal` in length.
pub fn find_endpoint_aligned_ticks<S>(
    scale: &S,
    bounds: TickBounds,
    tick_goal: usize,
) -> ChartResult<Vec<f64>>
where
    S: TickScale + ?Sized,
{
    let (min, max) = scale.domain();
    let mut aligned: Vec<Vec<f64>> = Vec::new();

    for count in bounds.lower..=bounds.upper {
        let candidate = scale.ticks(count);
        let (Some(first), Some(last)) = (candidate.first(), candidate.last()) else {
            continue;
        };
        let last_matches = *last == max;
        let first_matches = min >= 0.0 || *first == min;
        if last_matches && first_matches {
            aligned.push(candidate);
        }
    }

    let winner = closest_to_goal(aligned.iter().map(Vec::len), tick_goal)
        .ok_or(ChartError::NoQualifyingTickSet { min, max })?;
    Ok(aligned.swap_remove(winner))
}

/// Value-axis ticks: explicit counts go straight to the scale, `Auto` runs the
/// endpoint-aligned search and falls back to the scale's default set.
pub fn select_tick_count<S>(
    scale: &S,
    tick_count: TickCount,
    bounds: TickBounds,
    tick_goal: usize,
) -> Vec<f64>
where
    S: TickScale + ?Sized,
{
    match tick_count {
        TickCount::Fixed(count) => scale.ticks(count),
        TickCount::Auto => match find_endpoint_aligned_ticks(scale, bounds, tick_goal) {
            Ok(ticks) => ticks,
            Err(err) => {
                debug!(%err, "falling back to unconstrained scale ticks");
                scale.ticks(DEFAULT_SCALE_TICK_COUNT)
            }
        },
    }
}
