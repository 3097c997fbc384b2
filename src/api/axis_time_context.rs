use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{Granularity, TimeDomain};
use crate::error::ChartResult;

const HOUR_SECONDS: f64 = 3_600.0;
const DAY_SECONDS: f64 = 24.0 * HOUR_SECONDS;
const WEEK_SECONDS: f64 = 7.0 * DAY_SECONDS;
const MONTH_SECONDS: f64 = 30.0 * DAY_SECONDS;
const YEAR_SECONDS: f64 = 365.0 * DAY_SECONDS;

/// Unit lengths checked by the classifier, coarsest first. Anything that
/// falls through classifies as minutes.
const UNIT_SECONDS: [(Granularity, f64); 5] = [
    (Granularity::Years, YEAR_SECONDS),
    (Granularity::Months, MONTH_SECONDS),
    (Granularity::Weeks, WEEK_SECONDS),
    (Granularity::Days, DAY_SECONDS),
    (Granularity::Hours, HOUR_SECONDS),
];

/// Thresholds for mapping an elapsed span to a [`Granularity`].
///
/// A span classifies as the coarsest unit it covers strictly more than
/// `tolerance` times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeContextPolicy {
    pub tolerance: f64,
}

impl Default for TimeContextPolicy {
    fn default() -> Self {
        Self { tolerance: 3.0 }
    }
}

impl TimeContextPolicy {
    pub fn classify(self, start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<Granularity> {
        let domain = TimeDomain::new(start, end)?;
        Ok(self.classify_domain(domain))
    }

    #[must_use]
    pub fn classify_domain(self, domain: TimeDomain) -> Granularity {
        let span = domain.span_seconds();
        let tolerance = self.tolerance;
        debug_assert!(
            tolerance.is_finite() && tolerance >= 0.0,
            "time context tolerance must be finite and >= 0"
        );
        if !tolerance.is_finite() || tolerance < 0.0 {
            warn!(tolerance, "invalid time context tolerance, falling back to minutes");
            return Granularity::Minutes;
        }

        let granularity = UNIT_SECONDS
            .iter()
            .find(|(_, unit)| span / unit > tolerance)
            .map_or(Granularity::Minutes, |(granularity, _)| *granularity);
        trace!(span_seconds = span, %granularity, "classified time context");
        granularity
    }
}

/// Classifies `[start, end]` with the default policy.
pub fn classify_time_context(start: NaiveDateTime, end: NaiveDateTime) -> ChartResult<Granularity> {
    TimeContextPolicy::default().classify(start, end)
}
