use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use tracing::warn;

use crate::core::granularity::Granularity;

/// Upper bound on ticks produced by one `range` call.
pub const MAX_GENERATED_TICKS: usize = 10_000;

/// Calendar-aware tick generator: every `step`-th boundary of `granularity`
/// in `[start, end)`.
pub trait TimeIntervalSource {
    fn range(
        &self,
        granularity: Granularity,
        start: NaiveDateTime,
        end: NaiveDateTime,
        step: u32,
    ) -> Vec<NaiveDateTime>;
}

impl<F> TimeIntervalSource for F
where
    F: Fn(Granularity, NaiveDateTime, NaiveDateTime, u32) -> Vec<NaiveDateTime>,
{
    fn range(
        &self,
        granularity: Granularity,
        start: NaiveDateTime,
        end: NaiveDateTime,
        step: u32,
    ) -> Vec<NaiveDateTime> {
        self(granularity, start, end, step)
    }
}

/// Wall-clock interval arithmetic on naive timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarIntervals {
    pub week_start: Weekday,
}

impl Default for CalendarIntervals {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl CalendarIntervals {
    #[must_use]
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    #[must_use]
    pub fn floor(&self, granularity: Granularity, date: NaiveDateTime) -> Option<NaiveDateTime> {
        let day = date.date();
        match granularity {
            Granularity::Years => {
                Some(NaiveDate::from_ymd_opt(day.year(), 1, 1)?.and_time(NaiveTime::MIN))
            }
            Granularity::Months => {
                Some(NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?.and_time(NaiveTime::MIN))
            }
            Granularity::Weeks => {
                let from_start = (day.weekday().num_days_from_sunday() + 7
                    - self.week_start.num_days_from_sunday())
                    % 7;
                let week_day = day.checked_sub_signed(Duration::days(i64::from(from_start)))?;
                Some(week_day.and_time(NaiveTime::MIN))
            }
            Granularity::Days => Some(day.and_time(NaiveTime::MIN)),
            Granularity::Hours => day.and_hms_opt(date.hour(), 0, 0),
            Granularity::Minutes => day.and_hms_opt(date.hour(), date.minute(), 0),
        }
    }

    #[must_use]
    pub fn offset(
        &self,
        granularity: Granularity,
        date: NaiveDateTime,
        step: u32,
    ) -> Option<NaiveDateTime> {
        match granularity {
            Granularity::Years => {
                let year = date.year().checked_add(i32::try_from(step).ok()?)?;
                Some(NaiveDate::from_ymd_opt(year, 1, 1)?.and_time(NaiveTime::MIN))
            }
            Granularity::Months => date.checked_add_months(Months::new(step)),
            Granularity::Weeks => date.checked_add_signed(Duration::weeks(i64::from(step))),
            Granularity::Days => date.checked_add_signed(Duration::days(i64::from(step))),
            Granularity::Hours => date.checked_add_signed(Duration::hours(i64::from(step))),
            Granularity::Minutes => date.checked_add_signed(Duration::minutes(i64::from(step))),
        }
    }

    #[must_use]
    pub fn ceil(&self, granularity: Granularity, date: NaiveDateTime) -> Option<NaiveDateTime> {
        let floored = self.floor(granularity, date)?;
        if floored == date {
            Some(date)
        } else {
            self.offset(granularity, floored, 1)
        }
    }
}

impl TimeIntervalSource for CalendarIntervals {
    fn range(
        &self,
        granularity: Granularity,
        start: NaiveDateTime,
        end: NaiveDateTime,
        step: u32,
    ) -> Vec<NaiveDateTime> {
        let mut ticks = Vec::new();
        if step == 0 {
            return ticks;
        }
        let Some(mut cursor) = self.ceil(granularity, start) else {
            return ticks;
        };

        while cursor < end {
            if ticks.len() == MAX_GENERATED_TICKS {
                warn!(
                    %granularity,
                    step,
                    cap = MAX_GENERATED_TICKS,
                    "calendar interval generation capped"
                );
                break;
            }
            ticks.push(cursor);
            match self.offset(granularity, cursor, step) {
                Some(next) if next > cursor => cursor = next,
                _ => break,
            }
        }
        ticks
    }
}
