use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::Granularity;

use super::axis_config::{AxisSpec, DEFAULT_MONTH_ABBREVIATIONS};

/// Extra label line carrying a coarser date component (year, or month and day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryLabel {
    pub text: String,
    /// Vertical offset from the tick origin, in text-size units.
    pub dy_em: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub text: String,
    pub secondary: Option<SecondaryLabel>,
}

impl TickLabel {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            secondary: None,
        }
    }
}

/// Settings consumed by the temporal formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLabelConfig {
    pub month_abbreviations: [String; 12],
    pub dy_em: f64,
    pub line_height_em: f64,
}

impl Default for TimeLabelConfig {
    fn default() -> Self {
        Self {
            month_abbreviations: DEFAULT_MONTH_ABBREVIATIONS.map(str::to_owned),
            dy_em: 0.7,
            line_height_em: 1.6,
        }
    }
}

impl From<&AxisSpec> for TimeLabelConfig {
    fn from(spec: &AxisSpec) -> Self {
        Self {
            month_abbreviations: spec.month_abbreviations.clone(),
            dy_em: spec.dy,
            line_height_em: spec.line_height_em,
        }
    }
}

impl TimeLabelConfig {
    fn month_name(&self, value: NaiveDateTime) -> &str {
        &self.month_abbreviations[value.month0() as usize]
    }

    fn secondary(&self, text: String) -> SecondaryLabel {
        SecondaryLabel {
            text,
            dy_em: self.line_height_em + self.dy_em,
        }
    }
}

/// Components of the previously formatted tick. Everything starts unset, so
/// the first tick of a pass always registers as a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatContext {
    previous_year: Option<i32>,
    previous_month: Option<u32>,
    previous_date: Option<NaiveDate>,
    previous_hour: Option<u32>,
    previous_minute: Option<u32>,
}

impl FormatContext {
    /// Formats `value` against this context, returning the successor context.
    #[must_use]
    pub fn advance(
        self,
        value: NaiveDateTime,
        granularity: Granularity,
        config: &TimeLabelConfig,
    ) -> (Self, TickLabel) {
        let year = value.year();
        let month = value.month0();
        let date = value.date();

        let label = match granularity {
            Granularity::Years => TickLabel::plain(year.to_string()),
            Granularity::Months => TickLabel {
                text: config.month_name(value).to_owned(),
                secondary: (self.previous_year != Some(year))
                    .then(|| config.secondary(year.to_string())),
            },
            Granularity::Weeks | Granularity::Days => {
                let text = if self.previous_month != Some(month) {
                    format!("{} {}", config.month_name(value), value.day())
                } else {
                    value.day().to_string()
                };
                TickLabel {
                    text,
                    secondary: (self.previous_year != Some(year))
                        .then(|| config.secondary(year.to_string())),
                }
            }
            Granularity::Hours => TickLabel {
                text: twelve_hour_label(value.hour(), value.minute()),
                secondary: (self.previous_date != Some(date)).then(|| {
                    config.secondary(format!("{} {}", config.month_name(value), value.day()))
                }),
            },
            Granularity::Minutes => TickLabel::plain(value.to_string()),
        };
        (Self::after(value), label)
    }

    /// Context as it stands right after `value` was seen.
    #[must_use]
    pub fn after(value: NaiveDateTime) -> Self {
        Self {
            previous_year: Some(value.year()),
            previous_month: Some(value.month0()),
            previous_date: Some(value.date()),
            previous_hour: Some(value.hour()),
            previous_minute: Some(value.minute()),
        }
    }

    /// Whether `value` repeats every component `granularity` displays, making
    /// its tick redundant next to the previous one.
    #[must_use]
    pub fn repeats(&self, value: NaiveDateTime, granularity: Granularity) -> bool {
        let same_year = self.previous_year == Some(value.year());
        let same_month = same_year && self.previous_month == Some(value.month0());
        let same_date = self.previous_date == Some(value.date());
        match granularity {
            Granularity::Years => same_year,
            Granularity::Months => same_month,
            Granularity::Weeks | Granularity::Days => same_date,
            Granularity::Hours | Granularity::Minutes => {
                same_date
                    && self.previous_hour == Some(value.hour())
                    && self.previous_minute == Some(value.minute())
            }
        }
    }
}

/// `"3 p.m."`, `"12:05 a.m."`.
#[must_use]
pub fn twelve_hour_label(hour: u32, minute: u32) -> String {
    let suffix = if hour >= 12 { "p.m." } else { "a.m." };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    if minute == 0 {
        format!("{display_hour} {suffix}")
    } else {
        format!("{display_hour}:{minute:02} {suffix}")
    }
}

/// Formats a tick sequence left to right from a fresh [`FormatContext`].
#[must_use]
pub fn format_time_ticks(
    values: &[NaiveDateTime],
    granularity: Granularity,
    config: &TimeLabelConfig,
) -> Vec<TickLabel> {
    values
        .iter()
        .scan(FormatContext::default(), |context, value| {
            let (next, label) = context.advance(*value, granularity, config);
            *context = next;
            Some(label)
        })
        .collect()
}
