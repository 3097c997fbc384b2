use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Calendar unit used both to step ticks and to pick label formatting.
///
/// Variants are declared coarsest first, so `Years < Months < ... < Minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
}

impl Granularity {
    pub const ALL: [Self; 6] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        }
    }

    /// Next coarser unit, `None` for years.
    #[must_use]
    pub fn coarser(self) -> Option<Self> {
        match self {
            Self::Years => None,
            Self::Months => Some(Self::Years),
            Self::Weeks => Some(Self::Months),
            Self::Days => Some(Self::Months),
            Self::Hours => Some(Self::Days),
            Self::Minutes => Some(Self::Hours),
        }
    }

    /// chrono pattern for a single-component tick label at this granularity.
    #[must_use]
    pub fn tick_format(self) -> &'static str {
        match self {
            Self::Years => "%Y",
            Self::Months => "%b",
            Self::Weeks => "%W",
            Self::Days => "%j",
            Self::Hours => "%H",
            Self::Minutes => "%M",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|granularity| granularity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownGranularity(s.to_owned()))
    }
}
