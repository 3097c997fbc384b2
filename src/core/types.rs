use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered `(min, max)` pair bounding an axis.
///
/// Construction rejects `min >= max` (and incomparable values such as NaN),
/// so every `Domain` describes a non-degenerate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain<T> {
    min: T,
    max: T,
}

pub type TimeDomain = Domain<NaiveDateTime>;
pub type NumericDomain = Domain<f64>;

impl<T: PartialOrd + Copy + std::fmt::Debug> Domain<T> {
    pub fn new(min: T, max: T) -> ChartResult<Self> {
        if min.partial_cmp(&max) != Some(Ordering::Less) {
            return Err(ChartError::DegenerateDomain(format!(
                "domain min {min:?} must be strictly below max {max:?}"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl TimeDomain {
    /// Elapsed time between the endpoints, in seconds.
    #[must_use]
    pub fn span_seconds(&self) -> f64 {
        (self.max - self.min).num_milliseconds() as f64 / 1_000.0
    }
}

/// Horizontal extent of a rendered tick (label plus tick line) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub left: f64,
    pub right: f64,
}

impl LabelBox {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Whether `next` starts before this box ends once `tolerance` is added.
    #[must_use]
    pub fn overlaps(self, next: Self, tolerance: f64) -> bool {
        self.right + tolerance > next.left
    }
}
