use chrono::NaiveDateTime;

use crate::core::types::TimeDomain;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a temporal domain onto a horizontal pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: TimeDomain,
    range_start: f64,
    range_end: f64,
}

impl TimeScale {
    pub fn new(domain: TimeDomain, range: (f64, f64)) -> ChartResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale pixel range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            domain,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> TimeDomain {
        self.domain
    }

    #[must_use]
    pub fn time_to_pixel(self, value: NaiveDateTime) -> f64 {
        let span_ms = (self.domain.max() - self.domain.min()).num_milliseconds() as f64;
        let offset_ms = (value - self.domain.min()).num_milliseconds() as f64;
        self.range_start + (offset_ms / span_ms) * (self.range_end - self.range_start)
    }
}

/// Ordinal placement on evenly sized bands with inner and outer padding,
/// rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    band_width: f64,
}

impl BandScale {
    pub fn new(
        count: usize,
        range: (f64, f64),
        padding: f64,
        outer_padding: f64,
    ) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::DegenerateDomain(
                "band scale needs at least one category".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&padding) || !(0.0..1.0).contains(&outer_padding) {
            return Err(ChartError::InvalidData(
                "band paddings must be within [0, 1)".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.1 <= range.0 {
            return Err(ChartError::InvalidData(
                "band range must be finite and increasing".to_owned(),
            ));
        }

        let n = count as f64;
        let extent = range.1 - range.0;
        let step = (extent / (n - padding + 2.0 * outer_padding)).floor();
        let error = extent - (n - padding) * step;
        Ok(Self {
            count,
            start: range.0 + (error / 2.0).round(),
            step,
            band_width: (step * (1.0 - padding)).round(),
        })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn band_width(self) -> f64 {
        self.band_width
    }

    /// Left edge of the band at `index`.
    #[must_use]
    pub fn band_start(self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    #[must_use]
    pub fn band_center(self, index: usize) -> f64 {
        self.band_start(index) + self.band_width / 2.0
    }
}
