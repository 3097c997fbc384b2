use crate::core::types::NumericDomain;
use crate::error::{ChartError, ChartResult};

/// Nice-number tick generation for numeric axes.
pub trait TickScale {
    fn domain(&self) -> (f64, f64);

    /// Returns roughly `count` round values inside the domain, ascending.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateDomain(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    pub fn from_domain(domain: NumericDomain) -> ChartResult<Self> {
        Self::new(domain.min(), domain.max())
    }
}

impl TickScale for LinearScale {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Rounds half-way cases towards positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Integer bounds and increment of the tick run. A negative increment means
/// ticks are `i / -inc`, which keeps sub-unit steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = round_half_up(start * inc);
        let mut i2 = round_half_up(stop * inc);
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = round_half_up(start / inc);
        let mut i2 = round_half_up(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    };

    if !i1.is_finite() || !i2.is_finite() || !inc.is_finite() {
        return None;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if i1.abs() > i64::MAX as f64 || i2.abs() > i64::MAX as f64 {
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}

/// Round-number ticks between `start` and `stop` (either order), roughly `count` of them.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (i1..=i2)
        .map(|i| {
            let i = i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::nice_ticks;

    #[test]
    fn nice_ticks_use_round_increments() {
        assert_eq!(
            nice_ticks(0.0, 10.0, 5),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
        );
        assert_eq!(nice_ticks(-50.0, 100.0, 4), vec![-50.0, 0.0, 50.0, 100.0]);
    }

    #[test]
    fn nice_ticks_keep_fractional_steps_exact() {
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn nice_ticks_handle_reversed_and_empty_inputs() {
        assert_eq!(nice_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
        assert!(nice_ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
    }
}
