use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The axis cannot be rendered from this domain; callers fall back to an
    /// empty or single-tick axis.
    #[error("degenerate domain: {0}")]
    DegenerateDomain(String),

    #[error("no tick set aligns with domain endpoints [{min}, {max}]")]
    NoQualifyingTickSet { min: f64, max: f64 },

    #[error("unknown granularity: {0}")]
    UnknownGranularity(String),

    #[error("axis scale mismatch: spec declares {expected}, domain is {actual}")]
    ScaleMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
