//! chart-axis: tick selection, label formatting and collision resolution for
//! chart axes.
//!
//! The crate computes which ticks an axis shows and what they read. Drawing
//! is left to the caller; text width comes in through [`TextMeasurer`].

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    AxisAssembler, AxisLayout, AxisSpec, HeuristicTextMeasurer, TextMeasurer, Tick, TickValue,
    XAxisDomain, XAxisLayout, YAxisLayout,
};
pub use core::{Granularity, NumericDomain, TimeDomain};
pub use error::{ChartError, ChartResult};
