pub mod granularity;
pub mod scale;
pub mod time_interval;
pub mod time_scale;
pub mod types;

pub use granularity::Granularity;
pub use scale::{LinearScale, TickScale, nice_ticks};
pub use time_interval::{CalendarIntervals, MAX_GENERATED_TICKS, TimeIntervalSource};
pub use time_scale::{BandScale, TimeScale};
pub use types::{Domain, LabelBox, NumericDomain, TimeDomain};
