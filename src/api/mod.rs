mod axis_assembler;
mod axis_collision_resolver;
mod axis_config;
mod axis_hierarchical_collision_resolver;
mod axis_label_format;
mod axis_label_measure;
mod axis_tick;
mod axis_ticks;
mod axis_time_context;
mod label_formatter_context;

pub use axis_assembler::{
    AxisAssembler, AxisLayout, CONTINUOUS_TIME_TOLERANCE_PX, ORDINAL_TIME_NARROW_TOLERANCE_PX,
    ORDINAL_TIME_WIDE_TOLERANCE_PX, XAxisDomain, XAxisLayout, YAxisLayout, YAxisTick,
};
pub use axis_collision_resolver::{
    hide_overset_tick, resolve_collisions, resolve_collisions_in_range,
};
pub use axis_config::{
    AxisOrient, AxisSpec, BandPadding, DEFAULT_MONTH_ABBREVIATIONS, NumericFormat, ScaleKind,
    TickBounds, TickCount,
};
pub use axis_hierarchical_collision_resolver::{
    drop_redundant_ticks, mark_major_ticks, resolve_hierarchical_collisions,
};
pub use axis_label_format::{SiPrefix, format_numeric_label, format_numeric_ticks};
pub use axis_label_measure::{HeuristicTextMeasurer, TextMeasurer, wrap_label};
pub use axis_tick::{Tick, TickValue, visible_count};
pub use axis_ticks::{
    CandidateStep, DEFAULT_SCALE_TICK_COUNT, STEP_LOWER_BOUND, STEP_UPPER_BOUND,
    find_endpoint_aligned_ticks, select_step, select_tick_count,
};
pub use axis_time_context::{TimeContextPolicy, classify_time_context};
pub use label_formatter_context::{
    FormatContext, SecondaryLabel, TickLabel, TimeLabelConfig, format_time_ticks,
    twelve_hour_label,
};
