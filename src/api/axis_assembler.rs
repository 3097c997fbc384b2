use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandScale, CalendarIntervals, Granularity, LabelBox, LinearScale, NumericDomain, TickScale,
    TimeDomain, TimeIntervalSource, TimeScale,
};
use crate::error::{ChartError, ChartResult};

use super::axis_collision_resolver::{hide_overset_tick, resolve_collisions};
use super::axis_config::{AxisSpec, ScaleKind};
use super::axis_hierarchical_collision_resolver::{
    mark_major_ticks, resolve_hierarchical_collisions,
};
use super::axis_label_format::format_numeric_ticks;
use super::axis_label_measure::{TextMeasurer, measure_lines, wrap_label};
use super::axis_tick::{Tick, TickValue};
use super::axis_ticks::{select_step, select_tick_count};
use super::axis_time_context::TimeContextPolicy;
use super::label_formatter_context::{TickLabel, TimeLabelConfig, format_time_ticks};

/// Collision tolerance for continuous time axes.
pub const CONTINUOUS_TIME_TOLERANCE_PX: f64 = 0.0;
/// Ordinal-time collision tolerance on wide tick areas.
pub const ORDINAL_TIME_WIDE_TOLERANCE_PX: f64 = 7.0;
/// Ordinal-time collision tolerance on narrow tick areas.
pub const ORDINAL_TIME_NARROW_TOLERANCE_PX: f64 = 4.0;

/// Domain of a horizontal axis; the variant must agree with `AxisSpec::scale`.
#[derive(Debug, Clone, PartialEq)]
pub enum XAxisDomain {
    Time(TimeDomain),
    Ordinal(Vec<String>),
    OrdinalTime(Vec<NaiveDateTime>),
}

impl XAxisDomain {
    #[must_use]
    pub fn scale_kind(&self) -> ScaleKind {
        match self {
            Self::Time(_) => ScaleKind::ContinuousTime,
            Self::Ordinal(_) => ScaleKind::Ordinal,
            Self::OrdinalTime(_) => ScaleKind::OrdinalTime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLayout {
    pub ticks: Vec<Tick<TickValue>>,
    /// Temporal context the labels were formatted in; `None` for ordinal axes.
    pub granularity: Option<Granularity>,
    /// Tallest visible tick in label lines, the axis height contribution.
    pub max_label_lines: usize,
}

impl XAxisLayout {
    fn new(ticks: Vec<Tick<TickValue>>, granularity: Option<Granularity>) -> Self {
        let max_label_lines = ticks
            .iter()
            .filter(|tick| tick.visible)
            .map(|tick| tick.lines().len())
            .max()
            .unwrap_or(0);
        Self {
            ticks,
            granularity,
            max_label_lines,
        }
    }

    pub fn visible_ticks(&self) -> impl Iterator<Item = &Tick<TickValue>> {
        self.ticks.iter().filter(|tick| tick.visible)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisTick {
    pub value: f64,
    pub label: String,
    /// Every tick except the zero tick is minor.
    pub is_minor: bool,
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisLayout {
    pub ticks: Vec<YAxisTick>,
    /// Widest measured label, the axis width contribution.
    pub label_width: f64,
    /// Index of the tick that anchors the zero line, when 0 lies within the ticks.
    pub zero_tick: Option<usize>,
}

/// Value axis first, then the x axis laid out in the width it leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub y: YAxisLayout,
    pub x: XAxisLayout,
    pub tick_width: f64,
}

/// Sequences tick selection, formatting, measurement and collision
/// resolution for each supported axis kind.
#[derive(Debug, Clone)]
pub struct AxisAssembler<M, I = CalendarIntervals> {
    measurer: M,
    intervals: I,
    context_policy: TimeContextPolicy,
}

impl<M: TextMeasurer> AxisAssembler<M> {
    #[must_use]
    pub fn new(measurer: M) -> Self {
        Self::with_intervals(measurer, CalendarIntervals::default())
    }
}

impl<M: TextMeasurer, I: TimeIntervalSource> AxisAssembler<M, I> {
    #[must_use]
    pub fn with_intervals(measurer: M, intervals: I) -> Self {
        Self {
            measurer,
            intervals,
            context_policy: TimeContextPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_context_policy(mut self, context_policy: TimeContextPolicy) -> Self {
        self.context_policy = context_policy;
        self
    }

    pub fn compute_x_axis_ticks(
        &self,
        domain: &XAxisDomain,
        spec: &AxisSpec,
        available_width: f64,
    ) -> ChartResult<XAxisLayout> {
        spec.validate()?;
        if spec.scale != domain.scale_kind() {
            return Err(ChartError::ScaleMismatch {
                expected: spec.scale.as_str(),
                actual: domain.scale_kind().as_str(),
            });
        }
        if !available_width.is_finite() || available_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "available axis width must be finite and > 0, got {available_width}"
            )));
        }

        match domain {
            XAxisDomain::Time(domain) => self.continuous_time_axis(*domain, spec, available_width),
            XAxisDomain::Ordinal(categories) => {
                self.ordinal_axis(categories, spec, available_width)
            }
            XAxisDomain::OrdinalTime(values) => {
                self.ordinal_time_axis(values, spec, available_width)
            }
        }
    }

    pub fn compute_y_axis_ticks(
        &self,
        domain: NumericDomain,
        spec: &AxisSpec,
    ) -> ChartResult<YAxisLayout> {
        let scale = LinearScale::from_domain(domain)?;
        self.compute_y_axis_ticks_with_scale(&scale, spec)
    }

    pub fn compute_y_axis_ticks_with_scale<S>(
        &self,
        scale: &S,
        spec: &AxisSpec,
    ) -> ChartResult<YAxisLayout>
    where
        S: TickScale + ?Sized,
    {
        spec.validate()?;
        if spec.scale != ScaleKind::Numeric {
            return Err(ChartError::ScaleMismatch {
                expected: spec.scale.as_str(),
                actual: ScaleKind::Numeric.as_str(),
            });
        }

        let values = select_tick_count(scale, spec.ticks, spec.tick_bounds, spec.tick_goal);
        let labels = format_numeric_ticks(&values, spec.format, &spec.prefix, &spec.suffix);
        let ticks: Vec<YAxisTick> = values
            .iter()
            .zip(labels)
            .map(|(value, label)| YAxisTick {
                value: *value,
                width: self.measurer.measure_text(&label),
                is_minor: *value != 0.0,
                label,
            })
            .collect();

        let label_width = ticks
            .iter()
            .filter_map(|tick| tick.width)
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |width| width.0);
        let zero_tick = match (values.first(), values.last()) {
            (Some(&first), Some(&last)) if first <= 0.0 && 0.0 <= last => {
                values.iter().position(|value| *value == 0.0)
            }
            _ => None,
        };

        debug!(ticks = ticks.len(), label_width, "computed value axis ticks");
        Ok(YAxisLayout {
            ticks,
            label_width,
            zero_tick,
        })
    }

    /// Lays out the value axis, derives the remaining tick width and lays the
    /// x axis out inside it.
    pub fn layout_axes(
        &self,
        x_domain: &XAxisDomain,
        x_spec: &AxisSpec,
        y_domain: NumericDomain,
        y_spec: &AxisSpec,
        computed_width: f64,
    ) -> ChartResult<AxisLayout> {
        let y = self.compute_y_axis_ticks(y_domain, y_spec)?;
        let tick_width = computed_width - y.label_width - y_spec.padding_right;
        if !tick_width.is_finite() || tick_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "no horizontal room left for the x axis (tick width {tick_width})"
            )));
        }
        let x = self.compute_x_axis_ticks(x_domain, x_spec, tick_width)?;
        Ok(AxisLayout { y, x, tick_width })
    }

    fn continuous_time_axis(
        &self,
        domain: TimeDomain,
        spec: &AxisSpec,
        width: f64,
    ) -> ChartResult<XAxisLayout> {
        let granularity = self.context_policy.classify_domain(domain);
        let tick_goal = spec.time_tick_goal(width);
        let candidate = select_step(&self.intervals, domain, granularity, tick_goal)?;
        let labels = format_time_ticks(&candidate.ticks, granularity, &TimeLabelConfig::from(spec));

        let scale = TimeScale::new(domain, (0.0, width))?;
        let mut ticks: Vec<Tick<NaiveDateTime>> = candidate
            .ticks
            .into_iter()
            .zip(labels)
            .map(|(value, label)| {
                self.start_anchored_tick(value, label, scale.time_to_pixel(value), spec)
            })
            .collect();

        mark_major_ticks(&mut ticks, granularity);
        resolve_collisions(&mut ticks, CONTINUOUS_TIME_TOLERANCE_PX);
        hide_overset_tick(&mut ticks, width);

        Ok(XAxisLayout::new(
            ticks.into_iter().map(|tick| tick.map_value(TickValue::Time)).collect(),
            Some(granularity),
        ))
    }

    fn ordinal_axis(
        &self,
        categories: &[String],
        spec: &AxisSpec,
        width: f64,
    ) -> ChartResult<XAxisLayout> {
        let bands = BandScale::new(
            categories.len(),
            (0.0, width),
            spec.bands.padding,
            spec.bands.outer_padding,
        )?;

        let ticks = categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let lines = wrap_label(&self.measurer, category, bands.band_width());
                let label = TickLabel::plain(lines.join("\n"));
                let center = bands.band_center(index);
                let tick = Tick::new(TickValue::Category(category.clone()), label, center);
                let bbox = measure_lines(&self.measurer, &tick.lines()).map(|line_width| {
                    LabelBox::new(center - line_width / 2.0, center + line_width / 2.0)
                });
                tick.with_bbox(bbox)
            })
            .collect();

        Ok(XAxisLayout::new(ticks, None))
    }

    fn ordinal_time_axis(
        &self,
        values: &[NaiveDateTime],
        spec: &AxisSpec,
        width: f64,
    ) -> ChartResult<XAxisLayout> {
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return Err(ChartError::DegenerateDomain(
                "ordinal-time axis needs at least one date".to_owned(),
            ));
        };
        if values.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ChartError::InvalidData(
                "ordinal-time values must be in ascending order".to_owned(),
            ));
        }
        let granularity = self.context_policy.classify(first, last)?;

        let bands = BandScale::new(
            values.len(),
            (0.0, width),
            spec.bands.padding,
            spec.bands.outer_padding,
        )?;
        let labels = format_time_ticks(values, granularity, &TimeLabelConfig::from(spec));
        let mut ticks: Vec<Tick<NaiveDateTime>> = values
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (value, label))| {
                self.start_anchored_tick(*value, label, bands.band_center(index), spec)
            })
            .collect();

        let tolerance = if width > spec.width_threshold {
            ORDINAL_TIME_WIDE_TOLERANCE_PX
        } else {
            ORDINAL_TIME_NARROW_TOLERANCE_PX
        };
        resolve_hierarchical_collisions(&mut ticks, granularity, tolerance);

        Ok(XAxisLayout::new(
            ticks.into_iter().map(|tick| tick.map_value(TickValue::Time)).collect(),
            Some(granularity),
        ))
    }

    /// Tick whose label starts `text_x` pixels after its origin; the box spans
    /// the tick line and the widest label line.
    fn start_anchored_tick(
        &self,
        value: NaiveDateTime,
        label: TickLabel,
        position_px: f64,
        spec: &AxisSpec,
    ) -> Tick<NaiveDateTime> {
        let tick = Tick::new(value, label, position_px);
        let bbox = measure_lines(&self.measurer, &tick.lines()).map(|line_width| {
            let text_left = position_px + spec.text_x;
            LabelBox::new(text_left.min(position_px), (text_left + line_width).max(position_px))
        });
        tick.with_bbox(bbox)
    }
}
