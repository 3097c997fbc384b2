use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    #[default]
    Bottom,
    Left,
    Right,
}

impl AxisOrient {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Kind of scale the axis is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleKind {
    #[default]
    ContinuousTime,
    Ordinal,
    OrdinalTime,
    Numeric,
}

impl ScaleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContinuousTime => "continuous-time",
            Self::Ordinal => "ordinal",
            Self::OrdinalTime => "ordinal-time",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested tick count: searched (`"auto"`) or explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickCount {
    #[default]
    Auto,
    Fixed(usize),
}

impl Serialize for TickCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(count) => serializer.serialize_u64(*count as u64),
        }
    }
}

impl<'de> Deserialize<'de> for TickCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(usize),
            Keyword(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(count) => Ok(Self::Fixed(count)),
            Repr::Keyword(keyword) if keyword.eq_ignore_ascii_case("auto") => Ok(Self::Auto),
            Repr::Keyword(keyword) => Err(de::Error::custom(format!(
                "tick count must be \"auto\" or an integer, got {keyword:?}"
            ))),
        }
    }
}

/// Inclusive range of tick counts tried by the endpoint-aligned search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickBounds {
    pub lower: usize,
    pub upper: usize,
}

impl TickBounds {
    #[must_use]
    pub fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }
}

impl Default for TickBounds {
    fn default() -> Self {
        Self { lower: 3, upper: 8 }
    }
}

/// Value-axis label format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum NumericFormat {
    General,
    Si,
    Comma,
    Round1,
    Round2,
    Round3,
    Round4,
    #[default]
    Default,
}

impl NumericFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Si => "si",
            Self::Comma => "comma",
            Self::Round1 => "round1",
            Self::Round2 => "round2",
            Self::Round3 => "round3",
            Self::Round4 => "round4",
            Self::Default => "default",
        }
    }

    /// Unknown names select [`NumericFormat::Default`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "general" => Self::General,
            "si" => Self::Si,
            "comma" => Self::Comma,
            "round1" => Self::Round1,
            "round2" => Self::Round2,
            "round3" => Self::Round3,
            "round4" => Self::Round4,
            _ => Self::Default,
        }
    }
}

impl From<String> for NumericFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<NumericFormat> for String {
    fn from(format: NumericFormat) -> Self {
        format.as_str().to_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPadding {
    pub padding: f64,
    pub outer_padding: f64,
}

impl Default for BandPadding {
    fn default() -> Self {
        Self {
            padding: 0.06,
            outer_padding: 0.03,
        }
    }
}

/// Per-axis configuration, immutable for the duration of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    pub orient: AxisOrient,
    pub scale: ScaleKind,
    pub ticks: TickCount,
    /// Tick goal for time axes when the tick area is wider than `width_threshold`.
    pub tick_target: usize,
    /// Tick goal for time axes on narrow tick areas.
    pub ticks_small: usize,
    /// Tick goal for the endpoint-aligned value-axis search.
    pub tick_goal: usize,
    pub tick_bounds: TickBounds,
    pub width_threshold: f64,
    pub format: NumericFormat,
    pub prefix: String,
    pub suffix: String,
    /// Vertical label offset in text-size units.
    pub dy: f64,
    pub text_x: f64,
    pub text_y: f64,
    /// Distance between a label and its secondary line, in text-size units.
    pub line_height_em: f64,
    pub padding_right: f64,
    pub bands: BandPadding,
    pub month_abbreviations: [String; 12],
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self::x_axis()
    }
}

impl AxisSpec {
    /// Bottom axis over a continuous time scale.
    #[must_use]
    pub fn x_axis() -> Self {
        Self {
            orient: AxisOrient::Bottom,
            scale: ScaleKind::ContinuousTime,
            ticks: TickCount::Auto,
            tick_target: 6,
            ticks_small: 4,
            tick_goal: 5,
            tick_bounds: TickBounds::default(),
            width_threshold: 420.0,
            format: NumericFormat::Default,
            prefix: String::new(),
            suffix: String::new(),
            dy: 0.7,
            text_x: 0.0,
            text_y: 0.0,
            line_height_em: 1.6,
            padding_right: 0.0,
            bands: BandPadding::default(),
            month_abbreviations: DEFAULT_MONTH_ABBREVIATIONS.map(str::to_owned),
        }
    }

    /// Left value axis over a numeric scale.
    #[must_use]
    pub fn y_axis() -> Self {
        Self {
            orient: AxisOrient::Left,
            scale: ScaleKind::Numeric,
            dy: 0.0,
            padding_right: 9.0,
            format: NumericFormat::Comma,
            ..Self::x_axis()
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickCount) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: NumericFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_tick_bounds(mut self, bounds: TickBounds, tick_goal: usize) -> Self {
        self.tick_bounds = bounds;
        self.tick_goal = tick_goal;
        self
    }

    /// Tick goal for a time axis laid out in `available_width` pixels.
    #[must_use]
    pub fn time_tick_goal(&self, available_width: f64) -> usize {
        if available_width > self.width_threshold {
            match self.ticks {
                TickCount::Auto => self.tick_target,
                TickCount::Fixed(count) => count,
            }
        } else {
            self.ticks_small
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tick_bounds.lower == 0 || self.tick_bounds.lower > self.tick_bounds.upper {
            return Err(ChartError::InvalidData(format!(
                "tick bounds must satisfy 1 <= lower <= upper, got [{}, {}]",
                self.tick_bounds.lower, self.tick_bounds.upper
            )));
        }
        if self.tick_target == 0 || self.ticks_small == 0 || self.tick_goal == 0 {
            return Err(ChartError::InvalidData(
                "tick goals must be greater than zero".to_owned(),
            ));
        }
        if matches!(self.ticks, TickCount::Fixed(0)) {
            return Err(ChartError::InvalidData(
                "explicit tick count must be greater than zero".to_owned(),
            ));
        }
        let offsets = [
            self.width_threshold,
            self.dy,
            self.text_x,
            self.text_y,
            self.line_height_em,
            self.padding_right,
        ];
        if offsets.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "axis offsets and thresholds must be finite".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&self.bands.padding)
            || !(0.0..1.0).contains(&self.bands.outer_padding)
        {
            return Err(ChartError::InvalidData(
                "band paddings must be within [0, 1)".to_owned(),
            ));
        }
        if self.scale == ScaleKind::Numeric && !self.orient.is_vertical() {
            return Err(ChartError::InvalidData(
                "numeric axes must be oriented left or right".to_owned(),
            ));
        }
        if self.scale != ScaleKind::Numeric && self.orient.is_vertical() {
            return Err(ChartError::InvalidData(format!(
                "{} axes must be oriented bottom",
                self.scale
            )));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let spec: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse axis spec json: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize axis spec: {e}")))
    }
}
