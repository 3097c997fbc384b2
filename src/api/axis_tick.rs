use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::LabelBox;

use super::label_formatter_context::{SecondaryLabel, TickLabel};

/// Value carried by an x-axis tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickValue {
    Time(NaiveDateTime),
    Category(String),
}

/// One tick of an axis. Ticks are never removed from their sequence; the
/// resolvers only flip `visible`, so indices keep identifying original ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick<V> {
    pub value: V,
    pub label: String,
    pub secondary_label: Option<SecondaryLabel>,
    /// First tick after a change of the next coarser date component.
    pub is_major: bool,
    /// Tick origin on the axis, in pixels.
    pub position_px: f64,
    pub bbox: Option<LabelBox>,
    pub visible: bool,
}

impl<V> Tick<V> {
    #[must_use]
    pub fn new(value: V, label: TickLabel, position_px: f64) -> Self {
        Self {
            value,
            label: label.text,
            secondary_label: label.secondary,
            is_major: false,
            position_px,
            bbox: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_bbox(mut self, bbox: Option<LabelBox>) -> Self {
        self.bbox = bbox;
        self
    }

    #[must_use]
    pub fn map_value<U>(self, f: impl FnOnce(V) -> U) -> Tick<U> {
        Tick {
            value: f(self.value),
            label: self.label,
            secondary_label: self.secondary_label,
            is_major: self.is_major,
            position_px: self.position_px,
            bbox: self.bbox,
            visible: self.visible,
        }
    }

    /// Label lines top to bottom, secondary line last.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.label.lines().collect();
        if let Some(secondary) = &self.secondary_label {
            lines.push(&secondary.text);
        }
        lines
    }
}

#[must_use]
pub fn visible_count<V>(ticks: &[Tick<V>]) -> usize {
    ticks.iter().filter(|tick| tick.visible).count()
}
