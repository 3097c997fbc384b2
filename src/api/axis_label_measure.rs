//! Text measurement hooks for tick labels.
//!
//! Measurement belongs to the rendering layer, so the axis pipeline only asks
//! for the pixel width of already formatted text. `None` means the label has
//! no measurable rendered box; the collision resolver skips such ticks.

/// Returns the rendered pixel width of a label.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str) -> Option<f64>;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn measure_text(&self, text: &str) -> Option<f64> {
        self(text)
    }
}

/// Fixed average glyph width, good enough for tests and headless layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub font_size_px: f64,
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width_em: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            glyph_width_em: 0.6,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text(&self, text: &str) -> Option<f64> {
        Some(self.font_size_px * self.glyph_width_em * text.chars().count() as f64)
    }
}

/// Width of the widest line of a possibly multi-line label.
pub(crate) fn measure_lines<M>(measurer: &M, lines: &[&str]) -> Option<f64>
where
    M: TextMeasurer + ?Sized,
{
    lines
        .iter()
        .map(|line| measurer.measure_text(line))
        .try_fold(0.0_f64, |widest, width| width.map(|width| widest.max(width)))
}

/// Greedy word wrap of `text` into lines no wider than `max_width`.
///
/// A single word wider than `max_width` keeps a line of its own. Labels that
/// cannot be measured are returned unwrapped.
pub fn wrap_label<M>(measurer: &M, text: &str, max_width: f64) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        match measurer.measure_text(&candidate) {
            Some(width) if width > max_width => {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
            Some(_) => current = candidate,
            None => return vec![text.to_owned()],
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
