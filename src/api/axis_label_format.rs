use super::axis_config::NumericFormat;

/// Significant digits used by general (`g`) formatting.
const GENERAL_PRECISION: i32 = 6;

const SI_SYMBOLS: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// SI magnitude shared by every label of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiPrefix {
    /// Power of ten, a multiple of 3 within `[-24, 24]`.
    pub exponent: i32,
    pub symbol: &'static str,
}

impl SiPrefix {
    #[must_use]
    pub fn for_value(value: f64) -> Self {
        let exponent = if value == 0.0 || !value.is_finite() {
            0
        } else {
            let digits = 1 + (1e-12 + value.abs().log10()).floor() as i32;
            ((digits - 1).div_euclid(3) * 3).clamp(-24, 24)
        };
        let index = (8 + exponent / 3) as usize;
        Self {
            exponent,
            symbol: SI_SYMBOLS[index],
        }
    }

    #[must_use]
    pub fn scale(self, value: f64) -> f64 {
        if self.exponent >= 0 {
            value / 10f64.powi(self.exponent)
        } else {
            value * 10f64.powi(-self.exponent)
        }
    }
}

/// Formats one value-axis label. `last_tick` fixes the SI magnitude so the
/// whole axis shares one symbol.
#[must_use]
pub fn format_numeric_label(value: f64, format: NumericFormat, last_tick: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match format {
        NumericFormat::General => format_general(value, false),
        NumericFormat::Si => {
            let prefix = SiPrefix::for_value(last_tick);
            let mut text = format_general(prefix.scale(value), false);
            text.push_str(prefix.symbol);
            text
        }
        NumericFormat::Comma if value.fract() != 0.0 => format_fixed(value, 2),
        NumericFormat::Round1 => format_fixed(value, 1),
        NumericFormat::Round2 => format_fixed(value, 2),
        NumericFormat::Round3 => format_fixed(value, 3),
        NumericFormat::Round4 => format_fixed(value, 4),
        NumericFormat::Comma | NumericFormat::Default => format_grouped(value),
    }
}

/// Formats a whole tick sequence; `prefix`/`suffix` only decorate the last label.
#[must_use]
pub fn format_numeric_ticks(
    values: &[f64],
    format: NumericFormat,
    prefix: &str,
    suffix: &str,
) -> Vec<String> {
    let Some(&last_tick) = values.last() else {
        return Vec::new();
    };
    let last_index = values.len() - 1;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let text = format_numeric_label(*value, format, last_tick);
            if index == last_index {
                apply_label_affixes(text, prefix, suffix)
            } else {
                text
            }
        })
        .collect()
}

pub(crate) fn apply_label_affixes(text: String, prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() && suffix.is_empty() {
        return text;
    }
    let mut decorated = String::with_capacity(prefix.len() + text.len() + suffix.len());
    decorated.push_str(prefix);
    decorated.push_str(&text);
    decorated.push_str(suffix);
    decorated
}

/// Up to six significant digits, insignificant zeros trimmed, exponent
/// notation outside `[1e-6, 1e6)`.
fn format_general(value: f64, grouped: bool) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map_or((scientific.as_str(), 0), |(mantissa, exponent)| {
            (mantissa, exponent.parse::<i32>().unwrap_or(0))
        });

    if !(-6..GENERAL_PRECISION).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (GENERAL_PRECISION - 1 - exponent).max(0) as usize;
    let text = trim_fraction(&format!("{value:.decimals$}"));
    if grouped { group_thousands(&text) } else { text }
}

/// Grouped digits with no forced decimals.
fn format_grouped(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e21 {
        group_thousands(&normalize_negative_zero(format!("{value:.0}")))
    } else {
        format_general(value, true)
    }
}

fn format_fixed(value: f64, precision: usize) -> String {
    group_thousands(&normalize_negative_zero(format!("{value:.precision$}")))
}

fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_owned();
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    normalize_negative_zero(trimmed.to_owned())
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|ch| ch == '0' || ch == '.') => unsigned.to_owned(),
        _ => text,
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
