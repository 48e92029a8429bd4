use serde::{Deserialize, Serialize};

use crate::input::TimingConfig;

/// Linear map from a speed control's range to a tick interval
///
/// The control's maximum gives the fastest (shortest) interval and its
/// minimum the slowest. Nothing is clamped: degenerate ranges or
/// non-numeric readings produce NaN or out-of-range intervals as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMapping {
    pub min_interval_ms: f64,
    pub max_interval_ms: f64,
}

impl Default for SpeedMapping {
    fn default() -> Self {
        TimingConfig::default().into()
    }
}

impl From<TimingConfig> for SpeedMapping {
    fn from(timing: TimingConfig) -> Self {
        Self {
            min_interval_ms: timing.min_time_interval,
            max_interval_ms: timing.max_time_interval,
        }
    }
}

impl SpeedMapping {
    /// Interval in ms for control value `speed` within `[min_speed, max_speed]`
    pub fn interval_for(&self, speed: f64, max_speed: f64, min_speed: f64) -> f64 {
        let m = (self.max_interval_ms - self.min_interval_ms) / (min_speed - max_speed);
        let b = self.max_interval_ms - m * min_speed;
        m * speed + b
    }
}

/// Raw `value`/`min`/`max` of a speed control, as the host exposes them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedReading {
    pub value: String,
    pub min: String,
    pub max: String,
}

impl SpeedReading {
    pub fn new(value: &str, min: &str, max: &str) -> Self {
        Self {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Interval this reading maps to
    pub fn interval_with(&self, mapping: &SpeedMapping) -> f64 {
        mapping.interval_for(
            coerce_number(&self.value),
            coerce_number(&self.max),
            coerce_number(&self.min),
        )
    }
}

/// Numeric value of a control attribute, read the way a web page reads one
///
/// Blank is 0. Decimal and exponent forms, `Infinity` with an optional
/// sign, and unsigned `0x`/`0o`/`0b` integers are accepted. Anything else,
/// including `inf` and `nan`, is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(trimmed) {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
            })
            .unwrap_or(f64::NAN);
    }

    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_prefix(text: &str) -> Option<u32> {
    match text.get(..2)? {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}
