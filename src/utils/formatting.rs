//! Formatting utilities used for CLI and export outputs.

use crate::models::{Location, Weather};
use serde::{Deserialize, Serialize};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Round half up (2.5 → 3, -2.5 → -2).
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn format(&self, celsius: f64) -> String {
        match self {
            TemperatureUnit::Fahrenheit => {
                format!("{}°F", round_half_up(celsius * 9.0 / 5.0 + 32.0))
            }
            TemperatureUnit::Celsius => format!("{}°C", round_half_up(celsius)),
        }
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `"Lanikai Beach, Kailua"`; falls back to admin area, then country.
pub fn location_label(location: Option<&Location>) -> String {
    let Some(loc) = location else {
        return String::new();
    };

    let parts: Vec<&str> = [non_empty(&loc.place_name), non_empty(&loc.locality)]
        .into_iter()
        .flatten()
        .collect();

    if !parts.is_empty() {
        return parts.join(", ");
    }

    non_empty(&loc.admin_area)
        .or_else(|| non_empty(&loc.country))
        .unwrap_or_default()
        .to_string()
}

/// `"Partly Cloudy • 82°F"`.
pub fn weather_label(weather: Option<&Weather>, unit: TemperatureUnit) -> String {
    let Some(w) = weather else {
        return String::new();
    };

    let mut parts = Vec::new();
    if let Some(c) = non_empty(&w.conditions) {
        parts.push(c.to_string());
    }
    if let Some(t) = w.temp_celsius {
        parts.push(unit.format(t));
    }
    parts.join(" • ")
}
