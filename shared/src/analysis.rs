use serde::{Deserialize, Serialize};

use crate::prediction::deserialize_display_string;

/// Decimal places used when showing transit parameters.
pub const PARAMETER_PRECISION: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitParameters {
    pub period: f64,
    pub duration: f64,
    pub transit_time: f64,
}

impl TransitParameters {
    pub fn rows(&self) -> [(&'static str, String); 3] {
        [
            ("Período (días)", format_fixed(self.period)),
            ("Duración (horas)", format_fixed(self.duration)),
            ("Tiempo de tránsito", format_fixed(self.transit_time)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarAnalysis {
    #[serde(deserialize_with = "deserialize_display_string")]
    pub star_id: String,
    pub image_url: String,
    pub message: String,
    pub parameters: TransitParameters,
}

pub fn format_fixed(value: f64) -> String {
    format!("{:.*}", PARAMETER_PRECISION, value)
}

/// Trims a user supplied star identifier. `None` when nothing usable is
/// left; `.` and `..` would collapse the upstream path, so they count as
/// missing.
pub fn normalize_star_id(raw: &str) -> Option<&str> {
    match raw.trim() {
        "" | "." | ".." => None,
        trimmed => Some(trimmed),
    }
}
