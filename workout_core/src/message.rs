//! Training summary messages and their rendering.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed metrics for one workout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// km/h
    pub speed: f64,
    pub calories: f64,
}

/// Output format for report lines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl InfoMessage {
    /// Human-readable summary line, every number with 3 decimals
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// Render as a single line (no trailing newline) in the given format
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.get_message()),
            ReportFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
