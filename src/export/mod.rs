//! Report rendering
//!
//! Summaries can be written as the fixed-format text lines, as a pretty
//! JSON array, or as a table for terminal display.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::models::WorkoutSummary;

pub mod json;
pub mod table;
pub mod text;

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!("Unsupported output format: {}", s)),
        }
    }
}

/// Write summaries to `out` in the requested format
pub fn write_report<W: Write>(
    format: OutputFormat,
    summaries: &[WorkoutSummary],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_summaries(summaries, out),
        OutputFormat::Json => json::write_summaries(summaries, out),
        OutputFormat::Table => table::write_summaries(summaries, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_report_dispatches_on_format() {
        let summaries = vec![WorkoutSummary {
            workout_type: "Running".to_string(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 699.75,
        }];

        let mut text = Vec::new();
        write_report(OutputFormat::Text, &summaries, &mut text).unwrap();
        assert!(String::from_utf8(text).unwrap().starts_with("Workout type: Running;"));

        let mut json = Vec::new();
        write_report(OutputFormat::Json, &summaries, &mut json).unwrap();
        assert!(String::from_utf8(json).unwrap().starts_with('['));
    }
}
