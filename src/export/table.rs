use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

use crate::error::Result;
use crate::models::WorkoutSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Workout type")]
    workout_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Mean speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

impl From<&WorkoutSummary> for SummaryRow {
    fn from(summary: &WorkoutSummary) -> Self {
        Self {
            workout_type: summary.workout_type.clone(),
            duration: format!("{:.3}", summary.duration_hours),
            distance: format!("{:.3}", summary.distance_km),
            speed: format!("{:.3}", summary.mean_speed_kmh),
            calories: format!("{:.3}", summary.calories_kcal),
        }
    }
}

/// Write summaries as a terminal table
pub fn write_summaries<W: Write>(summaries: &[WorkoutSummary], out: &mut W) -> Result<()> {
    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    let table = Table::new(rows).with(Style::modern()).to_string();
    writeln!(out, "{}", table)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_headers_and_values() {
        let summaries = vec![WorkoutSummary {
            workout_type: "SportsWalking".to_string(),
            duration_hours: 1.0,
            distance_km: 5.85,
            mean_speed_kmh: 5.85,
            calories_kcal: 157.5,
        }];

        let mut out = Vec::new();
        write_summaries(&summaries, &mut out).unwrap();
        let table = String::from_utf8(out).unwrap();

        assert!(table.contains("Workout type"));
        assert!(table.contains("Mean speed (km/h)"));
        assert!(table.contains("SportsWalking"));
        assert!(table.contains("157.500"));
    }
}
