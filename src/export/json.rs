use std::io::Write;

use crate::error::Result;
use crate::models::WorkoutSummary;

/// Write summaries as a pretty-printed JSON array
pub fn write_summaries<W: Write>(summaries: &[WorkoutSummary], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, summaries)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fields() {
        let summaries = vec![WorkoutSummary {
            workout_type: "Swimming".to_string(),
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }];

        let mut out = Vec::new();
        write_summaries(&summaries, &mut out).unwrap();
        let content = String::from_utf8(out).unwrap();

        assert!(content.contains("\"workout_type\": \"Swimming\""));
        assert!(content.contains("\"calories_kcal\": 336.0"));

        let parsed: Vec<WorkoutSummary> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, summaries);
    }
}
