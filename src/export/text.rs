use std::io::Write;

use crate::error::Result;
use crate::models::WorkoutSummary;

/// Write one summary line per workout
pub fn write_summaries<W: Write>(summaries: &[WorkoutSummary], out: &mut W) -> Result<()> {
    for summary in summaries {
        writeln!(out, "{}", summary)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::summarize_packages;
    use crate::models::WorkoutPackage;

    #[test]
    fn test_demo_report() {
        let summaries: Vec<WorkoutSummary> = summarize_packages(&WorkoutPackage::demo_packages())
            .into_iter()
            .collect::<Result<_>>()
            .unwrap();

        let mut out = Vec::new();
        write_summaries(&summaries, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories: 336.000.",
                "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories: 699.750.",
                "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories: 157.500.",
            ]
        );
    }

    #[test]
    fn test_empty_report() {
        let mut out = Vec::new();
        write_summaries(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
