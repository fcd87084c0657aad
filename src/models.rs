use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FitTrackError;

/// Short workout codes sent by the tracker sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
}

impl WorkoutCode {
    /// Every recognized code, in table order
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::Walking => "WLK",
        }
    }

    /// Positional reading names, in the order a package must supply them
    pub fn argument_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
            WorkoutCode::Running => &["action", "duration_hours", "weight_kg"],
            WorkoutCode::Walking => &["action", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    /// Number of readings a package with this code must carry
    pub fn expected_args(&self) -> usize {
        self.argument_names().len()
    }

    /// Name shown in the summary line
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "Swimming",
            WorkoutCode::Running => "Running",
            WorkoutCode::Walking => "SportsWalking",
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = FitTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| FitTrackError::UnknownWorkoutCode {
                code: s.to_string(),
            })
    }
}

/// One raw reading bundle: a workout code plus its positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Raw code as received; validated by the dispatcher
    pub code: String,

    /// Positional readings (action, duration, weight, ...)
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// The three packages the tracker demo reports on
    pub fn demo_packages() -> Vec<WorkoutPackage> {
        vec![
            WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}

/// Computed result of a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Display name of the workout type
    pub workout_type: String,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Average speed over the whole duration in km/h
    pub mean_speed_kmh: f64,

    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    /// Render the fixed-format summary line
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.workout_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
