//! Shared workout computation model
//!
//! Every workout type implements [`Training`]. Distance and mean speed have
//! default formulas that variants may override; calorie expenditure has no
//! default, so there is no way to build a summary for a workout that does
//! not say how it burns energy.

use serde::{Deserialize, Serialize};

use crate::models::{WorkoutCode, WorkoutSummary};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered per step on foot, in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Readings common to every workout type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// Counted actions (steps or strokes)
    pub action: u32,

    /// Workout duration in hours
    pub duration_hours: f64,

    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Readings {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    /// Duration in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MIN_IN_H
    }
}

/// Calculations every workout type supports
pub trait Training {
    /// Code this workout type is dispatched under
    fn code(&self) -> WorkoutCode;

    /// Sensor readings shared by all workout types
    fn readings(&self) -> &Readings;

    /// Distance covered per counted action, in meters
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.readings().action) * self.step_length_m() / M_IN_KM
    }

    /// Average speed over the whole duration in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_hours
    }

    /// Energy spent in kilocalories
    fn calories_kcal(&self) -> f64;

    /// Collect the computed values into a summary
    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            workout_type: self.code().display_name().to_string(),
            duration_hours: self.readings().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// A workout of any supported type, as produced by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn code(&self) -> WorkoutCode {
        self.as_training().code()
    }

    fn readings(&self) -> &Readings {
        self.as_training().readings()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn calories_kcal(&self) -> f64 {
        self.as_training().calories_kcal()
    }
}

impl From<Running> for Workout {
    fn from(workout: Running) -> Self {
        Workout::Running(workout)
    }
}

impl From<SportsWalking> for Workout {
    fn from(workout: SportsWalking) -> Self {
        Workout::Walking(workout)
    }
}

impl From<Swimming> for Workout {
    fn from(workout: Swimming) -> Self {
        Workout::Swimming(workout)
    }
}
