//! Running workouts
//!
//! Distance comes from the step count; calories scale with mean speed,
//! weight and duration.

use crate::models::WorkoutCode;
use crate::training::{Readings, Training, M_IN_KM};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// A run measured by a step counter
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    readings: Readings,
}

impl Running {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            readings: Readings::new(action, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Running
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn calories_kcal(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SHIFT)
            * self.readings.weight_kg
            / M_IN_KM
            * self.readings.duration_minutes()
    }
}
