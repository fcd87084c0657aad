//! Pool swimming workouts
//!
//! Distance still comes from the stroke count, but mean speed is taken from
//! the pool geometry: lap length times laps completed.

use crate::models::WorkoutCode;
use crate::training::{Readings, Training, M_IN_KM};

/// Distance covered per stroke, in meters
pub const STROKE_LENGTH_M: f64 = 1.38;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A pool swim measured by a stroke counter and lap counter
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    readings: Readings,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            readings: Readings::new(action, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swimming
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.readings.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.readings.weight_kg
    }
}
