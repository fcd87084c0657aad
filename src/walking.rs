//! Sports walking workouts
//!
//! The calorie formula floor-divides the squared mean speed (km/h) by the
//! height in centimeters. Height is never converted to meters, so for any
//! realistic walking speed the quotient floors to zero and only the weight
//! term contributes. This is the established tracker behavior and is kept.

use crate::models::WorkoutCode;
use crate::training::{Readings, Training};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A walk measured by a step counter, with the walker's height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    readings: Readings,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            readings: Readings::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Walking
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn calories_kcal(&self) -> f64 {
        let weight = self.readings.weight_kg;
        let speed_height_ratio = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.readings.duration_minutes()
    }
}
