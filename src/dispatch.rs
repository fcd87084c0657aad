//! Workout dispatcher
//!
//! Turns a raw `(code, readings)` package into a concrete workout. The code
//! picks the workout type; the readings are consumed positionally in the
//! order given by [`WorkoutCode::argument_names`].

use tracing::debug;

use crate::error::{FitTrackError, Result};
use crate::models::{WorkoutCode, WorkoutPackage, WorkoutSummary};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::{Training, Workout};
use crate::walking::SportsWalking;

/// Build a workout from its code and positional readings
pub fn build_workout(code: &str, args: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code.parse()?;

    let expected = code.expected_args();
    if args.len() != expected {
        return Err(FitTrackError::ArgumentCountMismatch {
            code,
            expected,
            actual: args.len(),
        });
    }

    let workout = match code {
        WorkoutCode::Swimming => Workout::from(Swimming::new(
            as_count(args[0]),
            args[1],
            args[2],
            args[3],
            as_count(args[4]),
        )),
        WorkoutCode::Running => Workout::from(Running::new(as_count(args[0]), args[1], args[2])),
        WorkoutCode::Walking => Workout::from(SportsWalking::new(
            as_count(args[0]),
            args[1],
            args[2],
            args[3],
        )),
    };

    debug!(code = %code, args = ?args, "Built workout");
    Ok(workout)
}

/// Build the workout a package describes
pub fn read_package(package: &WorkoutPackage) -> Result<Workout> {
    build_workout(&package.code, &package.data)
}

/// Summarize every package, keeping failures alongside successes
pub fn summarize_packages(packages: &[WorkoutPackage]) -> Vec<Result<WorkoutSummary>> {
    packages
        .iter()
        .map(|package| {
            read_package(package)
                .map(|workout| workout.summary())
                .inspect_err(|e| debug!(code = %package.code, error = %e, "Rejected package"))
        })
        .collect()
}

/// Counters arrive as plain numbers. Fractional parts are dropped and the
/// result is clamped to `u32`: negatives and NaN become 0, values past
/// `u32::MAX` saturate.
fn as_count(value: f64) -> u32 {
    value as u32
}
