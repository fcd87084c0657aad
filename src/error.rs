//! Unified error hierarchy for fittrack
//!
//! Dispatch failures are terminal for the package that caused them; import
//! failures carry enough location information to point at the bad row.

use crate::models::WorkoutCode;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all fittrack operations
#[derive(Debug, Error)]
pub enum FitTrackError {
    /// Workout code is not one of SWM, RUN, WLK
    #[error("Unknown workout code: {code}")]
    UnknownWorkoutCode { code: String },

    /// Package carries the wrong number of readings for its code
    #[error("Argument count mismatch for {code}: expected {expected}, got {actual}")]
    ArgumentCountMismatch {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },

    /// Package input errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading packages from text input
#[derive(Debug, Error)]
pub enum ImportError {
    /// Row has no workout code
    #[error("Line {line}: missing workout code")]
    MissingCode { line: u64 },

    /// A reading could not be parsed as a number
    #[error("Line {line}: field {field} is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: usize,
        value: String,
    },

    /// Underlying CSV reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Package file is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// No importer handles this file type
    #[error("Unsupported package file: {path}")]
    UnsupportedFile { path: PathBuf },
}

/// Result type alias for fittrack operations
pub type Result<T> = std::result::Result<T, FitTrackError>;

impl FitTrackError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitTrackError::UnknownWorkoutCode { .. } => ErrorSeverity::Warning,
            FitTrackError::ArgumentCountMismatch { .. } => ErrorSeverity::Warning,
            FitTrackError::Import(_) => ErrorSeverity::Warning,
            FitTrackError::Io(_) | FitTrackError::Json(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            FitTrackError::UnknownWorkoutCode { code } => {
                format!(
                    "'{}' is not a known workout code. Use one of: {}",
                    code,
                    WorkoutCode::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            FitTrackError::ArgumentCountMismatch {
                code,
                expected,
                actual,
            } => {
                format!(
                    "{} workouts need {} readings ({}), but {} were given",
                    code,
                    expected,
                    code.argument_names().join(", "),
                    actual
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that stops the current run
    Error,
    /// Bad input; the offending package is skipped
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitTrackError::UnknownWorkoutCode {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FitTrackError::ArgumentCountMismatch {
            code: WorkoutCode::Running,
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.severity(), ErrorSeverity::Warning);

        let err = FitTrackError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_display_messages() {
        let err = FitTrackError::ArgumentCountMismatch {
            code: WorkoutCode::Running,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Argument count mismatch for RUN: expected 3, got 2"
        );

        let err = FitTrackError::from(ImportError::InvalidNumber {
            line: 4,
            field: 2,
            value: "abc".to_string(),
        });
        assert!(err.to_string().contains("Line 4"));
    }

    #[test]
    fn test_user_messages() {
        let err = FitTrackError::UnknownWorkoutCode {
            code: "XYZ".to_string(),
        };
        assert!(err.user_message().contains("SWM, RUN, WLK"));

        let err = FitTrackError::ArgumentCountMismatch {
            code: WorkoutCode::Walking,
            expected: 4,
            actual: 1,
        };
        assert!(err.user_message().contains("height_cm"));
    }
}
