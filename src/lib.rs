// Library interface for fittrack modules
// This allows integration tests and benchmarks to access the core functionality

pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use dispatch::{build_workout, read_package, summarize_packages};
pub use error::{FitTrackError, ImportError, Result};
pub use export::OutputFormat;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{WorkoutCode, WorkoutPackage, WorkoutSummary};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, Workout};
pub use walking::SportsWalking;
