//! Errors surfaced by the batch driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("workout error: {0}")]
    Workout(#[from] workout_stats::WorkoutError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for batch driver operations.
pub type CliResult<T> = Result<T, CliError>;
