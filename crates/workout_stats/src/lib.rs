//! Workout statistics computed from raw sensor readings.
//!
//! A [`Training`] is built from typed fields (or from a positional reading list through
//! [`read_package`]), and turned into a [`SummaryMessage`] with distance, mean speed and
//! calories burned.

use thiserror::Error;

pub mod message;
pub mod package;
pub mod training;

pub use message::SummaryMessage;
pub use package::{ActivityCode, Package, read_package};
pub use training::{Training, TrainingKind};

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown activity code: {0}")]
    UnknownActivityCode(String),
    #[error("{code} expects {expected} readings, got {actual}")]
    ArityMismatch {
        code: ActivityCode,
        expected: usize,
        actual: usize,
    },
    #[error("invalid readings: {0}")]
    InvalidReadings(String),
}
