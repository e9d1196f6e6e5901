//! Sensor packages: an activity code plus the positional readings for it.
//!
//! This is the only place where readings are positional. Everything past [`read_package`]
//! works with named, validated fields on [`Training`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Training, WorkoutError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Swimming => "SWM",
            ActivityCode::Running => "RUN",
            ActivityCode::SportsWalking => "WLK",
        }
    }

    /// Number of readings the activity expects.
    pub fn arity(&self) -> usize {
        match self {
            ActivityCode::Swimming => 5,
            ActivityCode::Running => 3,
            ActivityCode::SportsWalking => 4,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(ActivityCode::Swimming),
            "RUN" => Ok(ActivityCode::Running),
            "WLK" => Ok(ActivityCode::SportsWalking),
            other => Err(WorkoutError::UnknownActivityCode(other.to_string())),
        }
    }
}

/// One entry of a batch file, e.g. `{"workout_type": "RUN", "data": [15000, 1, 75]}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    /// Activity code: SWM, RUN or WLK
    pub workout_type: String,
    /// Readings in positional order: action count, duration (h), weight (kg), then the
    /// activity-specific fields
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> Result<Training, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Build the training selected by `workout_type` from its positional readings.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, WorkoutError> {
    let code: ActivityCode = workout_type.parse()?;
    if data.len() != code.arity() {
        return Err(WorkoutError::ArityMismatch {
            code,
            expected: code.arity(),
            actual: data.len(),
        });
    }
    tracing::debug!(%code, readings = data.len(), "reading package");

    let action_count = action_count(data[0])?;
    let (duration, weight) = (data[1], data[2]);
    match code {
        ActivityCode::Running => Training::running(action_count, duration, weight),
        ActivityCode::SportsWalking => {
            Training::sports_walking(action_count, duration, weight, data[3])
        }
        ActivityCode::Swimming => {
            Training::swimming(action_count, duration, weight, data[3], data[4])
        }
    }
}

fn action_count(value: f64) -> Result<u64, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidReadings(format!(
            "action count must be a non-negative whole number, got {value}"
        )))
    }
}
