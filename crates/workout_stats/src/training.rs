//! Training records and their distance, speed and calorie formulas.
//!
//! Every activity shares the same base fields (motion units, duration, weight); what differs is
//! carried by [`TrainingKind`]. Formulas dispatch with an exhaustive `match`, so a new variant
//! cannot be added without supplying all of them.

use crate::{SummaryMessage, WorkoutError};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Step length in metres, shared by running and walking.
pub const STEP_LEN_M: f64 = 0.65;
/// Stroke length in metres.
pub const STROKE_LEN_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Activity-specific payload of a [`Training`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrainingKind {
    Running,
    SportsWalking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64,
        /// May be fractional when the last lap was not finished.
        pool_lap_count: f64,
    },
}

impl TrainingKind {
    /// Display name used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            TrainingKind::Running => "Running",
            TrainingKind::SportsWalking { .. } => "SportsWalking",
            TrainingKind::Swimming { .. } => "Swimming",
        }
    }

    /// Distance covered by one motion unit, in metres.
    pub fn unit_len_m(&self) -> f64 {
        match self {
            TrainingKind::Running | TrainingKind::SportsWalking { .. } => STEP_LEN_M,
            TrainingKind::Swimming { .. } => STROKE_LEN_M,
        }
    }
}

/// A validated workout. Fields are fixed at construction; derived values are recomputed on
/// every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Training {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
    kind: TrainingKind,
}

impl Training {
    pub fn running(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        Self::new(action_count, duration_hours, weight_kg, TrainingKind::Running)
    }

    pub fn sports_walking(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        ensure_positive("height_cm", height_cm)?;
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            TrainingKind::SportsWalking { height_cm },
        )
    }

    pub fn swimming(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Result<Self, WorkoutError> {
        ensure_positive("pool_length_m", pool_length_m)?;
        ensure_positive("pool_lap_count", pool_lap_count)?;
        Self::new(
            action_count,
            duration_hours,
            weight_kg,
            TrainingKind::Swimming {
                pool_length_m,
                pool_lap_count,
            },
        )
    }

    fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        kind: TrainingKind,
    ) -> Result<Self, WorkoutError> {
        // duration is a divisor in every speed formula
        ensure_positive("duration_hours", duration_hours)?;
        ensure_positive("weight_kg", weight_kg)?;
        tracing::trace!(
            kind = kind.label(),
            action_count,
            duration_hours,
            weight_kg,
            "training built"
        );
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            kind,
        })
    }

    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn kind(&self) -> &TrainingKind {
        &self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// Distance in km, from the motion unit count.
    pub fn distance_km(&self) -> f64 {
        self.action_count as f64 * self.kind.unit_len_m() / M_IN_KM
    }

    /// Mean speed in km/h. Swimming derives it from the pool, not from the stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.kind {
            TrainingKind::Running | TrainingKind::SportsWalking { .. } => {
                self.distance_km() / self.duration_hours
            }
            TrainingKind::Swimming {
                pool_length_m,
                pool_lap_count,
            } => pool_length_m * pool_lap_count / M_IN_KM / self.duration_hours,
        }
    }

    /// Calories burned (kcal).
    pub fn spent_calories(&self) -> f64 {
        match self.kind {
            TrainingKind::Running => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * self.weight_kg
                    / M_IN_KM
                    * self.duration_hours
                    * MIN_IN_H
            }
            TrainingKind::SportsWalking { height_cm } => {
                // floor division is part of the calibrated formula
                let speed_height_ratio = floor_div(self.mean_speed_kmh().powi(2), height_cm);
                (WALK_WEIGHT_MULTIPLIER * self.weight_kg
                    + speed_height_ratio * WALK_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
                    * self.duration_hours
                    * MIN_IN_H
            }
            TrainingKind::Swimming { .. } => {
                (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.weight_kg
            }
        }
    }

    pub fn summary(&self) -> SummaryMessage {
        SummaryMessage {
            training_type: self.label().to_string(),
            duration: self.duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Floor division that starts from the remainder, so a quotient which only rounds up to a
/// whole number in `a / b` still floors to the integer below it.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidReadings(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}
