use std::fmt;

use serde::{Deserialize, Serialize};

/// Summary of a finished training, ready to be shown to the user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometres
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl SummaryMessage {
    /// Render the one-line message. Numbers always carry three fraction digits.
    pub fn render(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for SummaryMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
