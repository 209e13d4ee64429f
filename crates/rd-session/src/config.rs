//! Session configuration profiles

use serde::{Deserialize, Serialize};

use rd_core::Millis;
use rd_reel::SlowdownRamp;

/// Configuration for one draw machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Global stop deadline, measured from session start (ms)
    pub deadline_ms: Millis,
    /// Step-delay ramp shared by all reels
    pub ramp: SlowdownRamp,
    /// Trigger label while a draw is running
    pub busy_label: String,
    /// Trigger label between draws
    pub idle_label: String,
    /// Hint shown before the first draw
    pub idle_hint: String,
    /// Status shown while reels are cycling
    pub in_progress_status: String,
    /// Prefix of the joined result message
    pub result_prefix: String,
    /// Separator between result items
    pub result_separator: String,
}

impl SessionConfig {
    /// Standard profile: 5 second draw, 100 → 400 ms deceleration.
    pub fn standard() -> Self {
        Self {
            deadline_ms: 5000,
            ramp: SlowdownRamp::standard(),
            busy_label: "Drawing...".into(),
            idle_label: "Draw".into(),
            idle_hint: "Press the trigger for a 5 second draw — the items left showing are yours!"
                .into(),
            in_progress_status: "Randomizing...".into(),
            result_prefix: "You won: ".into(),
            result_separator: " + ".into(),
        }
    }

    /// Rapid profile: everything scaled down tenfold. Used by tests and
    /// impatient demos.
    pub fn rapid() -> Self {
        Self::standard().scaled(0.1)
    }

    /// Scale all durations by `factor` (< 1.0 = faster).
    pub fn scaled(mut self, factor: f64) -> Self {
        self.deadline_ms = ((self.deadline_ms as f64 * factor).round() as Millis).max(1);
        self.ramp = self.ramp.scaled(factor);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
