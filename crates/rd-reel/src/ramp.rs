//! Deceleration ramp for reel step timing

use serde::{Deserialize, Serialize};

use rd_core::Millis;

/// Step-delay ramp: constant at `base_delay_ms` until the remaining time
/// drops inside `window_ms`, then linearly interpolated up to
/// `max_delay_ms` as the remaining time shrinks to zero. Produces smooth
/// deceleration without discrete speed buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowdownRamp {
    /// Full-speed step delay (ms)
    pub base_delay_ms: Millis,
    /// Step delay as remaining time reaches zero (ms)
    pub max_delay_ms: Millis,
    /// How long before the deadline the slowdown starts (ms)
    pub window_ms: Millis,
}

impl SlowdownRamp {
    /// Standard ramp: 100 ms steps slowing to 400 ms over the final 2 s.
    pub fn standard() -> Self {
        Self {
            base_delay_ms: 100,
            max_delay_ms: 400,
            window_ms: 2000,
        }
    }

    /// Step delay for a given remaining time before the deadline.
    pub fn delay_for(&self, remaining_ms: Millis) -> Millis {
        if self.window_ms == 0 || remaining_ms >= self.window_ms {
            return self.base_delay_ms;
        }

        let spread = self.max_delay_ms.saturating_sub(self.base_delay_ms) as f64;
        let t = 1.0 - remaining_ms as f64 / self.window_ms as f64;
        let delay = self.base_delay_ms + (t * spread).round() as Millis;
        delay.min(self.max_delay_ms)
    }

    /// Scale all durations by `factor` (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: Millis| ((ms as f64 * factor).round() as Millis).max(1);
        Self {
            base_delay_ms: scale(self.base_delay_ms),
            max_delay_ms: scale(self.max_delay_ms),
            window_ms: scale(self.window_ms),
        }
    }
}

impl Default for SlowdownRamp {
    fn default() -> Self {
        Self::standard()
    }
}
