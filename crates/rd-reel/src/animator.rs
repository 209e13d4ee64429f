//! Per-reel animation state machine

use rand::Rng;
use serde::{Deserialize, Serialize};

use rd_core::Millis;
use rd_sched::TaskHandle;

use crate::ramp::SlowdownRamp;
use crate::strip::ReelStrip;

/// Animation phase of one reel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReelPhase {
    /// No timer active; the first item shows as a neutral default
    Idle,
    /// Rapidly advancing through the strip
    Cycling,
    /// Past the deadline, landing on the final item
    Settling,
    /// Final result fixed; no timers run until the next session
    Stopped,
}

/// Result of one animation step
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Still cycling: reveal `item`, schedule the next step
    Frame {
        item: String,
        next_delay_ms: Millis,
    },
    /// Deadline reached: `item` is the reel's final result
    Settled { item: String },
    /// The reel was no longer cycling (raced with a force stop)
    Skipped,
}

/// One reel's cycling/deceleration/stop logic.
///
/// The animator is a pure state machine: the driver feeds it the current
/// time and renders the frames it returns. It owns the cancellation
/// handle for its pending step timer, so a force stop can always cut off
/// the next step.
#[derive(Debug)]
pub struct ReelAnimator {
    strip: ReelStrip,
    ramp: SlowdownRamp,
    phase: ReelPhase,
    cursor: usize,
    started_at_ms: Millis,
    deadline_ms: Millis,
    pending: Option<TaskHandle>,
    final_item: Option<String>,
}

impl ReelAnimator {
    /// Create an idle animator for a strip.
    pub fn new(strip: ReelStrip, ramp: SlowdownRamp) -> Self {
        Self {
            strip,
            ramp,
            phase: ReelPhase::Idle,
            cursor: 0,
            started_at_ms: 0,
            deadline_ms: 0,
            pending: None,
            final_item: None,
        }
    }

    /// Reel index within the machine.
    pub fn reel_index(&self) -> u8 {
        self.strip.reel_index
    }

    /// Current phase.
    pub fn phase(&self) -> ReelPhase {
        self.phase
    }

    /// Has this reel fixed its final result?
    pub fn is_stopped(&self) -> bool {
        self.phase == ReelPhase::Stopped
    }

    /// The currently selected (visible) item. Exactly one item is
    /// selected at any moment.
    pub fn selected_item(&self) -> &str {
        self.strip.item_at(self.cursor)
    }

    /// Final result once stopped.
    pub fn final_result(&self) -> Option<&str> {
        self.final_item.as_deref()
    }

    /// The underlying strip.
    pub fn strip(&self) -> &ReelStrip {
        &self.strip
    }

    /// Start cycling toward `deadline_ms` (absolute scheduler time).
    /// Reshuffles the strip order; the item set is invariant.
    pub fn begin(&mut self, now_ms: Millis, deadline_ms: Millis, rng: &mut impl Rng) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }

        self.strip.shuffle(rng);
        self.cursor = 0;
        self.phase = ReelPhase::Cycling;
        self.started_at_ms = now_ms;
        self.deadline_ms = deadline_ms;
        self.final_item = None;
    }

    /// Remember the handle of the scheduled next step so a force stop can
    /// cancel it.
    pub fn set_pending(&mut self, handle: TaskHandle) {
        self.pending = Some(handle);
    }

    /// Run one animation step at `now_ms`: advance the selection
    /// circularly, then either keep cycling or settle if the deadline has
    /// been reached.
    pub fn step(&mut self, now_ms: Millis) -> StepOutcome {
        if self.phase != ReelPhase::Cycling {
            return StepOutcome::Skipped;
        }
        self.pending = None;

        self.cursor = (self.cursor + 1) % self.strip.len();

        if now_ms >= self.deadline_ms {
            return StepOutcome::Settled {
                item: self.settle(),
            };
        }

        let remaining_ms = self.deadline_ms - now_ms;
        StepOutcome::Frame {
            item: self.selected_item().to_string(),
            next_delay_ms: self.ramp.delay_for(remaining_ms),
        }
    }

    /// Stop immediately on the currently selected item, cancelling any
    /// pending step. Idempotent: on a stopped reel this returns the
    /// existing final result and changes nothing.
    pub fn force_stop(&mut self) -> Option<String> {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }

        if self.phase == ReelPhase::Stopped {
            return self.final_item.clone();
        }

        Some(self.settle())
    }

    fn settle(&mut self) -> String {
        self.phase = ReelPhase::Settling;
        let item = self.selected_item().to_string();
        self.final_item = Some(item.clone());
        self.phase = ReelPhase::Stopped;
        log::debug!("reel {} stopped on '{}'", self.strip.reel_index, item);
        item
    }
}
