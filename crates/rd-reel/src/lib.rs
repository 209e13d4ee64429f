//! # rd-reel — Reel animation core
//!
//! One reel of the draw machine: an ordered strip of prize identifiers,
//! a deceleration ramp, and the state machine that cycles through the
//! strip until a deadline.
//!
//! ## Architecture
//!
//! ```text
//! ReelAnimator
//!     │
//!     ├── ReelStrip     (ordered items, reshuffled per session)
//!     ├── SlowdownRamp  (step delay: base → max near the deadline)
//!     └── TaskHandle    (cancellation for the pending step timer)
//!           │
//!           v
//!     step(now) → StepOutcome (frame / settled / skipped)
//! ```
//!
//! The animator holds no presentation handles; a driver runs its steps on
//! a scheduler and renders the returned frames.

pub mod animator;
pub mod ramp;
pub mod strip;

pub use animator::{ReelAnimator, ReelPhase, StepOutcome};
pub use ramp::SlowdownRamp;
pub use strip::ReelStrip;
