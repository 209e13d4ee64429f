//! Millisecond time helpers
//!
//! All session timing is expressed in integer milliseconds on the
//! cooperative scheduler's virtual clock; wall-clock stamps shown to the
//! user (inventory timestamps) use `chrono` at the presentation boundary.

/// Milliseconds on the session timeline.
pub type Millis = u64;
