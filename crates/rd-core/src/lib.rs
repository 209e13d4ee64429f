//! # rd-core — ReelDraw foundation
//!
//! Shared error taxonomy and millisecond time helpers used by every
//! other crate in the workspace.

pub mod error;
pub mod time;

pub use error::{RdError, RdResult};
pub use time::Millis;
