//! # rd-session — Draw orchestration
//!
//! Owns the shared spin session: starts all reels together, enforces the
//! global stop deadline, collects the final results and hands them to the
//! presentation boundary exactly once.
//!
//! ## Control flow
//!
//! ```text
//! start()
//!   ├── re-entrancy guard (active session → no-op)
//!   ├── clear board, busy label, in-progress status
//!   ├── begin every reel (reshuffle, shared deadline)
//!   ├── schedule one step task per reel (self-rescheduling)
//!   └── schedule the global cutoff at deadline
//!
//! cutoff
//!   ├── force-stop every reel not yet stopped
//!   └── present results (once, whichever path finishes last)
//! ```

pub mod config;
pub mod orchestrator;
pub mod session;

pub use config::SessionConfig;
pub use orchestrator::LotteryOrchestrator;
pub use session::SpinSession;
