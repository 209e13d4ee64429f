//! # rd-sched — Cooperative timer scheduler
//!
//! All reel animation in ReelDraw is timer-driven: a reel step runs, picks
//! its next delay, and schedules itself again. This crate makes that model
//! explicit — one single-threaded scheduler, delayed tasks ordered by due
//! time, and per-task cancellation handles.
//!
//! Tasks never preempt each other: a task runs to completion before the
//! next one is popped, so state shared between tasks only needs a lock for
//! the duration of one callback.
//!
//! ## Driving the clock
//!
//! - Tests drive a virtual clock with [`Scheduler::advance_to`] /
//!   [`Scheduler::run_until_idle`] — fully deterministic, no sleeping.
//! - The console front-end uses [`Scheduler::run_realtime`], which sleeps
//!   until each due time on the wall clock.
//!
//! ```
//! use rd_sched::Scheduler;
//!
//! let mut sched = Scheduler::new();
//! sched.schedule_in(100, |s| {
//!     // tasks may schedule further tasks
//!     s.schedule_in(50, |_| {});
//! });
//! sched.run_until_idle();
//! assert_eq!(sched.now_ms(), 150);
//! ```

pub mod scheduler;

pub use scheduler::{Scheduler, Task, TaskHandle};
