//! # rd-board — Presentation boundary
//!
//! The draw core never touches a screen or a speaker. Everything it shows
//! or plays goes through the traits defined here:
//!
//! - [`Presenter`] — status text, per-step reel frames, the running
//!   inventory of won prizes
//! - [`ItemCatalog`] — prize identifier → display asset, with a
//!   placeholder fallback for unknown identifiers
//! - [`ToneEmitter`] — the short completion chime, best-effort
//!
//! Front-ends (a terminal, a GUI, a web page) implement these; the
//! orchestrator in `rd-session` calls them.

pub mod catalog;
pub mod chime;
pub mod presenter;

pub use catalog::{ItemCatalog, StaticCatalog};
pub use chime::{ChimeNote, ChimePattern, SilentChime, ToneEmitter};
pub use presenter::{InventoryEntry, NullPresenter, Presenter, StatusKind};
