//! Presenter trait — how the core talks to a display

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Neutral progress/hint text
    Info,
    /// A completed draw with results
    Success,
    /// Available to front-ends; the core itself never emits it
    Error,
}

/// One prize appended to the running inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Prize identifier
    pub item_id: String,
    /// Resolved display asset (placeholder for unknown items)
    pub asset_url: String,
    /// When the prize was won
    pub awarded_at: DateTime<Local>,
}

impl InventoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(item_id: impl Into<String>, asset_url: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            asset_url: asset_url.into(),
            awarded_at: Local::now(),
        }
    }
}

/// Display surface for the draw machine.
///
/// All methods are presentation-only side effects and must be idempotent
/// where the core may repeat them (re-rendering the same frame is
/// harmless). Implementations must not call back into the orchestrator.
pub trait Presenter: Send + Sync {
    /// Show a status line (the "Randomizing..." / "You won: ..." text).
    fn show_status(&self, message: &str, kind: StatusKind);

    /// Hide all items on all reels and reset highlight state.
    fn clear_board(&self, reel_count: usize);

    /// Reveal exactly one item on one reel. `is_final` marks the reel's
    /// settled result (the highlight state).
    fn render_reel_frame(&self, reel_index: u8, item_id: &str, is_final: bool);

    /// Append one won prize to the inventory display.
    fn append_inventory(&self, entry: &InventoryEntry);

    /// Swap the trigger control's label (busy while drawing, idle after).
    fn set_trigger_label(&self, label: &str);
}

/// Presenter that drops everything. Useful for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_status(&self, _message: &str, _kind: StatusKind) {}
    fn clear_board(&self, _reel_count: usize) {}
    fn render_reel_frame(&self, _reel_index: u8, _item_id: &str, _is_final: bool) {}
    fn append_inventory(&self, _entry: &InventoryEntry) {}
    fn set_trigger_label(&self, _label: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_entry_roundtrip() {
        let entry = InventoryEntry::now("AKM", "assets/rifles/akm.png");
        let json = serde_json::to_string(&entry).unwrap();
        let back: InventoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn test_status_kind_serde_names() {
        assert_eq!(
            serde_json::to_string(&StatusKind::Success).unwrap(),
            "\"success\""
        );
    }
}
