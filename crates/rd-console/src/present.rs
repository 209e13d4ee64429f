//! Terminal presenter and chime

use std::io::{self, Write};

use rd_board::{ChimePattern, InventoryEntry, Presenter, StatusKind, ToneEmitter};
use rd_core::RdResult;

/// Renders the board as terminal lines. Cycling frames go to the debug
/// log (they are far too fast to be readable as printed lines); final
/// frames, status text and inventory entries go to stdout.
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show_status(&self, message: &str, kind: StatusKind) {
        match kind {
            StatusKind::Info => println!("· {message}"),
            StatusKind::Success => println!("★ {message}"),
            StatusKind::Error => eprintln!("! {message}"),
        }
    }

    fn clear_board(&self, reel_count: usize) {
        println!("--- new draw: {reel_count} reels ---");
    }

    fn render_reel_frame(&self, reel_index: u8, item_id: &str, is_final: bool) {
        if is_final {
            println!("  reel {reel_index} locked: {item_id}");
        } else {
            log::debug!("reel {reel_index} ▸ {item_id}");
        }
    }

    fn append_inventory(&self, entry: &InventoryEntry) {
        println!(
            "  + {} [{}] at {}",
            entry.item_id,
            entry.asset_url,
            entry.awarded_at.format("%H:%M:%S")
        );
    }

    fn set_trigger_label(&self, label: &str) {
        log::debug!("trigger label: {label}");
    }
}

/// Completion chime via the terminal bell.
pub struct BellChime;

impl ToneEmitter for BellChime {
    fn play_completion_chime(&self) -> RdResult<()> {
        let pattern = ChimePattern::completion();
        print!("\x07");
        io::stdout().flush()?;
        log::debug!(
            "chime: {} notes over {} ms",
            pattern.notes.len(),
            pattern.total_ms()
        );
        Ok(())
    }
}
