//! Completion chime — the short confirmation tone after a draw

use serde::{Deserialize, Serialize};

use rd_core::RdResult;

/// One note of a chime pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChimeNote {
    /// Frequency in Hz
    pub frequency_hz: f32,
    /// Duration in milliseconds
    pub duration_ms: u32,
}

/// A short tone pattern a front-end can synthesize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChimePattern {
    pub notes: Vec<ChimeNote>,
    /// Peak gain, 0.0 - 1.0
    pub gain: f32,
}

impl ChimePattern {
    /// The standard completion chime: a descending three-note sweep.
    pub fn completion() -> Self {
        Self {
            notes: vec![
                ChimeNote {
                    frequency_hz: 800.0,
                    duration_ms: 100,
                },
                ChimeNote {
                    frequency_hz: 600.0,
                    duration_ms: 100,
                },
                ChimeNote {
                    frequency_hz: 400.0,
                    duration_ms: 100,
                },
            ],
            gain: 0.3,
        }
    }

    /// Total pattern length in milliseconds.
    pub fn total_ms(&self) -> u32 {
        self.notes.iter().map(|n| n.duration_ms).sum()
    }
}

/// Plays the completion chime. Best-effort: the orchestrator logs a
/// returned error and carries on, so an unavailable audio backend can
/// never abort result presentation.
pub trait ToneEmitter: Send + Sync {
    fn play_completion_chime(&self) -> RdResult<()>;
}

/// Emitter that plays nothing. Useful for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentChime;

impl ToneEmitter for SilentChime {
    fn play_completion_chime(&self) -> RdResult<()> {
        Ok(())
    }
}
