//! Error types for ReelDraw

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum RdError {
    #[error("Reel error: {0}")]
    Reel(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Chime playback failed: {0}")]
    Chime(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type RdResult<T> = Result<T, RdError>;
