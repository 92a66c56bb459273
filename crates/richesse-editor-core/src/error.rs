//! Errors for rejected editor commands.

use crate::platform::PlatformError;

/// Why a command was rejected before touching the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("no YouTube video id in {0}")]
    InvalidVideoUrl(String),

    #[error("invalid table size: {rows} x {cols}")]
    InvalidTableSize { rows: String, cols: String },

    #[error("platform error: {0}")]
    Platform(#[from] PlatformError),
}
