//! Error types for menu sessions.

use thiserror::Error;

/// Failure of a menu invocation.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The terminal could not be put into raw, cursor-addressable mode
    /// (no TTY, unsupported terminal). Nothing has been drawn.
    #[error("terminal session unavailable: {0}")]
    SessionUnavailable(String),

    /// An interrupt arrived while waiting for a key.
    #[error("interrupted")]
    Interrupted,

    /// I/O failure while the session was active.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;
