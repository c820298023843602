//! Error types for bui.
//!
//! Geometry overflow, over-long input and unknown keys are not errors; they
//! are clamped, dropped or ignored where they happen. What remains is real
//! terminal I/O failure and broken caller preconditions.

use thiserror::Error;

/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading keys or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `ask_list` was called without any option to select.
    #[error("menu requires at least one option")]
    EmptyMenu,

    /// Styled output was requested but the terminal size could not be read.
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(String),
}

impl Error {
    /// Create a new terminal unavailable error.
    pub fn terminal_unavailable(msg: impl Into<String>) -> Self {
        Self::TerminalUnavailable(msg.into())
    }
}
