//! Application-level errors.

use lostfound_core::DomainError;
use thiserror::Error;

/// Errors surfaced by the board.
///
/// Everything except I/O is reported to the user and the session goes on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid post JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Io(_))
    }
}

/// Result type alias for the board.
pub type AppResult<T> = Result<T, AppError>;
