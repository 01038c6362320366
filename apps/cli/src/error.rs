//! Errors that end a session.

use flashcard_core::{InvalidChoice, StorageError};
use thiserror::Error;

/// Fatal session errors. Anything recoverable is reported to the user
/// and never reaches this type.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
