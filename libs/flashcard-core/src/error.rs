//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while reading persisted state.
///
/// All of these are recoverable: callers report them and fall back to an
/// empty structure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("flashcards data should be an object mapping terms to cards")]
    NotAMapping,

    #[error("flashcard for term '{term}' is improperly formatted: {reason}")]
    MalformedEntry { term: String, reason: String },

    #[error("scores data should be a list of non-negative integers")]
    NotAScoreList,
}

/// Errors that can occur while writing persisted state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A quiz answer that is not one of the offered letters.
#[derive(Debug, Error)]
#[error("invalid answer {input:?}: expected one of a, b, c, d")]
pub struct InvalidChoice {
    pub input: String,
}
