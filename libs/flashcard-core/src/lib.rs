//! Core flashcard library used by the `flashcards` command-line app.
//!
//! Provides:
//! - Flashcard store with JSON schema validation
//! - High-incorrect view and append-only score log
//! - Review and multiple-choice quiz selection
//! - Repositories for persisting state (JSON files, in-memory)

pub mod error;
pub mod quiz;
pub mod repository;
pub mod scores;
pub mod store;
pub mod types;

pub use error::{InvalidChoice, LoadError, Result, StorageError};
pub use quiz::{select_terms, session_size, QuizQuestion, CHOICE_LABELS};
pub use repository::{FlashcardRepository, JsonRepository, MemoryRepository, ScoreRepository};
pub use scores::ScoreLog;
pub use store::{FlashcardStore, HighIncorrectView};
pub use types::{Flashcard, Recall, StudyDirection};
