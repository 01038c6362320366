//! Repository pattern for persisted state.

use crate::error::{LoadError, Result, StorageError};
use crate::scores::ScoreLog;
use crate::store::{FlashcardStore, HighIncorrectView};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const FLASHCARDS_FILE: &str = "flashcards.json";
pub const HIGH_INCORRECT_FILE: &str = "high_incorrect_flashcards.json";
pub const SCORES_FILE: &str = "scores.json";

/// Repository for flashcard operations.
pub trait FlashcardRepository {
    fn load_flashcards(&self) -> std::result::Result<FlashcardStore, LoadError>;
    fn save_flashcards(&self, store: &FlashcardStore) -> Result<()>;
    fn save_high_incorrect(&self, view: &HighIncorrectView) -> Result<()>;
}

/// Repository for quiz score operations.
pub trait ScoreRepository {
    /// Load the score log. A log that was never written loads as empty.
    fn load_scores(&self) -> std::result::Result<ScoreLog, LoadError>;
    fn save_scores(&self, scores: &ScoreLog) -> Result<()>;
}

/// JSON files in a single data directory, overwritten whole on every save.
#[derive(Debug, Clone)]
pub struct JsonRepository {
    dir: PathBuf,
}

impl JsonRepository {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn flashcards_path(&self) -> PathBuf {
        self.dir.join(FLASHCARDS_FILE)
    }

    pub fn high_incorrect_path(&self) -> PathBuf {
        self.dir.join(HIGH_INCORRECT_FILE)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.dir.join(SCORES_FILE)
    }

    fn read(path: &Path) -> std::result::Result<String, LoadError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::Missing {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    fn write(path: PathBuf, content: String) -> Result<()> {
        fs::write(&path, content).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote file");
        Ok(())
    }
}

impl FlashcardRepository for JsonRepository {
    fn load_flashcards(&self) -> std::result::Result<FlashcardStore, LoadError> {
        let path = self.flashcards_path();
        let store = FlashcardStore::from_json(&Self::read(&path)?)?;
        tracing::debug!(path = %path.display(), cards = store.len(), "loaded flashcards");
        Ok(store)
    }

    fn save_flashcards(&self, store: &FlashcardStore) -> Result<()> {
        Self::write(self.flashcards_path(), store.to_json()?)
    }

    fn save_high_incorrect(&self, view: &HighIncorrectView) -> Result<()> {
        Self::write(self.high_incorrect_path(), view.to_json()?)
    }
}

impl ScoreRepository for JsonRepository {
    fn load_scores(&self) -> std::result::Result<ScoreLog, LoadError> {
        let path = self.scores_path();
        match Self::read(&path) {
            Ok(content) => ScoreLog::from_json(&content),
            Err(LoadError::Missing { .. }) => Ok(ScoreLog::new()),
            Err(e) => Err(e),
        }
    }

    fn save_scores(&self, scores: &ScoreLog) -> Result<()> {
        Self::write(self.scores_path(), scores.to_json()?)
    }
}

/// In-memory repository holding the serialized JSON (for testing).
#[derive(Debug, Default)]
pub struct MemoryRepository {
    flashcards: RefCell<Option<String>>,
    high_incorrect: RefCell<Option<String>>,
    scores: RefCell<Option<String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with raw flashcard JSON.
    pub fn with_flashcards(content: impl Into<String>) -> Self {
        let repo = Self::default();
        repo.flashcards.replace(Some(content.into()));
        repo
    }

    /// Seed the repository with raw score JSON.
    pub fn with_scores(self, content: impl Into<String>) -> Self {
        self.scores.replace(Some(content.into()));
        self
    }

    pub fn flashcards_json(&self) -> Option<String> {
        self.flashcards.borrow().clone()
    }

    pub fn high_incorrect_json(&self) -> Option<String> {
        self.high_incorrect.borrow().clone()
    }

    pub fn scores_json(&self) -> Option<String> {
        self.scores.borrow().clone()
    }
}

impl FlashcardRepository for MemoryRepository {
    fn load_flashcards(&self) -> std::result::Result<FlashcardStore, LoadError> {
        match self.flashcards.borrow().as_deref() {
            Some(content) => FlashcardStore::from_json(content),
            None => Err(LoadError::Missing {
                path: PathBuf::from(FLASHCARDS_FILE),
            }),
        }
    }

    fn save_flashcards(&self, store: &FlashcardStore) -> Result<()> {
        self.flashcards.replace(Some(store.to_json()?));
        Ok(())
    }

    fn save_high_incorrect(&self, view: &HighIncorrectView) -> Result<()> {
        self.high_incorrect.replace(Some(view.to_json()?));
        Ok(())
    }
}

impl ScoreRepository for MemoryRepository {
    fn load_scores(&self) -> std::result::Result<ScoreLog, LoadError> {
        match self.scores.borrow().as_deref() {
            Some(content) => ScoreLog::from_json(content),
            None => Ok(ScoreLog::new()),
        }
    }

    fn save_scores(&self, scores: &ScoreLog) -> Result<()> {
        self.scores.replace(Some(scores.to_json()?));
        Ok(())
    }
}
