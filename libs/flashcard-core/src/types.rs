//! Core types for the flashcard application.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single flashcard, keyed by its term in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub definition: String,
    #[serde(default)]
    pub incorrect_count: u64,
    /// Fields other than the two above, kept so they survive a save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Flashcard {
    /// Create a card with a fresh incorrect count.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            incorrect_count: 0,
            extra: Map::new(),
        }
    }
}

/// Which side of the card is shown first during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyDirection {
    /// Show the term, then reveal the definition. No scoring.
    TermFirst,
    /// Show the definition and ask for the term.
    DefinitionFirst,
}

impl StudyDirection {
    /// Parse the menu value ("1" or "2").
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::TermFirst),
            "2" => Some(Self::DefinitionFirst),
            _ => None,
        }
    }
}

/// Outcome of a definition-recall attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall {
    Correct,
    /// The guess missed; carries the term's incorrect count after the miss.
    Incorrect { incorrect_count: u64 },
}
