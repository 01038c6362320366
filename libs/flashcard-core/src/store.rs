//! In-memory flashcard store and the derived high-incorrect view.
//!
//! # Format
//! ```json
//! {
//!   "cat": { "definition": "a feline", "incorrect_count": 0 },
//!   "dog": { "definition": "a canine", "incorrect_count": 2 }
//! }
//! ```
//!
//! `incorrect_count` may be omitted and defaults to zero; any non-negative
//! whole number is accepted, including `2.0`. Other fields are kept as they
//! are. Every other shape is rejected with a [`LoadError`] naming the
//! offending term.

use crate::error::LoadError;
use crate::types::{Flashcard, Recall};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// All flashcards, keyed by term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashcardStore {
    cards: BTreeMap<String, Flashcard>,
}

impl FlashcardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate persisted JSON.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(entries) = value else {
            return Err(LoadError::NotAMapping);
        };

        let mut cards = BTreeMap::new();
        for (term, entry) in entries {
            let card = validate_entry(&term, entry)?;
            cards.insert(term, card);
        }

        Ok(Self { cards })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Insert a card, replacing any existing card for the term.
    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.cards.insert(term.into(), Flashcard::new(definition));
    }

    /// Replace the definition of an existing card. Returns false if the term is unknown.
    pub fn edit(&mut self, term: &str, definition: impl Into<String>) -> bool {
        match self.cards.get_mut(term) {
            Some(card) => {
                card.definition = definition.into();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, term: &str) -> Option<Flashcard> {
        self.cards.remove(term)
    }

    pub fn get(&self, term: &str) -> Option<&Flashcard> {
        self.cards.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Terms in store order (sorted).
    pub fn terms(&self) -> Vec<String> {
        self.cards.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Flashcard)> {
        self.cards.iter()
    }

    /// Check a guess against `term` by exact string equality, counting a miss.
    ///
    /// Returns `None` if the term is not in the store.
    pub fn record_recall(&mut self, term: &str, guess: &str) -> Option<Recall> {
        let card = self.cards.get_mut(term)?;
        if guess == term {
            return Some(Recall::Correct);
        }
        card.incorrect_count = card.incorrect_count.saturating_add(1);
        Some(Recall::Incorrect {
            incorrect_count: card.incorrect_count,
        })
    }

    /// Snapshot of every card that has been missed at least once.
    pub fn high_incorrect(&self) -> HighIncorrectView {
        let cards = self
            .cards
            .iter()
            .filter(|(_, card)| card.incorrect_count > 0)
            .map(|(term, card)| (term.clone(), card.clone()))
            .collect();
        HighIncorrectView { cards }
    }
}

fn validate_entry(term: &str, entry: Value) -> Result<Flashcard, LoadError> {
    let malformed = |reason: &str| LoadError::MalformedEntry {
        term: term.to_string(),
        reason: reason.to_string(),
    };

    let Value::Object(mut fields) = entry else {
        return Err(malformed("entry is not an object"));
    };

    let definition = match fields.remove("definition") {
        Some(Value::String(definition)) => definition,
        Some(_) => return Err(malformed("\"definition\" is not a string")),
        None => return Err(malformed("missing \"definition\" field")),
    };

    let incorrect_count = incorrect_count(&mut fields)
        .ok_or_else(|| malformed("\"incorrect_count\" is not a non-negative integer"))?;

    Ok(Flashcard {
        definition,
        incorrect_count,
        extra: fields,
    })
}

fn incorrect_count(fields: &mut Map<String, Value>) -> Option<u64> {
    let Some(value) = fields.remove("incorrect_count") else {
        return Some(0);
    };
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64)
}

/// Read-only snapshot of the cards with `incorrect_count > 0`.
///
/// Regenerated from the store after every review; never mutated on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HighIncorrectView {
    cards: BTreeMap<String, Flashcard>,
}

impl HighIncorrectView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn get(&self, term: &str) -> Option<&Flashcard> {
        self.cards.get(term)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn terms(&self) -> Vec<String> {
        self.cards.keys().cloned().collect()
    }

    /// Check a guess without touching any counter.
    ///
    /// A miss reports the count captured in the snapshot.
    pub fn check_recall(&self, term: &str, guess: &str) -> Option<Recall> {
        let card = self.cards.get(term)?;
        if guess == term {
            Some(Recall::Correct)
        } else {
            Some(Recall::Incorrect {
                incorrect_count: card.incorrect_count,
            })
        }
    }
}
