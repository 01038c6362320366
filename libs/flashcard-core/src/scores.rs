//! Append-only log of quiz scores.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry per completed quiz, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLog {
    scores: Vec<u32>,
}

impl ScoreLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate persisted JSON (an array of non-negative integers).
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(items) = value else {
            return Err(LoadError::NotAScoreList);
        };

        let scores = items
            .iter()
            .map(|item| item.as_u64().and_then(|n| u32::try_from(n).ok()))
            .collect::<Option<Vec<_>>>()
            .ok_or(LoadError::NotAScoreList)?;

        Ok(Self { scores })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn push(&mut self, score: u32) {
        self.scores.push(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn last(&self) -> Option<u32> {
        self.scores.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.scores.iter().copied()
    }
}

impl From<Vec<u32>> for ScoreLog {
    fn from(scores: Vec<u32>) -> Self {
        Self { scores }
    }
}
