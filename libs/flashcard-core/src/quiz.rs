//! Randomized selection for review sessions and multiple-choice quizzes.

use crate::error::InvalidChoice;
use crate::store::FlashcardStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Labels shown next to each choice, in display order.
pub const CHOICE_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Number of terms drawn in addition to the correct answer.
const DISTRACTORS: usize = 3;

/// Number of items a session covers when the user asks for `requested`.
///
/// Negative requests cover nothing.
pub fn session_size(requested: i64, available: usize) -> usize {
    usize::try_from(requested).map_or(0, |n| n.min(available))
}

/// Shuffle `terms` and keep the first `count`. No term appears twice.
pub fn select_terms<R: Rng + ?Sized>(mut terms: Vec<String>, count: usize, rng: &mut R) -> Vec<String> {
    terms.shuffle(rng);
    terms.truncate(count);
    terms
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub definition: String,
    pub answer: String,
    /// Four terms in display order. May contain duplicates.
    pub choices: Vec<String>,
}

impl QuizQuestion {
    /// Build a question for `answer`.
    ///
    /// Distractors are drawn with replacement from every term in the store, so
    /// they can repeat and can include the answer itself. Returns `None` if
    /// `answer` is not in the store.
    pub fn build<R: Rng + ?Sized>(store: &FlashcardStore, answer: &str, rng: &mut R) -> Option<Self> {
        let definition = store.get(answer)?.definition.clone();
        let terms = store.terms();

        let mut choices: Vec<String> = (0..DISTRACTORS)
            .map(|_| terms[rng.random_range(0..terms.len())].clone())
            .collect();
        choices.push(answer.to_string());
        choices.shuffle(rng);

        Some(Self {
            definition,
            answer: answer.to_string(),
            choices,
        })
    }

    /// Labelled choices, e.g. `('a', "cat")`.
    pub fn labelled(&self) -> impl Iterator<Item = (char, &str)> {
        CHOICE_LABELS
            .iter()
            .copied()
            .zip(self.choices.iter().map(String::as_str))
    }

    /// Resolve a typed letter (case-insensitive) to the chosen term.
    pub fn choice(&self, input: &str) -> Result<&str, InvalidChoice> {
        let invalid = || InvalidChoice {
            input: input.to_string(),
        };

        let lowered = input.to_lowercase();
        let mut chars = lowered.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let index = (letter as u32)
            .checked_sub('a' as u32)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(invalid)?;

        self.choices.get(index).map(String::as_str).ok_or_else(invalid)
    }

    /// Whether the typed letter picks the correct term.
    ///
    /// A duplicated answer counts wherever it appears.
    pub fn is_correct(&self, input: &str) -> Result<bool, InvalidChoice> {
        Ok(self.choice(input)? == self.answer)
    }
}
