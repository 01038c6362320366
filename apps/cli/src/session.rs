//! Interactive study session: menu loop and the operations it dispatches to.

use crate::console::Console;
use crate::error::Result;
use crate::menu::MenuChoice;
use flashcard_core::{
    select_terms, session_size, FlashcardRepository, FlashcardStore, HighIncorrectView,
    QuizQuestion, Recall, ScoreLog, ScoreRepository, StudyDirection,
};
use rand::Rng;
use std::io::{BufRead, Write};

/// Owns all in-memory state for the lifetime of the process.
pub struct Session<R, W, S, G> {
    console: Console<R, W>,
    repo: S,
    rng: G,
    store: FlashcardStore,
    high_incorrect: HighIncorrectView,
    scores: ScoreLog,
}

impl<R, W, S, G> Session<R, W, S, G>
where
    R: BufRead,
    W: Write,
    S: FlashcardRepository + ScoreRepository,
    G: Rng,
{
    /// Start a session, loading flashcards from the repository.
    ///
    /// A missing or malformed flashcard file is reported and the session
    /// starts with an empty store. The high-incorrect view is derived from the
    /// loaded store, so missed cards from earlier runs can be reviewed at once.
    pub fn new(console: Console<R, W>, repo: S, rng: G) -> Result<Self> {
        let mut session = Self {
            console,
            repo,
            rng,
            store: FlashcardStore::new(),
            high_incorrect: HighIncorrectView::default(),
            scores: ScoreLog::new(),
        };

        match session.repo.load_flashcards() {
            Ok(store) => session.store = store,
            Err(e) => {
                tracing::warn!(error = %e, "starting with empty flashcard store");
                session.console.say(format!("Error loading flashcards: {e}"))?;
            }
        }
        session.high_incorrect = session.store.high_incorrect();

        Ok(session)
    }

    pub fn store(&self) -> &FlashcardStore {
        &self.store
    }

    pub fn high_incorrect(&self) -> &HighIncorrectView {
        &self.high_incorrect
    }

    pub fn scores(&self) -> &ScoreLog {
        &self.scores
    }

    pub fn repository(&self) -> &S {
        &self.repo
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the main menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        self.load_scores()?;

        loop {
            self.show_menu()?;
            let input = self.console.prompt("Choose an option: ")?;
            let Some(choice) = MenuChoice::from_input(&input) else {
                self.console.say("Invalid option. Please try again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu selection");
            match choice {
                MenuChoice::Add => self.add_flashcard()?,
                MenuChoice::Edit => self.edit_flashcard()?,
                MenuChoice::Delete => self.delete_flashcard()?,
                MenuChoice::Review => self.review_flashcards()?,
                MenuChoice::ReviewIncorrect => self.review_incorrect_flashcards()?,
                MenuChoice::Quiz => self.quiz()?,
                MenuChoice::ViewScores => self.view_scores()?,
                MenuChoice::List => self.list_flashcards()?,
                MenuChoice::Exit => return Ok(()),
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say("\nFlashcard App")?;
        for choice in MenuChoice::ALL {
            self.console
                .say(format_args!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    /// Load the score log. A malformed log is reported and replaced by an empty one.
    pub fn load_scores(&mut self) -> Result<()> {
        match self.repo.load_scores() {
            Ok(scores) => self.scores = scores,
            Err(e) => {
                tracing::warn!(error = %e, "starting with empty score log");
                self.console.say(format!("Error loading scores: {e}"))?;
                self.scores = ScoreLog::new();
            }
        }
        Ok(())
    }

    pub fn add_flashcard(&mut self) -> Result<()> {
        let term = self.console.prompt("Enter the term: ")?;
        let definition = self.console.prompt("Enter the definition: ")?;
        tracing::debug!(%term, "adding flashcard");
        self.store.add(term, definition);
        self.repo.save_flashcards(&self.store)?;
        self.console.say("Flashcard saved!")
    }

    pub fn edit_flashcard(&mut self) -> Result<()> {
        let term = self.console.prompt("Enter the term you want to edit: ")?;
        if !self.store.contains(&term) {
            return self.console.say("Term not found.");
        }

        let definition = self.console.prompt("Enter the new definition: ")?;
        self.store.edit(&term, definition);
        self.repo.save_flashcards(&self.store)?;
        self.console.say("Flashcard updated!")
    }

    pub fn delete_flashcard(&mut self) -> Result<()> {
        let term = self.console.prompt("Enter the term you want to delete: ")?;
        if self.store.delete(&term).is_none() {
            return self.console.say("Term not found.");
        }

        self.repo.save_flashcards(&self.store)?;
        self.console.say("Flashcard deleted!")
    }

    /// Review a shuffled selection of cards in either direction.
    ///
    /// Definition-first misses increment the card's incorrect count. The store
    /// and the high-incorrect view are saved afterwards, even when the chosen
    /// direction was invalid.
    pub fn review_flashcards(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.say("No flashcards available.");
        }

        let direction = self.console.prompt(
            "Do you want to (1) study terms or (2) study definitions? Enter 1 or 2: ",
        )?;
        let requested = self
            .console
            .prompt_number("How many flashcards do you want to review? ")?;

        let count = session_size(requested, self.store.len());
        let terms = select_terms(self.store.terms(), count, &mut self.rng);

        for term in &terms {
            match StudyDirection::from_choice(&direction) {
                Some(StudyDirection::TermFirst) => self.show_term_first(term)?,
                Some(StudyDirection::DefinitionFirst) => self.recall_term(term)?,
                None => {
                    self.console.say("Invalid option. Please start again.")?;
                    break;
                }
            }
        }

        self.repo.save_flashcards(&self.store)?;
        self.refresh_high_incorrect()
    }

    fn show_term_first(&mut self, term: &str) -> Result<()> {
        let Some(card) = self.store.get(term) else {
            return Ok(());
        };
        let definition = card.definition.clone();

        self.console.say(format_args!("Term: {term}"))?;
        self.console.prompt("Press Enter to see the definition...")?;
        self.console.say(format_args!("Definition: {definition}\n"))
    }

    fn recall_term(&mut self, term: &str) -> Result<()> {
        let Some(card) = self.store.get(term) else {
            return Ok(());
        };
        let definition = card.definition.clone();

        self.console.say(format_args!("Definition: {definition}"))?;
        let guess = self.console.prompt("What is the term? ")?;
        let recall = self.store.record_recall(term, &guess);
        self.report_recall(term, recall)
    }

    fn report_recall(&mut self, term: &str, recall: Option<Recall>) -> Result<()> {
        match recall {
            Some(Recall::Correct) => self.console.say("Correct!\n"),
            Some(Recall::Incorrect { incorrect_count }) => {
                self.console
                    .say(format_args!("Incorrect! The correct term is: {term}"))?;
                self.console.say(format_args!(
                    "This term has been answered incorrectly {incorrect_count} times.\n"
                ))
            }
            None => Ok(()),
        }
    }

    fn refresh_high_incorrect(&mut self) -> Result<()> {
        self.high_incorrect = self.store.high_incorrect();
        tracing::debug!(cards = self.high_incorrect.len(), "refreshed high-incorrect view");
        self.repo.save_high_incorrect(&self.high_incorrect)?;
        Ok(())
    }

    /// Definition-first review over the high-incorrect snapshot.
    ///
    /// Read-only: misses are reported but neither counted nor saved.
    pub fn review_incorrect_flashcards(&mut self) -> Result<()> {
        if self.high_incorrect.is_empty() {
            return self.console.say("No flashcards with incorrect answers.");
        }

        let available = self.high_incorrect.len();
        let mut terms = select_terms(self.high_incorrect.terms(), available, &mut self.rng);

        let requested = self
            .console
            .prompt_number("How many incorrect flashcards do you want to review? ")?;
        terms.truncate(session_size(requested, available));

        for term in &terms {
            let Some(card) = self.high_incorrect.get(term) else {
                continue;
            };
            let definition = card.definition.clone();

            self.console.say(format_args!("Definition: {definition}"))?;
            let guess = self.console.prompt("What is the term? ")?;
            let recall = self.high_incorrect.check_recall(term, &guess);
            self.report_recall(term, recall)?;
        }

        Ok(())
    }

    /// Multiple-choice quiz. The score is appended to the log and saved.
    ///
    /// An answer other than a, b, c or d ends the session with an error.
    pub fn quiz(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.say("No flashcards available for quizzing.");
        }

        let requested = self
            .console
            .prompt_number("How many questions do you want in the quiz? ")?;
        let asked = session_size(requested, self.store.len());
        let terms = select_terms(self.store.terms(), asked, &mut self.rng);

        let mut score: u32 = 0;
        for term in &terms {
            let Some(question) = QuizQuestion::build(&self.store, term, &mut self.rng) else {
                continue;
            };

            self.console
                .say(format_args!("\nDefinition: {}", question.definition))?;
            for (label, choice) in question.labelled() {
                self.console.say(format_args!("{label}) {choice}"))?;
            }

            let answer = self
                .console
                .prompt("Select the correct term (a, b, c, d): ")?;
            if question.is_correct(&answer)? {
                self.console.say("Correct!")?;
                score += 1;
            } else {
                self.console.say(format_args!(
                    "Incorrect! The correct term is: {}",
                    question.answer
                ))?;
            }
        }

        self.scores.push(score);
        self.repo.save_scores(&self.scores)?;
        tracing::info!(score, asked, "quiz finished");
        self.console.say(format_args!("\nYour score: {score}/{asked}"))
    }

    pub fn view_scores(&mut self) -> Result<()> {
        if self.scores.is_empty() {
            return self.console.say("No scores available.");
        }

        self.console.say("\nScores:")?;
        for (i, score) in self.scores.iter().enumerate() {
            self.console.say(format_args!("Attempt {}: {score}", i + 1))?;
        }
        Ok(())
    }

    pub fn list_flashcards(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.say("No flashcards available.");
        }

        self.console.say("\nFlashcards:")?;
        for (term, card) in self.store.iter() {
            self.console
                .say(format_args!("Term: {term} | Definition: {}", card.definition))?;
        }
        Ok(())
    }
}
