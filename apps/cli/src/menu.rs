//! Main menu options.

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    Review,
    ReviewIncorrect,
    Quiz,
    ViewScores,
    List,
    Exit,
}

impl MenuChoice {
    /// All options in menu order.
    pub const ALL: [MenuChoice; 9] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::Review,
        Self::ReviewIncorrect,
        Self::Quiz,
        Self::ViewScores,
        Self::List,
        Self::Exit,
    ];

    /// Parse the user's selection ("1" to "9").
    pub fn from_input(input: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| input == choice.number().to_string())
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Flashcard",
            Self::Edit => "Edit Flashcard",
            Self::Delete => "Delete Flashcard",
            Self::Review => "Review Flashcards",
            Self::ReviewIncorrect => "Review Incorrect Flashcards",
            Self::Quiz => "Take a Quiz",
            Self::ViewScores => "View Scores",
            Self::List => "List Flashcards",
            Self::Exit => "Exit",
        }
    }
}
