//! Errors from submitting a guess

use std::fmt;

/// Reason a submission was rejected
///
/// None of these change the game state; they are surfaced as transient notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Fewer than five letters in the current row
    IncompleteGuess,
    /// The row spells a word that is not in the dictionary
    UnknownWord(String),
    /// The game has already been won or lost
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => write!(f, "Not enough letters"),
            Self::UnknownWord(word) => {
                write!(f, "Not in word list: {}", word.to_uppercase())
            }
            Self::GameOver => write!(f, "Game is over"),
        }
    }
}

impl std::error::Error for GuessError {}
