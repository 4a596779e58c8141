//! Game engine: the puzzle state machine
//!
//! Owns the secret, the board and the attempt counter. Everything else the
//! front ends show (game status, keyboard colors) is derived from these.

use super::action::{Action, Event};
use super::error::GuessError;
use super::grid::{Grid, MAX_ATTEMPTS, Row};
use super::knowledge::LetterKnowledge;
use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use rand::Rng;
use tracing::{debug, info};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The word that was guessed
    pub guess: String,
    pub feedback: Feedback,
    /// 1-based number of this guess
    pub attempt: usize,
    /// Status after the guess
    pub status: GameStatus,
    /// The secret, present only when this guess lost the game
    pub answer: Option<String>,
}

/// A single puzzle
///
/// Borrows its dictionary and owns the random source used to pick secrets,
/// so independent games never share state.
pub struct Game<'a, D: Dictionary, R: Rng> {
    dictionary: &'a D,
    rng: R,
    secret: Word,
    grid: Grid,
    attempt: usize,
}

impl<'a, D: Dictionary, R: Rng> Game<'a, D, R> {
    /// Start a game with a randomly chosen secret
    pub fn new(dictionary: &'a D, mut rng: R) -> Self {
        let secret = dictionary.random_word(&mut rng).clone();
        let game = Self {
            dictionary,
            rng,
            secret,
            grid: Grid::new(),
            attempt: 0,
        };
        debug!(words = dictionary.len(), "new game");
        game
    }

    /// Start a game with a known secret
    #[cfg(test)]
    pub(crate) fn with_secret(dictionary: &'a D, rng: R, secret: &str) -> Self {
        let mut game = Self::new(dictionary, rng);
        game.secret = Word::new(secret).expect("test secret must be a valid word");
        game
    }

    /// Discard the current game and start over with a fresh secret
    pub fn new_game(&mut self) {
        self.secret = self.dictionary.random_word(&mut self.rng).clone();
        self.grid = Grid::new();
        self.attempt = 0;
        debug!(words = self.dictionary.len(), "new game");
    }

    /// Type a letter into the current row
    ///
    /// Case-insensitive. Returns false (and changes nothing) for non-letters,
    /// a full row or a finished game.
    pub fn input_letter(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || self.status().is_over() {
            return false;
        }
        self.current_row_mut()
            .is_some_and(|row| row.push(ch.to_ascii_lowercase()))
    }

    /// Erase the rightmost letter of the current row
    ///
    /// Returns false for an empty row or a finished game.
    pub fn backspace(&mut self) -> bool {
        if self.status().is_over() {
            return false;
        }
        self.current_row_mut().is_some_and(Row::pop)
    }

    /// Score the current row against the secret
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the game is already won or lost
    /// - `GuessError::IncompleteGuess` if the row has fewer than five letters
    /// - `GuessError::UnknownWord` if the row is not a dictionary word
    ///
    /// A rejected guess leaves the game untouched.
    pub fn submit(&mut self) -> Result<Submission, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::GameOver);
        }

        let attempt = self.attempt;
        let row = self.current_row().ok_or(GuessError::GameOver)?;
        if !row.is_full() {
            debug!(attempt, filled = row.filled(), "incomplete guess rejected");
            return Err(GuessError::IncompleteGuess);
        }

        let text = row.text();
        if !self.dictionary.contains(&text) {
            debug!(attempt, guess = %text, "unknown word rejected");
            return Err(GuessError::UnknownWord(text));
        }
        let guess = Word::new(text).map_err(|_| GuessError::IncompleteGuess)?;

        let feedback = Feedback::calculate(&guess, &self.secret);
        if let Some(row) = self.grid.row_mut(attempt) {
            row.score(&feedback);
        }
        self.attempt += 1;

        let status = self.status();
        debug!(attempt = self.attempt, guess = %guess, %feedback, ?status, "guess scored");
        match status {
            GameStatus::Won => info!(attempts = self.attempt, "game won"),
            GameStatus::Lost => info!(answer = %self.secret, "game lost"),
            GameStatus::InProgress => {}
        }

        Ok(Submission {
            guess: guess.text().to_string(),
            feedback,
            attempt: self.attempt,
            status,
            answer: (status == GameStatus::Lost).then(|| self.secret.text().to_string()),
        })
    }

    /// Apply a front-end action
    ///
    /// # Errors
    /// Propagates `submit` errors for `Action::Submit`.
    pub fn apply(&mut self, action: Action) -> Result<Event, GuessError> {
        let changed = match action {
            Action::Letter(ch) => self.input_letter(ch),
            Action::Delete => self.backspace(),
            Action::Submit => return self.submit().map(Event::Submitted),
            Action::Restart => {
                self.new_game();
                return Ok(Event::Restarted);
            }
            Action::Reveal => return Ok(Event::Revealed(self.reveal_answer().text().to_string())),
        };
        Ok(if changed { Event::Edited } else { Event::Ignored })
    }

    /// The secret word; available at any time
    #[must_use]
    pub const fn reveal_answer(&self) -> &Word {
        &self.secret
    }

    /// Best status per letter over all scored rows
    #[must_use]
    pub fn letter_knowledge(&self) -> LetterKnowledge {
        LetterKnowledge::from_grid(&self.grid)
    }

    /// Won if the last scored row is perfect, lost once attempts run out
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let won = self
            .attempt
            .checked_sub(1)
            .and_then(|last| self.grid.row(last))
            .and_then(Row::feedback)
            .is_some_and(|feedback| feedback.is_perfect());

        if won {
            GameStatus::Won
        } else if self.attempt >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Index of the row being edited (equals `MAX_ATTEMPTS` when exhausted)
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// The editable row, if the board has one left
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        self.grid.row(self.attempt)
    }

    fn current_row_mut(&mut self) -> Option<&mut Row> {
        self.grid.row_mut(self.attempt)
    }
}
