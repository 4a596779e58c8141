//! Board of attempts
//!
//! Six rows of five cells. Rows are only mutated through the engine, which
//! guarantees that a scored row is never touched again.

use crate::core::{Feedback, LetterStatus, WORD_LENGTH};

/// Maximum number of guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// A single square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<char>,
    status: LetterStatus,
}

impl Cell {
    /// Letter typed into the cell, if any (always lowercase ASCII)
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> LetterStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// One attempt: five cells filled left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// Whether the row has been submitted and scored
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.cells.iter().any(|c| c.status.is_scored())
    }

    /// Letters typed so far, in order
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(Cell::letter).collect()
    }

    /// Feedback of a scored row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.is_scored() {
            return None;
        }
        Some(Feedback::new(self.cells.map(|c| c.status)))
    }

    /// Write `letter` into the first empty cell; false if the row is full
    pub(crate) fn push(&mut self, letter: char) -> bool {
        match self.cells.iter_mut().find(|c| !c.is_filled()) {
            Some(cell) => {
                cell.letter = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the rightmost filled cell; false if the row is empty
    pub(crate) fn pop(&mut self) -> bool {
        match self.cells.iter_mut().rev().find(|c| c.is_filled()) {
            Some(cell) => {
                cell.letter = None;
                true
            }
            None => false,
        }
    }

    pub(crate) fn score(&mut self, feedback: &Feedback) {
        for (cell, &status) in self.cells.iter_mut().zip(feedback.statuses()) {
            cell.status = status;
        }
    }
}

/// The full board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: [Row; MAX_ATTEMPTS],
}

impl Grid {
    /// An all-empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Row at `index`, if within the board
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Every cell of every row, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Whether no cell holds a letter
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(Row::is_empty)
    }
}
