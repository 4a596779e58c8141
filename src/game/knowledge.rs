//! Best-known status per alphabet letter
//!
//! Drives the keyboard coloring. Derived from the board on demand.

use super::grid::Grid;
use crate::core::LetterStatus;

const ALPHABET: usize = 26;

/// Best status observed for each letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterKnowledge([LetterStatus; ALPHABET]);

impl Default for LetterKnowledge {
    fn default() -> Self {
        Self([LetterStatus::Empty; ALPHABET])
    }
}

impl LetterKnowledge {
    /// Fold every scored cell of the board into per-letter knowledge
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut knowledge = Self::default();
        for row in grid.rows().iter().filter(|row| row.is_scored()) {
            for cell in row.cells() {
                if let Some(letter) = cell.letter() {
                    knowledge.record(letter, cell.status());
                }
            }
        }
        knowledge
    }

    /// Upgrade a letter's status; lower-ranked observations are ignored
    pub fn record(&mut self, letter: char, status: LetterStatus) {
        if let Some(slot) = index_of(letter).map(|i| &mut self.0[i]) {
            *slot = slot.best(status);
        }
    }

    /// Status for `letter` (case-insensitive); non-letters are always Empty
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        index_of(letter).map_or(LetterStatus::Empty, |i| self.0[i])
    }

    /// All letters in alphabetical order with their status
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('a'..='z').zip(self.0.iter().copied())
    }
}

fn index_of(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| (lower as u8 - b'a') as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_empty() {
        let knowledge = LetterKnowledge::default();
        assert_eq!(knowledge.iter().count(), 26);
        assert!(knowledge.iter().all(|(_, s)| s == LetterStatus::Empty));
    }

    #[test]
    fn record_upgrades_only() {
        let mut knowledge = LetterKnowledge::default();

        knowledge.record('e', LetterStatus::Miss);
        assert_eq!(knowledge.get('e'), LetterStatus::Miss);

        knowledge.record('e', LetterStatus::Hit);
        knowledge.record('e', LetterStatus::Present);
        knowledge.record('e', LetterStatus::Miss);
        assert_eq!(knowledge.get('e'), LetterStatus::Hit);
    }

    #[test]
    fn lookup_is_case_insensitive_and_ignores_non_letters() {
        let mut knowledge = LetterKnowledge::default();
        knowledge.record('Q', LetterStatus::Present);
        knowledge.record('1', LetterStatus::Hit);

        assert_eq!(knowledge.get('q'), LetterStatus::Present);
        assert_eq!(knowledge.get('Q'), LetterStatus::Present);
        assert_eq!(knowledge.get('1'), LetterStatus::Empty);
    }

    #[test]
    fn unscored_rows_are_ignored() {
        let grid = Grid::new();
        assert_eq!(LetterKnowledge::from_grid(&grid), LetterKnowledge::default());
    }
}
