//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::{LetterKnowledge, Row};
use colored::{ColoredString, Colorize};

/// Keyboard layout used by both front ends
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format one letter as a colored tile like " A "
#[must_use]
pub fn tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    let text = text.as_str();
    match status {
        LetterStatus::Hit => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Miss => text.white().on_bright_black(),
        LetterStatus::Empty => text.normal(),
    }
}

/// Format a board row as tiles
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| tile(cell.letter(), cell.status()).to_string())
        .collect()
}

/// Format a guess with its feedback as tiles
#[must_use]
pub fn format_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&c, &status)| tile(Some(char::from(c)), status).to_string())
        .collect()
}

/// Format the keyboard colored by letter knowledge, one string per row
#[must_use]
pub fn format_keyboard(knowledge: &LetterKnowledge) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|c| tile(Some(c), knowledge.get(c)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        plain();
        assert_eq!(tile(Some('a'), LetterStatus::Hit).to_string(), " A ");
        assert_eq!(tile(None, LetterStatus::Empty).to_string(), " _ ");
    }

    #[test]
    fn format_guess_lays_out_tiles() {
        plain();
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("--G-G").unwrap();
        assert_eq!(format_guess(&guess, &feedback), " C  R  A  N  E ");
    }

    #[test]
    fn format_row_pads_empty_cells() {
        plain();
        let row = Row::default();
        assert_eq!(format_row(&row), " _ ".repeat(5));
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    #[test]
    fn format_keyboard_indents_rows() {
        plain();
        let rows = format_keyboard(&LetterKnowledge::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("   A "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 6.0, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6.0, 6.0, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3.0, 6.0, 6), "███░░░");
    }
}
