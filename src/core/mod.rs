//! Core domain types for the word game
//!
//! Words, per-letter statuses and the scoring rule that turns a guess into
//! feedback. Nothing here knows about turns, boards or input.

mod feedback;
mod status;
mod word;

pub use feedback::Feedback;
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
