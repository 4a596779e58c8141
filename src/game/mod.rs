//! The puzzle engine
//!
//! A `Game` holds one secret, a six-row board and the index of the row being
//! typed. Front ends drive it with `Action`s and read the board, the derived
//! `GameStatus` and the per-letter `LetterKnowledge` back out.

mod action;
mod engine;
mod error;
mod grid;
mod knowledge;
mod stats;

pub use action::{Action, Event};
pub use engine::{Game, GameStatus, Submission};
pub use error::GuessError;
pub use grid::{Cell, Grid, MAX_ATTEMPTS, Row};
pub use knowledge::LetterKnowledge;
pub use stats::Statistics;
