//! Wordfinder
//!
//! A Wordle-style guessing game: find the hidden five-letter word in six tries,
//! guided by per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordfinder::dictionary::WordList;
//! use wordfinder::game::{Game, GameStatus};
//!
//! let dictionary = WordList::embedded().unwrap();
//! let mut game = Game::new(&dictionary, StdRng::seed_from_u64(7));
//!
//! for ch in game.reveal_answer().text().to_string().chars() {
//!     game.input_letter(ch);
//! }
//! let submission = game.submit().unwrap();
//! assert_eq!(submission.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
