//! Dictionary of playable words
//!
//! The dictionary is both the pool secrets are drawn from and the list a guess
//! must appear in to be accepted. The embedded list is compiled in by the build
//! script; custom lists can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Source of secrets and judge of valid guesses
pub trait Dictionary {
    /// Number of words (always at least one)
    fn len(&self) -> usize;

    /// Whether the dictionary holds no words
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `word` is listed, ignoring case
    fn contains(&self, word: &str) -> bool;

    /// Pick a word uniformly at random
    fn random_word<R: Rng>(&self, rng: &mut R) -> &Word;
}

/// Error building a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// No valid 5-letter word was found
    Empty,
    /// The word list file could not be read
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid 5-letter words"),
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// An ordered, de-duplicated list of words with fast membership lookup
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a word list, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a word list from a file with one word per line
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(loader::load_from_file(path)?)
    }
}

impl Dictionary for WordList {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&word.to_ascii_lowercase())
        } else {
            self.index.contains(word)
        }
    }

    fn random_word<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(loader::words_from_slice(words)).unwrap()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_loads_every_word() {
        let dict = WordList::embedded().unwrap();
        assert_eq!(dict.len(), WORDS_COUNT);
        assert!(dict.contains("crane"));
        assert!(dict.contains("level"));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(WordList::new(Vec::new()), Err(DictionaryError::Empty)));
    }

    #[test]
    fn duplicates_are_dropped() {
        let dict = list(&["crane", "slate", "CRANE", "crane"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("crane"));
        assert!(dict.contains("slate"));
    }

    #[test]
    fn contains_ignores_case() {
        let dict = list(&["crane", "slate"]);
        assert!(dict.contains("crane"));
        assert!(dict.contains("SLATE"));
        assert!(!dict.contains("irate"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn random_word_is_from_list_and_seeded() {
        let dict = list(&["crane", "slate", "irate", "level", "robot"]);

        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = dict.random_word(&mut a);
            assert!(dict.contains(pick.text()));
            assert_eq!(pick, dict.random_word(&mut b));
        }
    }

    #[test]
    fn random_word_covers_list() {
        let dict = list(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(42);

        let seen: FxHashSet<&str> = (0..200)
            .map(|_| dict.random_word(&mut rng).text())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_word_list_always_picks_it() {
        let dict = list(&["level"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(dict.random_word(&mut rng).text(), "level");
    }
}
