//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not 5 ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordfinder::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordfinder::dictionary::loader::words_from_slice;
/// use wordfinder::dictionary::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_normalizes_and_skips() {
        let words = parse_lines("Crane\n\n  slate  \nno\nab1de\nLEVEL\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "level"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path =
            std::env::temp_dir().join(format!("wordfinder-loader-{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }
}
