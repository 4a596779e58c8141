//! Guess scoring and feedback representation
//!
//! Feedback is the row of five statuses produced by scoring a guess against
//! the secret word:
//! - Hit (green): letter in the correct position
//! - Present (yellow): letter in the word, wrong position
//! - Miss (gray): letter not in the word, or all its occurrences already used

use super::{LetterStatus, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All hits (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Hit; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: a letter
    /// is never reported as Hit or Present more times than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact match as Hit and consume it from the pool
    /// 2. Second pass: mark remaining letters Present while the pool still holds
    ///    an unconsumed occurrence, otherwise Miss
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("ellel").unwrap();
    /// let secret = Word::new("level").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.to_string(), "🟨🟨⬜🟩🟩");
    /// assert_eq!(feedback.status_at(2), LetterStatus::Miss);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Miss; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: Mark hits (exact position matches)
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == secret.chars()[i] {
                result[i] = LetterStatus::Hit;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = secret_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark present letters from whatever the hits left over
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != LetterStatus::Hit {
                let letter = guess.chars()[i];
                if let Some(count) = secret_available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all hits)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of hit squares
    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.count(LetterStatus::Hit)
    }

    /// Count the number of present squares
    #[must_use]
    pub fn count_presents(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for hit
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for miss
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [LetterStatus::Miss; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Hit,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Miss,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
