//! Per-letter feedback status
//!
//! A status describes what is known about one letter in one cell, or (when
//! aggregated over the board) what is known about a letter overall.

use std::fmt;

/// Feedback status of a single letter
///
/// Ordered by information value: `Empty < Miss < Present < Hit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Not yet filled or not yet scored
    #[default]
    Empty,
    /// Letter is in the secret at exactly this position (green)
    Hit,
    /// Letter is in the secret at another position (yellow)
    Present,
    /// Letter is not in the secret, or every occurrence is already accounted for (gray)
    Miss,
}

impl LetterStatus {
    /// Priority used when merging observations: higher wins
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Miss => 1,
            Self::Present => 2,
            Self::Hit => 3,
        }
    }

    /// Return whichever of the two statuses carries more information
    ///
    /// Merging never downgrades: `Hit.best(Miss)` is still `Hit`.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::Miss.best(LetterStatus::Present), LetterStatus::Present);
    /// assert_eq!(LetterStatus::Hit.best(LetterStatus::Miss), LetterStatus::Hit);
    /// ```
    #[inline]
    #[must_use]
    pub const fn best(self, other: Self) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// Whether the status comes from a scored guess
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
            Self::Empty => '▫',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Hit => "hit",
            Self::Present => "present",
            Self::Miss => "miss",
        };
        f.write_str(name)
    }
}
