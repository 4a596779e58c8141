//! Abstract player input
//!
//! Front ends translate their raw events (key codes, typed lines) into
//! actions; the engine only ever sees these.

/// One player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a letter into the current row
    Letter(char),
    /// Erase the last typed letter
    Delete,
    /// Submit the current row as a guess
    Submit,
    /// Throw the current game away and start a new one
    Restart,
    /// Show the secret word
    Reveal,
}

impl Action {
    /// Map a typed character to a letter action
    ///
    /// Only ASCII letters map; everything else is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordfinder::game::Action;
    ///
    /// assert_eq!(Action::from_char('Q'), Some(Action::Letter('q')));
    /// assert_eq!(Action::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_lowercase()))
    }
}

/// What applying an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing changed (full row, empty row, finished game, bad character)
    Ignored,
    /// The current row was edited
    Edited,
    /// The row was scored
    Submitted(super::Submission),
    /// A new game began
    Restarted,
    /// The secret word, on request
    Revealed(String),
}
