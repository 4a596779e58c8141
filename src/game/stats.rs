//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::engine::{GameStatus, Submission};
use super::grid::MAX_ATTEMPTS;

/// Running tally of finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Count a submission if it ended the game
    pub fn record(&mut self, submission: &Submission) {
        match submission.status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(submission.attempt) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn submission(attempt: usize, status: GameStatus) -> Submission {
        Submission {
            guess: "crane".to_string(),
            feedback: Feedback::PERFECT,
            attempt,
            status,
            answer: None,
        }
    }

    #[test]
    fn in_progress_is_not_counted() {
        let mut stats = Statistics::default();
        stats.record(&submission(1, GameStatus::InProgress));
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_and_losses_are_tallied() {
        let mut stats = Statistics::default();
        stats.record(&submission(3, GameStatus::Won));
        stats.record(&submission(4, GameStatus::Won));
        stats.record(&submission(6, GameStatus::Lost));
        stats.record(&submission(3, GameStatus::Won));

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
