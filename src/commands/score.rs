//! One-shot scoring command
//!
//! Scores a guess against a given secret without playing a game.

use crate::core::{Feedback, Word};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let feedback = Feedback::calculate(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
