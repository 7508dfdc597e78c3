//! Single guess check
//!
//! Evaluates one guess against a secret without starting a session.

use crate::core::{Guess, Word, score};
use anyhow::{Context, Result};

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use modle::commands::check_guess;
///
/// let guess = check_guess("aloha", "modal").unwrap();
/// assert_eq!(guess.feedback.to_emoji(), "🟨🟨🟨⬜⬜");
/// ```
pub fn check_guess(guess: &str, secret: &str) -> Result<Guess> {
    let secret = Word::new(secret).context("Invalid secret word")?;
    let guess = Word::new(guess).context("Invalid guess")?;
    let scored = score(guess, &secret)?;
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_correct_word() {
        let guess = check_guess("MODAL", "modal").unwrap();
        assert!(guess.is_solved());
    }

    #[test]
    fn check_reports_verdicts() {
        let guess = check_guess("about", "modal").unwrap();
        assert_eq!(guess.feedback.to_emoji(), "🟨⬜🟨⬜⬜");
    }

    #[test]
    fn check_length_mismatch() {
        let err = check_guess("mod", "modal").unwrap_err();
        assert!(err.to_string().contains("expected 5"));
    }

    #[test]
    fn check_invalid_guess() {
        let err = check_guess("m0dal", "modal").unwrap_err();
        assert_eq!(err.to_string(), "Invalid guess");
    }
}
