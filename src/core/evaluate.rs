//! Guess evaluation against the secret

use super::{Feedback, Guess, Verdict, Word};
use thiserror::Error;

/// Error returned when a guess cannot be compared with the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("Guess has {actual} letters, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Calculate the verdict row when `guess` is played against `secret`
///
/// Duplicate letters are handled so that a letter is never credited more
/// often than it occurs in the secret.
///
/// # Algorithm
/// 1. First pass: mark exact position matches Correct and remove them from the
///    pool of unclaimed secret letters
/// 2. Second pass, left to right: mark remaining letters Present while the
///    pool still holds a copy, otherwise Absent
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the lengths differ.
///
/// # Examples
/// ```
/// use modle::core::{evaluate, Word};
///
/// let secret = Word::new("modal").unwrap();
/// let guess = Word::new("aloha").unwrap();
/// let feedback = evaluate(&guess, &secret).unwrap();
///
/// // A, L, O each claim one secret letter; the second A finds none left
/// assert_eq!(feedback.to_emoji(), "🟨🟨🟨⬜⬜");
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Feedback, EvaluateError> {
    if guess.len() != secret.len() {
        return Err(EvaluateError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut result = vec![Verdict::Empty; secret.len()];
    let mut unclaimed = secret.letter_counts();

    // First pass: Correct (exact position matches)
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            result[i] = Verdict::Correct;
            if let Some(count) = unclaimed.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Present or Absent for everything not already Correct
    for (i, &letter) in guess.letters().iter().enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }

        result[i] = match unclaimed.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Verdict::Present
            }
            _ => Verdict::Absent,
        };
    }

    Ok(Feedback::new(result))
}

/// Evaluate and pair the verdicts with the guessed word
///
/// # Errors
/// Returns `EvaluateError::LengthMismatch` if the lengths differ.
pub fn score(guess: Word, secret: &Word) -> Result<Guess, EvaluateError> {
    let feedback = evaluate(&guess, secret)?;
    Ok(Guess {
        word: guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn eval(guess: &str, secret: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        evaluate(&guess, &secret).unwrap().to_emoji()
    }

    #[test]
    fn secret_against_itself_is_all_correct() {
        for word in ["modal", "about", "aaaaa", "zebra", "x"] {
            let w = Word::new(word).unwrap();
            assert!(evaluate(&w, &w).unwrap().is_solved(), "{word}");
        }
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("quiet", "modal"), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn duplicate_letters_credited_left_to_right() {
        // MODAL has a single A: the first A in ALOHA claims it
        let guess = Word::new("aloha").unwrap();
        let secret = Word::new("modal").unwrap();
        let feedback = evaluate(&guess, &secret).unwrap();
        assert_eq!(
            feedback.verdicts(),
            &[
                Verdict::Present,
                Verdict::Present,
                Verdict::Present,
                Verdict::Absent,
                Verdict::Absent,
            ]
        );
    }

    #[test]
    fn correct_claims_before_present() {
        // FLOOR holds two O's: one Correct match, one left for ROBOT's first O
        assert_eq!(eval("robot", "floor"), "🟨🟨⬜🟩⬜");
        // MODAL has one L and one A, so the second copy of each is Absent
        assert_eq!(eval("llama", "modal"), "🟨⬜🟨🟨⬜");
        // Correct match at position 4 wins over the earlier Present candidate
        assert_eq!(eval("lapel", "modal"), "⬜🟨⬜⬜🟩");
    }

    #[test]
    fn example_from_classic_game() {
        assert_eq!(eval("crane", "slate"), "⬜⬜🟩⬜🟩");
        assert_eq!(eval("speed", "erase"), "🟨⬜🟨🟨⬜");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let secret = Word::new("modal").unwrap();
        for guess in ["m", "moda", "modals", "abstract"] {
            let guess = Word::new(guess).unwrap();
            assert_eq!(
                evaluate(&guess, &secret),
                Err(EvaluateError::LengthMismatch {
                    expected: 5,
                    actual: guess.len(),
                })
            );
        }
    }

    #[test]
    fn present_plus_correct_never_exceeds_secret_count() {
        let secret = Word::new("modal").unwrap();
        let secret_counts = secret.letter_counts();

        for guess in ["aaaaa", "llama", "dodos", "mamma", "ooooo", "aloha"] {
            let guess_word = Word::new(guess).unwrap();
            let feedback = evaluate(&guess_word, &secret).unwrap();

            let mut credited: FxHashMap<u8, usize> = FxHashMap::default();
            for (&letter, &verdict) in guess_word.letters().iter().zip(feedback.verdicts()) {
                if matches!(verdict, Verdict::Correct | Verdict::Present) {
                    *credited.entry(letter).or_insert(0) += 1;
                }
            }

            for (letter, count) in credited {
                assert!(
                    count <= secret_counts.get(&letter).copied().unwrap_or(0),
                    "{guess}: letter {} over-credited",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn score_pairs_word_and_feedback() {
        let secret = Word::new("modal").unwrap();
        let guess = score(Word::new("about").unwrap(), &secret).unwrap();
        assert_eq!(guess.word.text(), "ABOUT");
        assert_eq!(guess.feedback.len(), 5);
        assert!(!guess.is_solved());
    }
}
