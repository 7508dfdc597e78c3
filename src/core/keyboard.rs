//! Keyboard feedback aggregation
//!
//! Folds guess verdicts into the best-known verdict per letter. A letter's
//! stored verdict only ever moves up the dominance order.

use super::{Guess, Verdict};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout, bottom row carries the two action keys
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

/// Best-known verdict per letter across all guesses so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess into the state in place
    pub fn merge(&mut self, guess: &Guess) {
        for (letter, verdict) in guess.letters() {
            let slot = self.keys.entry(letter.to_ascii_uppercase()).or_default();
            *slot = slot.dominant(verdict);
        }
    }

    /// Pure form of [`merge`](Self::merge)
    #[must_use]
    pub fn merged(mut self, guess: &Guess) -> Self {
        self.merge(guess);
        self
    }

    /// Build the state from a full guess history
    #[must_use]
    pub fn from_history(guesses: &[Guess]) -> Self {
        guesses.iter().fold(Self::new(), Self::merged)
    }

    /// Verdict for a letter (either case); unseen letters report `Empty`
    #[must_use]
    pub fn get(&self, letter: u8) -> Verdict {
        self.keys
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Verdict for a key label from [`KEYBOARD_ROWS`]; action keys are always `Empty`
    #[must_use]
    pub fn key_verdict(&self, label: &str) -> Verdict {
        match label.as_bytes() {
            [letter] => self.get(*letter),
            _ => Verdict::Empty,
        }
    }

    /// Number of letters with any feedback
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn guess(word: &str, row: &str) -> Guess {
        Guess {
            word: Word::new(word).unwrap(),
            feedback: Feedback::parse(row).unwrap(),
        }
    }

    #[test]
    fn unseen_letters_are_empty() {
        let state = KeyboardState::new();
        assert_eq!(state.get(b'A'), Verdict::Empty);
        assert!(state.is_empty());
    }

    #[test]
    fn absent_after_correct_stays_correct() {
        let state = KeyboardState::new()
            .merged(&guess("a", "G"))
            .merged(&guess("a", "-"));
        assert_eq!(state.get(b'A'), Verdict::Correct);
    }

    #[test]
    fn correct_after_absent_upgrades() {
        let state = KeyboardState::new()
            .merged(&guess("a", "-"))
            .merged(&guess("a", "G"));
        assert_eq!(state.get(b'A'), Verdict::Correct);
    }

    #[test]
    fn present_does_not_downgrade_correct_within_one_guess() {
        // ALOHA vs a secret with A in first place: first A Correct, second A Absent
        let state = KeyboardState::new().merged(&guess("aloha", "G---Y"));
        assert_eq!(state.get(b'A'), Verdict::Correct);
        assert_eq!(state.get(b'L'), Verdict::Absent);
    }

    #[test]
    fn merge_is_order_independent() {
        let g1 = guess("about", "Y-Y--");
        let g2 = guess("modal", "GGGGG");
        let g3 = guess("lapel", "-Y--G");

        let forward = KeyboardState::from_history(&[g1.clone(), g2.clone(), g3.clone()]);
        let backward = KeyboardState::from_history(&[g3, g2, g1]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn lowercase_lookup() {
        let state = KeyboardState::new().merged(&guess("m", "Y"));
        assert_eq!(state.get(b'm'), Verdict::Present);
        assert_eq!(state.key_verdict("M"), Verdict::Present);
        assert_eq!(state.key_verdict("ENTER"), Verdict::Empty);
    }

    #[test]
    fn layout_covers_alphabet_once() {
        let mut letters: Vec<&str> = KEYBOARD_ROWS
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|key| key.len() == 1)
            .collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }
}
