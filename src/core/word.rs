//! Word representation
//!
//! A Word stores an uppercase ASCII word along with its letters as bytes for
//! verdict calculation.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase ASCII word of any non-zero length
///
/// Input is case-insensitive; the stored form is always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use modle::core::Word;
    ///
    /// let word = Word::new("modal").unwrap();
    /// assert_eq!(word.text(), "MODAL");
    ///
    /// assert!(Word::new("mo dal").is_err());
    /// assert!(Word::new("m0dal").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let letters = text.as_bytes().into();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; a Word cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count how many times each letter occurs
    ///
    /// This is the multiset of "unclaimed" letters the evaluator draws from.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters.iter() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("modal").unwrap();
        assert_eq!(word.text(), "MODAL");
        assert_eq!(word.letters(), b"MODAL");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_case_insensitive() {
        assert_eq!(Word::new("MoDaL").unwrap(), Word::new("modal").unwrap());
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  modal\n").unwrap().text(), "MODAL");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("abstract").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   "), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(Word::new("mod4l"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("mo al"), Err(WordError::InvalidCharacters)));
        assert!(matches!(Word::new("modäl"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("modal").unwrap();
        assert_eq!(word.letter_at(0), b'M');
        assert_eq!(word.letter_at(4), b'L');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("aloha").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'A'), Some(&2));
        assert_eq!(counts.get(&b'L'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn letter_counts_handle_long_words() {
        let word = Word::new("a".repeat(300)).unwrap();
        assert_eq!(word.letter_counts().get(&b'A'), Some(&300));
    }

    #[test]
    fn word_display() {
        let word = Word::new("modal").unwrap();
        assert_eq!(format!("{word}"), "MODAL");
    }
}
