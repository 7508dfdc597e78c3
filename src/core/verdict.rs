//! Per-letter feedback and guess rows
//!
//! A verdict classifies one letter of a guess:
//! - Correct (letter in the right position)
//! - Present (letter in the secret, wrong position)
//! - Absent (letter not in the secret, or all its copies already claimed)
//! - Empty (no feedback yet)
//!
//! Verdicts are ordered by dominance, `Empty < Absent < Present < Correct`,
//! which is what the keyboard aggregator relies on.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verdict {
    #[default]
    Empty,
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Return whichever verdict carries more information
    #[inline]
    #[must_use]
    pub fn dominant(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji tile for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The ordered verdict row for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    #[must_use]
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions carrying the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use modle::core::Feedback;
    ///
    /// let feedback = Feedback::parse("GY-GY").unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }

    /// Parse a row from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/'.'/⬜ for Absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts: Option<Vec<Verdict>> = s.chars().map(Verdict::from_symbol).collect();
        verdicts.filter(|v| !v.is_empty()).map(Self)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// A submitted word paired with its verdict row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

impl Guess {
    /// Iterate `(letter, verdict)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, Verdict)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.verdicts().iter().copied())
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}
