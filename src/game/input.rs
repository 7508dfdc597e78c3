//! Host key input

use std::fmt;

/// A key the host forwards to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(u8),
    Enter,
    Backspace,
}

impl Key {
    /// Map a typed character to a key; letters are case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' | 'A'..='Z' => Some(Self::Letter(c.to_ascii_uppercase() as u8)),
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Parse a key label: a single letter, `ENTER` or `BACKSPACE`
    ///
    /// # Examples
    /// ```
    /// use modle::game::Key;
    ///
    /// assert_eq!(Key::parse("m"), Some(Key::Letter(b'M')));
    /// assert_eq!(Key::parse("ENTER"), Some(Key::Enter));
    /// assert_eq!(Key::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Self::from_char(c),
            _ if label.eq_ignore_ascii_case("ENTER") => Some(Self::Enter),
            _ if label.eq_ignore_ascii_case("BACKSPACE") => Some(Self::Backspace),
            _ => None,
        }
    }
}

impl std::str::FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown key: {s}"))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{}", *letter as char),
            Self::Enter => write!(f, "ENTER"),
            Self::Backspace => write!(f, "BACKSPACE"),
        }
    }
}
