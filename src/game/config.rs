//! Session configuration

use crate::core::{Word, WordError};
use crate::dictionary::DictionaryGate;
use thiserror::Error;

/// Secret used when none is configured
pub const DEFAULT_SECRET: &str = "MODAL";

/// Attempt budget used when none is configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Configuration for one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub secret: String,
    pub max_attempts: usize,
}

/// Reasons a configuration cannot start a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid secret: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("Secret has {actual} letters but the dictionary uses {expected}")]
    SecretLength { expected: usize, actual: usize },
    #[error("Secret {0} is not in the word list")]
    SecretNotInDictionary(String),
    #[error("Attempt budget must be at least 1")]
    ZeroAttempts,
}

impl GameConfig {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Check the configuration against a dictionary and return the parsed secret
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the budget is zero, the secret is not a word,
    /// its length differs from the dictionary's word length, or the
    /// dictionary does not contain it.
    pub fn validate<D: DictionaryGate>(&self, dictionary: &D) -> Result<Word, ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let secret = Word::new(&self.secret)?;
        if secret.len() != dictionary.word_length() {
            return Err(ConfigError::SecretLength {
                expected: dictionary.word_length(),
                actual: secret.len(),
            });
        }

        if !dictionary.is_valid_word(secret.text()) {
            return Err(ConfigError::SecretNotInDictionary(secret.text().to_string()));
        }

        Ok(secret)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.secret, "MODAL");
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn validate_accepts_default() {
        let dictionary = Dictionary::from_words(["modal"]);
        let secret = GameConfig::default().validate(&dictionary).unwrap();
        assert_eq!(secret.text(), "MODAL");
    }

    #[test]
    fn validate_rejects_zero_attempts() {
        let dictionary = Dictionary::from_words(["modal"]);
        let config = GameConfig::default().with_max_attempts(0);
        assert_eq!(config.validate(&dictionary), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn validate_rejects_bad_secret() {
        let dictionary = Dictionary::from_words(["modal"]);
        assert!(matches!(
            GameConfig::new("m0dal").validate(&dictionary),
            Err(ConfigError::InvalidSecret(_))
        ));
        assert_eq!(
            GameConfig::new("cat").validate(&dictionary),
            Err(ConfigError::SecretLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn validate_rejects_secret_missing_from_dictionary() {
        let dictionary = Dictionary::from_words(["modal"]);
        assert!(!dictionary.is_valid_word("qajaq"));
        assert_eq!(
            GameConfig::new("qajaq").validate(&dictionary),
            Err(ConfigError::SecretNotInDictionary("QAJAQ".to_string()))
        );
    }
}
