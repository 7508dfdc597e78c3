//! Session construction for front ends
//!
//! Replaying discards the old session and builds a fresh one here.

use super::config::{ConfigError, GameConfig};
use super::session::GameSession;
use crate::dictionary::Dictionary;
use rand::Rng;

/// Everything needed to start a new session on demand
#[derive(Debug, Clone)]
pub struct SessionFactory {
    pub config: GameConfig,
    pub dictionary: Dictionary,
    /// Draw a new secret from the dictionary for every session
    pub random_secret: bool,
}

impl SessionFactory {
    #[must_use]
    pub const fn new(config: GameConfig, dictionary: Dictionary) -> Self {
        Self {
            config,
            dictionary,
            random_secret: false,
        }
    }

    #[must_use]
    pub fn with_random_secret(mut self, random_secret: bool) -> Self {
        self.random_secret = random_secret;
        self
    }

    /// Start a session, drawing the secret from the thread RNG when random
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured secret or budget is invalid.
    pub fn create(&self) -> Result<GameSession, ConfigError> {
        self.create_with_rng(&mut rand::rng())
    }

    /// Start a session with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured secret or budget is invalid.
    pub fn create_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameSession, ConfigError> {
        let mut config = self.config.clone();
        if self.random_secret
            && let Some(secret) = self.dictionary.random_secret(rng)
        {
            config.secret = secret.text().to_string();
        }
        GameSession::new(config, self.dictionary.clone())
    }
}
