//! Game session state machine
//!
//! A session starts in the flat `Playing` phase. The first incorrect guess
//! escalates it; from then on every incorrect guess that leaves budget opens
//! another nested [`Frame`]. The session ends on a correct guess or when the
//! shared attempt budget runs out.

use super::budget::AttemptBudget;
use super::config::{ConfigError, GameConfig};
use super::frame::Frame;
use super::input::Key;
use crate::core::{EvaluateError, Guess, KeyboardState, Word, WordError, score};
use crate::dictionary::{Dictionary, DictionaryGate};
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// How long a rejected-guess message stays visible
pub const VALIDATION_MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Session lifecycle
///
/// Transitions only move forward: `Playing -> Escalated -> {Won, Lost}` or
/// `Playing -> Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Escalated,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Recoverable reasons a submission was rejected
///
/// A rejected guess consumes no attempt and changes no status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("{0} is not in the word list")]
    NotInDictionary(String),
    #[error("Invalid guess: {0}")]
    InvalidWord(#[from] WordError),
}

impl From<EvaluateError> for SubmitError {
    fn from(err: EvaluateError) -> Self {
        match err {
            EvaluateError::LengthMismatch { expected, actual } => {
                Self::LengthMismatch { expected, actual }
            }
        }
    }
}

/// Final report of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub secret: Word,
    pub guesses: Vec<Guess>,
    /// Deepest nesting level reached (0 when the game never escalated)
    pub deepest_frame: usize,
}

impl GameOutcome {
    /// Shareable summary: a header line then one emoji row per guess
    ///
    /// # Examples
    /// ```
    /// use modle::dictionary::Dictionary;
    /// use modle::game::{GameConfig, GameSession, SubmitOutcome};
    ///
    /// let mut session = GameSession::new(GameConfig::default(), Dictionary::fallback()).unwrap();
    /// let SubmitOutcome::GameOver(outcome) = session.submit_guess("modal").unwrap() else {
    ///     panic!("expected a win");
    /// };
    /// assert_eq!(outcome.share_text(), "Modle 1/6\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let score = if self.won {
            self.attempts_used.to_string()
        } else {
            "X".to_string()
        };

        let mut text = format!("Modle {score}/{}", self.max_attempts);
        for guess in &self.guesses {
            text.push('\n');
            text.push_str(&guess.feedback.to_emoji());
        }
        text
    }
}

/// What an accepted guess did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First incorrect guess: the session left the flat phase
    Escalated(Frame),
    /// Another incorrect guess opened a deeper frame
    Nested(Frame),
    /// The session reached Won or Lost
    GameOver(GameOutcome),
}

/// Effect of one keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Buffered,
    Erased,
    Submitted(SubmitOutcome),
    Rejected(SubmitError),
    Ignored,
}

#[derive(Debug, Clone)]
struct ValidationMessage {
    error: SubmitError,
    raised_at: Instant,
}

type GameOverHook = Box<dyn FnMut(&GameOutcome)>;

/// One play-through against a single secret
pub struct GameSession<D: DictionaryGate = Dictionary> {
    secret: Word,
    dictionary: D,
    status: GameStatus,
    budget: AttemptBudget,
    guesses: Vec<Guess>,
    keyboard: KeyboardState,
    frames: Vec<Frame>,
    input: String,
    validation: Option<ValidationMessage>,
    outcome: Option<GameOutcome>,
    game_over_hooks: Vec<GameOverHook>,
}

impl<D: DictionaryGate> GameSession<D> {
    /// Start a session
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration does not validate against
    /// the dictionary.
    pub fn new(config: GameConfig, dictionary: D) -> Result<Self, ConfigError> {
        let secret = config.validate(&dictionary)?;
        debug!(max_attempts = config.max_attempts, "Starting session");

        Ok(Self {
            secret,
            dictionary,
            status: GameStatus::Playing,
            budget: AttemptBudget::new(config.max_attempts),
            guesses: Vec::new(),
            keyboard: KeyboardState::new(),
            frames: Vec::new(),
            input: String::new(),
            validation: None,
            outcome: None,
            game_over_hooks: Vec::new(),
        })
    }

    /// Register a callback fired once when the session reaches Won or Lost
    pub fn on_game_over(&mut self, hook: impl FnMut(&GameOutcome) + 'static) {
        self.game_over_hooks.push(Box::new(hook));
    }

    /// Feed one key from the host
    ///
    /// Keys arriving after the session ended are ignored.
    pub fn on_key_press(&mut self, key: Key) -> KeyOutcome {
        if self.status.is_terminal() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(letter) => {
                if self.input.len() >= self.secret.len() || !letter.is_ascii_alphabetic() {
                    return KeyOutcome::Ignored;
                }
                self.validation = None;
                self.input.push(letter.to_ascii_uppercase() as char);
                KeyOutcome::Buffered
            }
            Key::Backspace => {
                self.validation = None;
                if self.input.pop().is_some() {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => {
                let attempt = self.input.clone();
                match self.submit_guess(&attempt) {
                    Ok(outcome) => {
                        self.input.clear();
                        KeyOutcome::Submitted(outcome)
                    }
                    Err(err) => KeyOutcome::Rejected(err),
                }
            }
        }
    }

    /// Validate, evaluate and record a guess
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` for guesses of the wrong length, non-words, and
    /// words missing from the dictionary. None of these consume an attempt.
    ///
    /// # Panics
    ///
    /// Panics if called after the session ended; that is a caller bug.
    pub fn submit_guess(&mut self, text: &str) -> Result<SubmitOutcome, SubmitError> {
        assert!(
            !self.status.is_terminal(),
            "invalid transition: guess submitted after the session ended ({:?})",
            self.status
        );

        let guess = match self.validate(text) {
            Ok(word) => score(word, &self.secret)?,
            Err(err) => {
                debug!(guess = text, error = %err, "Rejected guess");
                self.validation = Some(ValidationMessage {
                    error: err.clone(),
                    raised_at: Instant::now(),
                });
                return Err(err);
            }
        };

        let solved = guess.is_solved();
        self.validation = None;
        self.keyboard.merge(&guess);
        self.guesses.push(guess.clone());
        let used = self.budget.consume();

        debug!(attempt = used, guess = %guess.word, solved, "Accepted guess");

        if solved {
            return Ok(SubmitOutcome::GameOver(self.finish(true)));
        }

        if self.status == GameStatus::Playing {
            self.status = GameStatus::Escalated;
        }

        if self.budget.is_exhausted() {
            return Ok(SubmitOutcome::GameOver(self.finish(false)));
        }

        let frame = Frame::open(
            self.frames.len() + 1,
            guess,
            used,
            self.budget.max_attempts(),
        );
        self.frames.push(frame.clone());

        if frame.nesting_level == 1 {
            Ok(SubmitOutcome::Escalated(frame))
        } else {
            Ok(SubmitOutcome::Nested(frame))
        }
    }

    fn validate(&self, text: &str) -> Result<Word, SubmitError> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual != self.secret.len() {
            return Err(SubmitError::LengthMismatch {
                expected: self.secret.len(),
                actual,
            });
        }

        let word = Word::new(text)?;
        if !self.dictionary.is_valid_word(word.text()) {
            return Err(SubmitError::NotInDictionary(word.text().to_string()));
        }

        Ok(word)
    }

    fn finish(&mut self, won: bool) -> GameOutcome {
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };

        let outcome = GameOutcome {
            won,
            attempts_used: self.budget.used(),
            max_attempts: self.budget.max_attempts(),
            secret: self.secret.clone(),
            guesses: self.guesses.clone(),
            deepest_frame: self.frames.len(),
        };

        info!(
            won,
            attempts_used = outcome.attempts_used,
            frames = outcome.deepest_frame,
            "Game over"
        );

        for hook in &mut self.game_over_hooks {
            hook(&outcome);
        }
        self.outcome = Some(outcome.clone());
        outcome
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn budget(&self) -> &AttemptBudget {
        &self.budget
    }

    /// Live remaining attempts for the session as a whole
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.budget.remaining()
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Every accepted guess in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Innermost open frame, if the session has escalated
    #[must_use]
    pub fn active_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Guesses visible from a frame: everything up to and including its own
    #[must_use]
    pub fn frame_history(&self, frame: &Frame) -> &[Guess] {
        &self.guesses[..frame.attempts_used_at_creation.min(self.guesses.len())]
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    /// Last rejection, until it expires or the player types again
    #[must_use]
    pub fn validation_error(&self, now: Instant) -> Option<&SubmitError> {
        self.validation
            .as_ref()
            .filter(|msg| now.saturating_duration_since(msg.raised_at) < VALIDATION_MESSAGE_TTL)
            .map(|msg| &msg.error)
    }

    /// Drop an expired rejection message
    pub fn clear_expired_validation(&mut self, now: Instant) {
        if self.validation_error(now).is_none() {
            self.validation = None;
        }
    }

    /// Final report, once the session has ended
    #[must_use]
    pub const fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// The secret; hosts should only reveal it after the game ends
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl<D: DictionaryGate> fmt::Debug for GameSession<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("status", &self.status)
            .field("budget", &self.budget)
            .field("guesses", &self.guesses.len())
            .field("frames", &self.frames.len())
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}
