//! Modle
//!
//! A single-word guessing puzzle: the first miss escalates the game into a
//! chain of nested attempt frames, one per further miss, until the word is
//! found or the attempt budget runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use modle::dictionary::Dictionary;
//! use modle::game::{GameConfig, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(GameConfig::default(), Dictionary::fallback()).unwrap();
//!
//! session.submit_guess("about").unwrap();
//! assert_eq!(session.status(), GameStatus::Escalated);
//! assert_eq!(session.frames()[0].remaining_snapshot, 5);
//! ```

// Core domain types
pub mod core;

// Word-validity dictionary
pub mod dictionary;

// Session state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
