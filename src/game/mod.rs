//! Game session: attempt budget, nested frames and the state machine
//!
//! Keystrokes accumulate into a guess buffer; a submission is checked against
//! the dictionary, evaluated against the secret, folded into the keyboard
//! state and counted against the shared budget before the session decides to
//! continue, escalate or end.

mod budget;
mod config;
mod factory;
mod frame;
mod input;
mod session;

pub use budget::AttemptBudget;
pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_SECRET, GameConfig};
pub use factory::SessionFactory;
pub use frame::Frame;
pub use input::Key;
pub use session::{
    GameOutcome, GameSession, GameStatus, KeyOutcome, SubmitError, SubmitOutcome,
    VALIDATION_MESSAGE_TTL,
};
