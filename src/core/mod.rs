//! Core domain types for the puzzle
//!
//! Pure, testable types: words, verdicts, guess evaluation and keyboard
//! feedback. No I/O and no session state lives here.

mod evaluate;
mod keyboard;
mod verdict;
mod word;

pub use evaluate::{EvaluateError, evaluate, score};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use verdict::{Feedback, Guess, Verdict};
pub use word::{Word, WordError};
