//! Nested attempt frames
//!
//! After the first incorrect guess every further miss opens one more frame.
//! Frames are a flat, append-only list; the nesting depth is just a number.

use crate::core::Guess;

/// One level of the escalated phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Depth of this frame, starting at 1
    pub nesting_level: usize,
    /// The incorrect guess that opened this frame
    pub guess: Guess,
    /// Session-wide attempts used when the frame was opened
    pub attempts_used_at_creation: usize,
    /// Remaining attempts frozen at creation; never recomputed
    pub remaining_snapshot: usize,
}

impl Frame {
    pub(crate) fn open(nesting_level: usize, guess: Guess, used: usize, max_attempts: usize) -> Self {
        Self {
            nesting_level,
            guess,
            attempts_used_at_creation: used,
            remaining_snapshot: max_attempts - used,
        }
    }
}
