//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_frame, print_game_over, print_keyboard_state,
    print_simulation_result,
};
