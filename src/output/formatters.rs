//! Formatting utilities for terminal output

use crate::core::{Guess, KEYBOARD_ROWS, KeyboardState, Verdict};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile like ` M `
#[must_use]
pub fn letter_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black().bold(),
        Verdict::Empty => text.normal(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, verdict)| letter_tile(letter as char, verdict).to_string())
        .collect()
}

/// Render the letters typed so far, padded with blanks to `width`
#[must_use]
pub fn input_row(input: &str, width: usize) -> String {
    input
        .chars()
        .chain(std::iter::repeat('_'))
        .take(width)
        .map(|c| letter_tile(c, Verdict::Empty).to_string())
        .collect()
}

/// Render the on-screen keyboard, one string per row
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .filter(|label| label.len() == 1)
                .map(|label| {
                    let verdict = keyboard.key_verdict(label);
                    letter_tile(label.chars().next().unwrap_or(' '), verdict).to_string()
                })
                .collect::<Vec<_>>()
                .join("")
        })
        .collect()
}

/// Prefix that draws the nesting depth of a frame
#[must_use]
pub fn nesting_prefix(level: usize) -> String {
    "│ ".repeat(level)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn nesting_prefix_grows_with_level() {
        assert_eq!(nesting_prefix(0), "");
        assert_eq!(nesting_prefix(2), "│ │ ");
    }

    #[test]
    fn input_row_pads_to_width() {
        colored::control::set_override(false);
        assert_eq!(input_row("MO", 5), " M  O  _  _  _ ");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&KeyboardState::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], " Q  W  E  R  T  Y  U  I  O  P ");
    }
}
