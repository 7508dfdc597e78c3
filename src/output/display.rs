//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row, keyboard_rows, nesting_prefix};
use crate::commands::SimulationResult;
use crate::core::{Guess, KeyboardState};
use crate::game::{Frame, GameOutcome};
use colored::Colorize;

/// Print a single evaluated guess
pub fn print_check_result(guess: &Guess, secret_hidden: bool) {
    println!("\n{}  {}", guess_row(guess), guess.feedback.to_emoji());
    if guess.is_solved() {
        println!("{}", "✅ That's the word!".green().bold());
    } else if secret_hidden {
        println!("{}", "Not the word.".bright_black());
    }
}

/// Print the frame a miss just opened, indented by its nesting level
pub fn print_frame(frame: &Frame, history: &[Guess]) {
    let prefix = nesting_prefix(frame.nesting_level);
    println!(
        "\n{prefix}{}",
        format!("┌─ Frame {} ", frame.nesting_level).cyan().bold()
    );
    for guess in history {
        println!("{prefix}{}", guess_row(guess));
    }
    println!(
        "{prefix}{}",
        format!("{} guesses remaining", frame.remaining_snapshot).bright_black()
    );
}

/// Print the keyboard with per-letter feedback
pub fn print_keyboard(rows: &[String]) {
    for (i, row) in rows.iter().enumerate() {
        println!("{}{row}", " ".repeat(i * 2));
    }
}

/// Print the end-of-game summary
pub fn print_game_over(outcome: &GameOutcome) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if outcome.won {
        println!(
            "{}",
            "    🎉  C O N G R A T U L A T I O N S !  🎉    "
                .bright_green()
                .bold()
        );
        println!(
            "\n  You guessed {} in {} {}",
            outcome.secret.text().bright_green().bold(),
            outcome.attempts_used.to_string().bright_cyan().bold(),
            if outcome.attempts_used == 1 {
                "attempt"
            } else {
                "attempts"
            }
        );
    } else {
        println!("{}", "    G A M E   O V E R    ".bright_red().bold());
        println!(
            "\n  You've used all {} attempts. The word was {}.",
            outcome.max_attempts,
            outcome.secret.text().bright_green().bold()
        );
    }

    if outcome.deepest_frame > 0 {
        println!(
            "  Deepest frame: {}",
            outcome.deepest_frame.to_string().bright_yellow()
        );
    }

    println!("\n  Guess history:");
    for (i, guess) in outcome.guesses.iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            guess_row(guess)
        );
    }

    println!("\n{}", outcome.share_text());
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the keyboard state for a session
pub fn print_keyboard_state(keyboard: &KeyboardState) {
    print_keyboard(&keyboard_rows(keyboard));
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Lost:             {}", result.games - result.wins);
    println!(
        "   Deepest frame:    {}",
        result.deepest_frame.to_string().yellow()
    );
    println!("   Average frames:   {:.2}", result.average_frames());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Wins by attempts used:".bright_cyan().bold());
    for attempts in 1..=result.max_attempts {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = count as f64 / result.wins as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
