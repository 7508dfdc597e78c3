//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line.

use crate::game::{GameSession, SessionFactory, SubmitOutcome};
use crate::output::formatters::input_row;
use crate::output::{print_frame, print_game_over, print_keyboard_state};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// session cannot be created from the configuration.
pub fn run_simple(factory: &SessionFactory) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Modle - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word. Your first miss opens a frame; every miss after");
    println!("that opens another one inside it. There is no escape.\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'keys' to show the keyboard\n");

    let mut session = factory.create().context("Failed to start a session")?;
    print_board_hint(&session);

    loop {
        let prompt = format!("Guess {}/{}", session.budget().used() + 1, session.budget().max_attempts());
        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session = factory.create().context("Failed to start a session")?;
                println!("\n🔄 New game started!\n");
                print_board_hint(&session);
                continue;
            }
            "keys" => {
                print_keyboard_state(session.keyboard());
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(SubmitOutcome::Escalated(frame) | SubmitOutcome::Nested(frame)) => {
                print_frame(&frame, session.frame_history(&frame));
                println!();
                print_keyboard_state(session.keyboard());
            }
            Ok(SubmitOutcome::GameOver(outcome)) => {
                print_game_over(&outcome);

                let again = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
                if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    session = factory.create().context("Failed to start a session")?;
                    println!("\n🔄 New game started!\n");
                    print_board_hint(&session);
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            Err(err) => println!("{}", format!("❌ {err}").red()),
        }
    }
}

fn print_board_hint(session: &GameSession) {
    println!("{}\n", input_row("", session.word_length()));
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
