//! Modle - CLI
//!
//! Single-word guessing puzzle with nested attempt frames, playable in a TUI
//! or line by line, plus one-shot checks and random-play simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modle::{
    commands::{SimulationConfig, check_guess, run_simple, run_simulation},
    dictionary::{Dictionary, PreloadHandle},
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SECRET, GameConfig, SessionFactory},
    output::{print_check_result, print_simulation_result},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "modle",
    about = "Guess the word; every miss opens another nested frame",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word to guess
    #[arg(long, global = true, default_value = DEFAULT_SECRET)]
    secret: String,

    /// Draw a random secret from the dictionary for every game
    #[arg(long, global = true)]
    random: bool,

    /// Attempt budget shared across all frames
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Richer word list loaded in the background (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode, one guess per line
    Simple,

    /// Evaluate a single guess against the secret
    Check {
        /// The guess to evaluate
        guess: String,
    },

    /// Play many games with random guesses and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Install the tracing subscriber
///
/// `RUST_LOG` overrides the default `warn` level. Logs go to the log file when
/// given, else to stderr unless the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !tui => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Build the session factory from global flags, starting the preload if asked
fn build_factory(cli: &Cli) -> (SessionFactory, Option<PreloadHandle>) {
    let dictionary = Dictionary::fallback();
    let preload = cli.wordlist.as_ref().map(|path| dictionary.preload(path));

    let config = GameConfig::new(cli.secret.clone()).with_max_attempts(cli.max_attempts);
    let factory = SessionFactory::new(config, dictionary).with_random_secret(cli.random);
    (factory, preload)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let (factory, preload) = build_factory(&cli);

    match command {
        Commands::Play => run_play_command(factory),
        Commands::Simple => run_simple(&factory),
        Commands::Check { guess } => run_check_command(&factory, &guess),
        Commands::Simulate { count, seed } => run_simulate_command(&factory, preload, count, seed),
    }
}

fn run_play_command(factory: SessionFactory) -> Result<()> {
    use modle::interactive::{App, run_tui};

    let app = App::new(factory).context("Failed to start game")?;
    run_tui(app)
}

fn run_check_command(factory: &SessionFactory, guess: &str) -> Result<()> {
    let session = factory.create().context("Invalid game configuration")?;
    let result = check_guess(guess, session.secret().text())?;
    print_check_result(&result, factory.random_secret);
    Ok(())
}

fn run_simulate_command(
    factory: &SessionFactory,
    preload: Option<PreloadHandle>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    // Simulated guesses come from the dictionary, so settle it first
    if let Some(handle) = preload
        && let Err(e) = handle.wait()
    {
        warn!(error = %e, "Simulating with the embedded word list");
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut config = SimulationConfig::new(count, seed);
    config.show_progress = true;

    println!("Simulating {count} games (seed {seed})...");
    let result = run_simulation(factory, &config)?;
    print_simulation_result(&result);
    Ok(())
}
