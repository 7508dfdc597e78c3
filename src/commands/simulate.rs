//! Random-play simulation
//!
//! Plays many independent sessions with uniformly random dictionary guesses
//! and collects how often, and how deep, they go.

use crate::game::{GameOutcome, SessionFactory, SubmitOutcome};
use anyhow::{Context, Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: false,
        }
    }
}

/// Aggregate statistics from a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub max_attempts: usize,
    /// Attempts used -> number of games won with that many
    pub distribution: HashMap<usize, usize>,
    pub deepest_frame: usize,
    pub total_frames: usize,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }

    #[must_use]
    pub fn average_frames(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_frames as f64 / self.games as f64
    }
}

/// Play `config.games` sessions in parallel
///
/// Game `i` uses an RNG seeded from `config.seed + i`, so results do not
/// depend on thread scheduling.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or a session cannot be created.
pub fn run_simulation(factory: &SessionFactory, config: &SimulationConfig) -> Result<SimulationResult> {
    let words = factory.dictionary.words();
    ensure!(!words.is_empty(), "Dictionary has no words to guess with");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let outcome = play_random_game(factory, &words, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Complete!");

    let mut result = SimulationResult {
        games: outcomes.len(),
        wins: 0,
        max_attempts: factory.config.max_attempts,
        distribution: HashMap::new(),
        deepest_frame: 0,
        total_frames: 0,
        duration: start.elapsed(),
    };

    for outcome in &outcomes {
        if outcome.won {
            result.wins += 1;
            *result.distribution.entry(outcome.attempts_used).or_insert(0) += 1;
        }
        result.deepest_frame = result.deepest_frame.max(outcome.deepest_frame);
        result.total_frames += outcome.deepest_frame;
    }

    Ok(result)
}

fn play_random_game(factory: &SessionFactory, words: &[String], rng: &mut StdRng) -> Result<GameOutcome> {
    let mut session = factory.create_with_rng(rng)?;

    loop {
        let guess = words.choose(rng).context("Dictionary has no words")?;
        match session.submit_guess(guess) {
            Ok(SubmitOutcome::GameOver(outcome)) => return Ok(outcome),
            Ok(SubmitOutcome::Escalated(_) | SubmitOutcome::Nested(_)) => {}
            Err(err) => return Err(err).with_context(|| format!("Dictionary word {guess} was rejected")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::GameConfig;

    fn factory(words: &[&str]) -> SessionFactory {
        SessionFactory::new(GameConfig::default(), Dictionary::from_words(words.iter().copied()))
    }

    #[test]
    fn single_word_dictionary_always_wins_first_try() {
        let result = run_simulation(&factory(&["modal"]), &SimulationConfig::new(20, 1)).unwrap();

        assert_eq!(result.games, 20);
        assert_eq!(result.wins, 20);
        assert_eq!(result.distribution.get(&1), Some(&20));
        assert_eq!(result.deepest_frame, 0);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn losses_and_frames_stay_within_budget() {
        let words = ["modal", "about", "plant", "crane", "slate", "zesty", "ghoul", "brick"];
        let result = run_simulation(&factory(&words), &SimulationConfig::new(200, 9)).unwrap();

        assert_eq!(result.games, 200);
        assert!(result.wins <= result.games);
        // A loss after six misses leaves five frames open
        assert!(result.deepest_frame <= 5);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &attempts in result.distribution.keys() {
            assert!((1..=6).contains(&attempts));
        }
    }

    #[test]
    fn same_seed_same_result() {
        let words = ["modal", "about", "plant", "crane"];
        let a = run_simulation(&factory(&words), &SimulationConfig::new(50, 3)).unwrap();
        let b = run_simulation(&factory(&words), &SimulationConfig::new(50, 3)).unwrap();

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.total_frames, b.total_frames);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let empty = SessionFactory::new(
            GameConfig::default(),
            Dictionary::from_words(Vec::<String>::new()),
        );
        assert!(run_simulation(&empty, &SimulationConfig::new(5, 0)).is_err());
    }

    #[test]
    fn zero_games() {
        let result = run_simulation(&factory(&["modal"]), &SimulationConfig::new(0, 0)).unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_frames().abs() < f64::EPSILON);
    }
}
