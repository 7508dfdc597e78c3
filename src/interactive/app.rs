//! TUI application state and logic

use crate::game::{GameOutcome, GameSession, Key, KeyOutcome, SessionFactory, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How often the screen refreshes while idle, so transient messages expire
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub factory: SessionFactory,
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub stats: Rc<RefCell<Statistics>>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across sessions, kept for the lifetime of the process only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = attempts used for a win
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.total_games += 1;
        if outcome.won {
            self.games_won += 1;
            if self.guess_distribution.len() <= outcome.attempts_used {
                self.guess_distribution.resize(outcome.attempts_used + 1, 0);
            }
            self.guess_distribution[outcome.attempts_used] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl App {
    /// Create the app and its first session
    ///
    /// # Errors
    ///
    /// Returns an error if the factory cannot build a session.
    pub fn new(factory: SessionFactory) -> Result<Self> {
        let stats = Rc::new(RefCell::new(Statistics::default()));
        let session = Self::start_session(&factory, &stats)?;

        Ok(Self {
            factory,
            session,
            messages: vec![Message {
                text: "Guess the word. Every miss opens another frame.".to_string(),
                style: MessageStyle::Info,
            }],
            stats,
            should_quit: false,
        })
    }

    fn start_session(
        factory: &SessionFactory,
        stats: &Rc<RefCell<Statistics>>,
    ) -> Result<GameSession> {
        let mut session = factory.create()?;
        let stats = Rc::clone(stats);
        session.on_game_over(move |outcome| stats.borrow_mut().record(outcome));
        Ok(session)
    }

    /// Discard the current session and start a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if the factory cannot build a session.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = Self::start_session(&self.factory, &self.stats)?;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Forward one game key to the session and report what happened
    pub fn press(&mut self, key: Key) {
        match self.session.on_key_press(key) {
            KeyOutcome::Submitted(SubmitOutcome::Escalated(frame)) => self.add_message(
                &format!(
                    "Wrong! A frame opens. {} guesses remaining",
                    frame.remaining_snapshot
                ),
                MessageStyle::Error,
            ),
            KeyOutcome::Submitted(SubmitOutcome::Nested(frame)) => self.add_message(
                &format!(
                    "Still wrong. Frame {} opens inside frame {}",
                    frame.nesting_level,
                    frame.nesting_level - 1
                ),
                MessageStyle::Error,
            ),
            KeyOutcome::Submitted(SubmitOutcome::GameOver(outcome)) => {
                let text = if outcome.won {
                    let celebration = match outcome.attempts_used {
                        1 => "🎯 HOLE IN ONE! No frames needed! 🌟",
                        2 => "🔥 Out in two! 🔥",
                        3 => "✨ Three deep and out! ✨",
                        _ => "🎉 You escaped the frames! 🎉",
                    };
                    celebration.to_string()
                } else {
                    format!("Game over. The word was {}", outcome.secret)
                };
                let style = if outcome.won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&text, style);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            // Rejections are shown by the session's expiring validation message
            KeyOutcome::Rejected(_)
            | KeyOutcome::Buffered
            | KeyOutcome::Erased
            | KeyOutcome::Ignored => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle a terminal key event
    ///
    /// # Errors
    ///
    /// Returns an error if a new session cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.status().is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            KeyCode::Char(c) if !ctrl => {
                if let Some(game_key) = Key::from_char(c) {
                    self.press(game_key);
                }
            }
            KeyCode::Backspace => self.press(Key::Backspace),
            KeyCode::Enter => self.press(Key::Enter),
            _ => {}
        }

        Ok(())
    }

    /// Expire transient validation messages
    pub fn tick(&mut self, now: Instant) {
        self.session.clear_expired_validation(now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key)?;
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{GameConfig, GameStatus};

    fn app() -> App {
        let dictionary = Dictionary::from_words(["modal", "about", "plant", "crane"]);
        App::new(SessionFactory::new(GameConfig::default(), dictionary)).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();
    }

    #[test]
    fn letters_reach_the_session() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('m'))).unwrap();
        app.handle_key(key(KeyCode::Char('o'))).unwrap();
        assert_eq!(app.session.current_input(), "MO");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.session.current_input(), "M");
    }

    #[test]
    fn q_and_n_are_letters_while_playing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.session.current_input(), "QN");
    }

    #[test]
    fn miss_escalates_and_win_records_stats() {
        let mut app = app();
        type_word(&mut app, "about");
        assert_eq!(app.session.status(), GameStatus::Escalated);

        type_word(&mut app, "modal");
        assert_eq!(app.session.status(), GameStatus::Won);

        let stats = app.stats.borrow();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
    }

    #[test]
    fn new_game_after_game_over() {
        let mut app = app();
        type_word(&mut app, "modal");
        assert!(app.session.status().is_terminal());

        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.session.status(), GameStatus::Playing);
        assert_eq!(app.stats.borrow().total_games, 1);

        type_word(&mut app, "modal");
        assert_eq!(app.stats.borrow().total_games, 2);
    }

    #[test]
    fn rejected_guess_shows_only_expiring_message() {
        let mut app = app();
        let before = app.messages.len();
        type_word(&mut app, "zzzzz");

        assert_eq!(app.messages.len(), before);
        assert!(app.messages.iter().all(|m| !m.text.contains("not in the word list")));
        assert_eq!(app.session.budget().used(), 0);

        let now = Instant::now();
        let err = app.session.validation_error(now).unwrap();
        assert!(err.to_string().contains("not in the word list"));

        app.tick(now + crate::game::VALIDATION_MESSAGE_TTL);
        assert!(app.session.validation_error(now).is_none());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn statistics_win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);

        let mut app = app();
        type_word(&mut app, "modal");
        let outcome = app.session.outcome().unwrap().clone();
        stats.record(&outcome);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }
}
