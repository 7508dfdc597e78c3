//! TUI rendering with ratatui
//!
//! The board starts as a flat grid. Once the game escalates, every frame is
//! drawn as a bordered box inset inside the one before it.

use super::app::{App, MessageStyle};
use crate::core::{Guess, KEYBOARD_ROWS, KeyboardState, Verdict};
use crate::game::{GameOutcome, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Keyboard, attempts, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let Some(outcome) = app.session.outcome() {
        render_game_over(f, outcome);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🖼  MODLE - Every miss opens another frame")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        Verdict::Empty => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, verdict: Verdict) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        verdict_style(verdict).add_modifier(Modifier::BOLD),
    )
}

fn guess_line(guess: &Guess) -> Line<'static> {
    let mut spans = Vec::with_capacity(guess.word.len() * 2);
    for (letter, verdict) in guess.letters() {
        spans.push(tile(letter as char, verdict));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn input_line(input: &str, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(width * 2);
    for c in input.chars().chain(std::iter::repeat('_')).take(width) {
        spans.push(Span::styled(
            format!(" {c} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn blank_line(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        " ·  ".repeat(width).trim_end().to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.session.frames().is_empty() {
        render_flat_grid(f, app, inner);
    } else {
        render_frames(f, app, inner);
    }
}

/// Pre-escalation grid: guesses, the input row, then blank rows for the rest
fn render_flat_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.word_length();
    let mut lines: Vec<Line> = session.guesses().iter().map(guess_line).collect();

    if session.status() == GameStatus::Playing {
        lines.push(input_line(session.current_input(), width));
    }
    let rows = session.budget().max_attempts();
    while lines.len() < rows {
        lines.push(blank_line(width));
    }
    push_validation(&mut lines, app);

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Escalated board: one box per frame, each inset inside its parent
///
/// Outer frames show only the guess that opened them. The innermost frame
/// shows its full history and, while playing, the input row.
fn render_frames(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let frames = session.frames();
    let mut area = area;

    for (i, frame) in frames.iter().enumerate() {
        if area.height < 3 || area.width < 8 {
            break;
        }
        let innermost = i + 1 == frames.len();
        let color = if innermost { Color::Magenta } else { Color::Blue };

        let block = Block::default()
            .title(format!(
                " Frame {} · {} guesses remaining ",
                frame.nesting_level, frame.remaining_snapshot
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if innermost {
            let mut lines: Vec<Line> = session
                .frame_history(frame)
                .iter()
                .map(guess_line)
                .collect();
            if session.status() == GameStatus::Escalated {
                lines.push(input_line(session.current_input(), session.word_length()));
            }
            push_validation(&mut lines, app);
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);
            f.render_widget(
                Paragraph::new(guess_line(&frame.guess)).alignment(Alignment::Center),
                rows[0],
            );
            area = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0)])
                .horizontal_margin(1)
                .split(rows[1])[0];
        }
    }
}

fn push_validation(lines: &mut Vec<Line>, app: &App) {
    if let Some(err) = app.session.validation_error(Instant::now()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Messages
            Constraint::Length(5), // Statistics
        ])
        .split(area);

    render_keyboard(f, app.session.keyboard(), chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_statistics(f, app, chunks[3]);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|label| match label.chars().next() {
                    Some(letter) if label.len() == 1 => {
                        tile(letter, keyboard.key_verdict(label))
                    }
                    _ => Span::styled(
                        if *label == "ENTER" { " ⏎ " } else { " ⌫ " },
                        Style::default().fg(Color::Cyan),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let budget = app.session.budget();
    let max = budget.max_attempts().max(1);
    let percent = u16::try_from(budget.used() * 100 / max).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent)
        .label(format!(
            "{}/{} used | depth {}",
            budget.used(),
            budget.max_attempts(),
            app.session.frames().len()
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats.borrow();
    let distribution = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(attempts, count)| format!("{attempts}:{count}"))
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!(
            "Played: {} | Won: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!("Wins by guesses: {distribution}")),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Statistics ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let status_text = match app.session.status() {
        GameStatus::Playing => "Status: Playing",
        GameStatus::Escalated => "Status: Escalated",
        GameStatus::Won => "Status: Won",
        GameStatus::Lost => "Status: Lost",
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let help_text = if app.session.status().is_terminal() {
        "n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn render_game_over(f: &mut Frame, outcome: &GameOutcome) {
    let area = centered_rect(50, 60, f.area());

    let (title, color) = if outcome.won {
        (" 🎉 Congratulations! ", Color::Green)
    } else {
        (" Game Over ", Color::Red)
    };

    let mut lines = vec![
        Line::from(if outcome.won {
            format!(
                "Solved in {}/{} guesses",
                outcome.attempts_used, outcome.max_attempts
            )
        } else {
            "Out of attempts".to_string()
        }),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                outcome.secret.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Deepest frame: {}", outcome.deepest_frame)),
        Line::default(),
    ];
    lines.extend(outcome.share_text().lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press 'n' for new game or 'q' to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::{GameConfig, Key, SessionFactory};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let dictionary = Dictionary::from_words(["modal", "about", "plant", "crane"]);
        App::new(SessionFactory::new(GameConfig::default(), dictionary)).unwrap()
    }

    fn submit(app: &mut App, word: &str) {
        for c in word.chars() {
            app.press(Key::from_char(c).unwrap());
        }
        app.press(Key::Enter);
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn flat_board_before_escalation() {
        let app = app();
        let text = screen(&app);
        assert!(text.contains("Board"));
        assert!(!text.contains("Frame 1"));
    }

    #[test]
    fn frames_drawn_with_frozen_remaining() {
        let mut app = app();
        submit(&mut app, "about");
        submit(&mut app, "plant");

        let text = screen(&app);
        assert!(text.contains("Frame 1 · 5 guesses remaining"));
        assert!(text.contains("Frame 2 · 4 guesses remaining"));
    }

    #[test]
    fn game_over_popup_shows_secret() {
        let mut app = app();
        submit(&mut app, "about");
        submit(&mut app, "modal");

        let text = screen(&app);
        assert!(text.contains("Congratulations"));
        assert!(text.contains("MODAL"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 60, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }
}
