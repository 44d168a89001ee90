//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::App;
use crate::core::{GameSession, LetterStatus, Outcome, WORD_LENGTH};
use crate::game::{Game, NoticeKind};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Notice
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let Some(game) = app.game() else {
        render_loading(f, chunks[1]);
        return;
    };

    render_board(f, game.session(), chunks[1]);
    render_notice(f, game, chunks[2]);
    render_keyboard(f, game, chunks[3]);
    render_status(f, game, chunks[4]);
}

/// Style for a tile or key with the given status
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_loading(f: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading word list...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}

/// One board row per attempt: evaluated guesses, the live input, then blanks
fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let history = session.history();
    let typing_row = (session.outcome() == Outcome::InProgress).then_some(history.len());

    (0..session.max_guesses())
        .map(|row| {
            let cells: Vec<(String, Style)> = if let Some(result) = history.get(row) {
                result
                    .tiles()
                    .iter()
                    .map(|tile| (tile.letter.to_string(), status_style(Some(tile.status))))
                    .collect()
            } else if typing_row == Some(row) {
                let mut letters = session.current_input().chars();
                (0..WORD_LENGTH)
                    .map(|_| match letters.next() {
                        Some(c) => (
                            c.to_string(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        None => ("_".to_string(), Style::default().fg(Color::Gray)),
                    })
                    .collect()
            } else {
                (0..WORD_LENGTH)
                    .map(|_| ("·".to_string(), Style::default().fg(Color::DarkGray)))
                    .collect()
            };

            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for (i, (label, style)) in cells.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(format!(" {label} "), style));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let title = format!(
        " Guesses {}/{} ",
        session.history().len(),
        session.max_guesses()
    );
    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_notice(f: &mut Frame, game: &Game, area: Rect) {
    let (text, style) = match game.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            (
                notice.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default()),
    };

    let notice = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(notice, area);
}

fn keyboard_lines(game: &Game) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {c} "), status_style(game.hints().status(c))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, game: &Game, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(game))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats = game.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[0]);

    let streak = Paragraph::new(format!("Streak: {}", stats.current_streak))
        .alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let help_text = if game.session().outcome().is_over() {
        "n: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Ctrl+N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
