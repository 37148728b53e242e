//! TUI rendering with ratatui
//!
//! Everything is drawn from the game's read accessors each frame; nothing
//! here feeds back into game state except the keyboard hitboxes.

use super::app::{App, GameMode};
use crate::core::Evaluation;
use crate::game::{AnimationKind, CellState, GameOutcome, KeyId, Position, keyboard_layout};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;

/// Main UI rendering function
///
/// Returns the screen area of every on-screen key.
pub fn ui(f: &mut Frame, app: &App) -> Vec<(Rect, KeyId)> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Min(8),                     // Board
            Constraint::Length(KEY_HEIGHT * 3 + 2), // Keyboard
            Constraint::Length(1),                  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    let hitboxes = render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
    render_notifications(f, app, chunks[1]);

    hitboxes
}

/// Background colour for an evaluated tile or key
#[must_use]
pub const fn evaluation_color(evaluation: Evaluation) -> Color {
    match evaluation {
        Evaluation::Correct => Color::Green,
        Evaluation::WrongLocation => Color::Yellow,
        Evaluation::Wrong => Color::DarkGray,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        GameMode::Daily { day } => format!("WORDLE - Daily #{day}"),
        GameMode::Practice => "WORDLE - Practice".to_string(),
    };

    let header = Paragraph::new(title)
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

fn tile_span(app: &App, position: Position) -> Span<'static> {
    let Some(cell) = app.game.board().cell(position) else {
        return Span::raw("     ");
    };
    let letter = cell
        .letter_char()
        .map_or(' ', |c| c.to_ascii_uppercase());

    let mut style = match cell.state() {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Active => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellState::Revealed(evaluation) => Style::default()
            .fg(Color::Black)
            .bg(evaluation_color(evaluation))
            .add_modifier(Modifier::BOLD),
    };

    let text = match app.game.animation_at(position) {
        // Edge-on halfway through a flip
        Some(AnimationKind::Flip) if cell.state() == CellState::Active => " ─── ".to_string(),
        Some(AnimationKind::Shake) => {
            style = style.fg(Color::Red);
            format!("< {letter} >")
        }
        Some(AnimationKind::Dance) => {
            style = style.add_modifier(Modifier::UNDERLINED);
            format!(" ^{letter}^ ")
        }
        _ if cell.state() == CellState::Empty => "[   ]".to_string(),
        _ => format!("[ {letter} ]"),
    };

    Span::styled(text, style)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.game.board();
    let mut lines = Vec::with_capacity(board.row_count() * 2);

    for row in 0..board.row_count() {
        let mut spans = Vec::new();
        for col in 0..crate::core::WORD_LENGTH {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile_span(app, Position::new(row, col)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn key_width(key: KeyId) -> u16 {
    match key {
        KeyId::Letter(_) | KeyId::Delete => KEY_WIDTH,
        KeyId::Enter => WIDE_KEY_WIDTH,
    }
}

fn key_style(app: &App, key: KeyId) -> Style {
    let status = match key {
        KeyId::Letter(c) => app.game.key_status(c),
        _ => None,
    };
    match status {
        Some(evaluation) => Style::default()
            .fg(Color::Black)
            .bg(evaluation_color(evaluation)),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) -> Vec<(Rect, KeyId)> {
    let mut hitboxes = Vec::new();

    for (row_index, keys) in keyboard_layout().into_iter().enumerate() {
        let row_width: u16 = keys.iter().map(|&k| key_width(k) + 1).sum::<u16>().saturating_sub(1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + 1 + row_index as u16 * KEY_HEIGHT;

        for key in keys {
            let width = key_width(key);
            let rect = Rect::new(x, y, width, KEY_HEIGHT).intersection(area);
            x += width + 1;
            if rect.is_empty() {
                continue;
            }

            let widget = Paragraph::new(key.label())
                .alignment(Alignment::Center)
                .style(key_style(app, key))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(widget, rect);
            hitboxes.push((rect, key));
        }
    }

    hitboxes
}

fn render_notifications(f: &mut Frame, app: &App, area: Rect) {
    let notifications = app.game.notifications();
    if notifications.is_empty() {
        return;
    }

    let width = notifications
        .iter()
        .map(|n| n.message.chars().count() as u16 + 4)
        .max()
        .unwrap_or(0)
        .min(area.width);

    for (i, notification) in notifications.iter().enumerate() {
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + i as u16 * 3,
            width,
            3,
        )
        .intersection(area);
        if rect.is_empty() {
            break;
        }

        let alert = Paragraph::new(notification.message.clone())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));

        f.render_widget(Clear, rect);
        f.render_widget(alert, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state_text = match app.game.outcome() {
        GameOutcome::InProgress if app.game.is_listening() => {
            format!("Guess {}/{}", app.game.attempts() + 1, app.game.board().row_count())
        }
        GameOutcome::InProgress => "...".to_string(),
        GameOutcome::Won => format!("Solved in {}", app.game.attempts()),
        GameOutcome::Lost => "Out of guesses".to_string(),
    };
    f.render_widget(Paragraph::new(state_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: Practice | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
