//! UI rendering using ratatui.

mod board;

use super::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("XO — Styled  [{}]", app.mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let scores = Paragraph::new(app.scores().to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Session"));
    f.render_widget(scores, chunks[3]);

    let help = Paragraph::new(
        "1-9/arrows+Enter: place | M: Mode | R: Restart | S: Reset scores | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    if app.game().is_over() {
        render_outcome_popup(f, chunks[1], app);
    }
}

/// Modal notification of the round outcome, over the board.
fn render_outcome_popup(f: &mut Frame, area: Rect, app: &App) {
    let message = match app.game().outcome().winner() {
        Some(player) => format!("Player {player} wins!"),
        None => "It's a draw!".to_string(),
    };

    let popup = center_rect(area, 30, 5);
    f.render_widget(Clear, popup);
    let text = format!("{message}\n\nR: play again");
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Round over"));
    f.render_widget(widget, popup);
}

/// Centers a width x height rect within the area.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
