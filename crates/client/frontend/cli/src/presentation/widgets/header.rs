//! Header widget displaying whose turn it is.

use client_frontend_core::BattleView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel with the turn label and round counter.
pub fn render(frame: &mut Frame, area: Rect, view: &BattleView, round: u32) {
    let label_style = if view.is_over() {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let text = vec![Line::from(vec![
        Span::styled(view.turn_label.as_str(), label_style),
        Span::raw(" | Round: "),
        Span::styled(round.to_string(), Style::default().fg(Color::Yellow)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Battle"));

    frame.render_widget(paragraph, area);
}
