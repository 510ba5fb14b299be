//! The player's four move buttons.

use client_frontend_core::BattleView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::BattleTheme;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView, theme: &BattleTheme) {
    let items: Vec<ListItem> = view
        .buttons()
        .iter()
        .enumerate()
        .map(|(slot, button)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}. ", slot + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(button.label.as_str(), theme.style_button(button.enabled)),
            ]))
        })
        .collect();

    let title = format!(" {}'s moves ", view.player().name);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(list, area);
}
