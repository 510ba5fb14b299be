//! Scrolling battle log, newest line at the bottom.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::BattleTheme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &BattleTheme) {
    let visible = usize::from(area.height.saturating_sub(2));

    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            let mut spans = Vec::with_capacity(2);
            if let Some(round) = entry.round {
                spans.push(Span::styled(
                    format!("[{round}] "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                entry.text.as_str(),
                theme.style_message(entry.level),
            ));
            Line::from(spans)
        })
        .collect();
    lines.reverse();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
