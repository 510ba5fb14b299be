//! Key binding hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, opponent_auto: bool) {
    let mut bindings = vec![("1-4", "attack")];
    if !opponent_auto {
        bindings.push(("n", "opponent"));
    }
    bindings.extend([
        ("s/l", "save/load"),
        ("f/o", "file save/load"),
        ("r", "reset"),
        ("q", "quit"),
    ]);

    let mut spans = Vec::new();
    for (index, (key, action)) in bindings.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(Paragraph::new(vec![Line::from(""), Line::from(spans)]), area);
}
