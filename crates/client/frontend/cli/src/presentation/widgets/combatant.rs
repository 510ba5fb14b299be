//! Health panel of one combatant.

use client_frontend_core::CombatantPanel;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge},
};

use crate::presentation::theme::BattleTheme;

pub fn render(frame: &mut Frame, area: Rect, panel: &CombatantPanel, theme: &BattleTheme) {
    let mut title = vec![Span::styled(
        format!(" {} ", panel.name),
        theme.style_title(panel.active, panel.defeated),
    )];
    if panel.active {
        title.push(Span::raw("◀ "));
    }

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title)),
        )
        .gauge_style(theme.style_health(panel.health_percent))
        .percent(u16::from(panel.health_percent))
        .label(format!("HP {}", panel.health_label));

    frame.render_widget(gauge, area);
}
