//! Composes the widgets into the battle screen.
use anyhow::Result;
use client_frontend_core::{BattleView, MessageLog};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::presentation::{terminal::Tui, theme::BattleTheme, widgets};

/// Everything one frame needs.
pub struct RenderContext<'a> {
    pub view: &'a BattleView,
    pub messages: &'a MessageLog,
    pub round: u32,
    pub opponent_auto: bool,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Layout, top to bottom: header, health panels, moves, messages, footer.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = BattleTheme::new();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Length(ctx.message_panel_height),
            Constraint::Length(2),
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.view, ctx.round);

    let health = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    widgets::combatant::render(frame, health[0], ctx.view.player(), &theme);
    widgets::combatant::render(frame, health[1], ctx.view.opponent(), &theme);

    widgets::moves::render(frame, rows[2], ctx.view, &theme);
    widgets::messages::render(frame, rows[3], ctx.messages, &theme);
    widgets::footer::render(frame, rows[4], ctx.opponent_auto);
}
