//! Colors and emphasis rules for the battle screen.
use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct BattleTheme;

impl BattleTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_health(&self, percent: u8) -> Style {
        let color = match percent {
            50..=100 => Color::Green,
            25..=49 => Color::Yellow,
            1..=24 => Color::LightRed,
            _ => Color::Red,
        };
        Style::default().fg(color)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn style_title(&self, active: bool, defeated: bool) -> Style {
        if defeated {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if active {
            self.emphasize_current(Style::default().fg(Color::Yellow))
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn emphasize_current(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}
