//! Start screen for choosing a fresh battle or the latest save.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::terminal::Tui;

/// User's choice from the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    NewBattle,
    LoadLatest,
    Quit,
}

impl StartChoice {
    const MENU: [StartChoice; 3] = [Self::NewBattle, Self::LoadLatest, Self::Quit];

    fn label(self, saved_battles: usize) -> String {
        match self {
            Self::NewBattle => "New battle".to_string(),
            Self::LoadLatest => format!("Load latest save ({saved_battles} saved)"),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Show the start screen and get the user's choice.
pub fn show_start_screen(terminal: &mut Tui, saved_battles: usize) -> Result<StartChoice> {
    let mut selected = 0;

    loop {
        terminal.draw(|f| render_start_screen(f, selected, saved_battles))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    selected = selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    selected = (selected + 1).min(StartChoice::MENU.len() - 1);
                }
                KeyCode::Enter => return Ok(StartChoice::MENU[selected]),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(StartChoice::Quit),
                _ => {}
            }
        }
    }
}

fn render_start_screen(frame: &mut Frame, selected: usize, saved_battles: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Menu
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_menu(frame, chunks[1], selected, saved_battles);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "BATTLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Turn-based duel",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_menu(frame: &mut Frame, area: Rect, selected: usize, saved_battles: usize) {
    let items: Vec<ListItem> = StartChoice::MENU
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let is_selected = index == selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(choice.label(saved_battles), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Start ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" confirm  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
