//! Pumps engine notifications, user input and rendering for the CLI client.
use std::time::Duration;

use anyhow::Result;
use battle_core::RngOracle;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::{AppState, Flow};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop<'a, R: RngOracle> {
    state: AppState<R>,
    input: InputHandler,
    config: &'a CliConfig,
}

impl<'a, R: RngOracle> EventLoop<'a, R> {
    pub fn new(state: AppState<R>, config: &'a CliConfig) -> Self {
        Self {
            state,
            input: InputHandler::new(),
            config,
        }
    }

    /// Runs until the player quits; returns the final state.
    pub fn run(mut self, terminal: &mut Tui) -> Result<AppState<R>> {
        self.render(terminal)?;

        loop {
            if !event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
                if self.state.sync() {
                    self.render(terminal)?;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = self.input.handle_key(key);
                    tracing::trace!("Key {:?} -> {:?}", key.code, action);
                    if self.state.handle(action) == Flow::Quit {
                        break;
                    }
                    self.render(terminal)?;
                }
                Event::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }

        Ok(self.state)
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                view: self.state.view(),
                messages: self.state.messages(),
                round: self.state.round(),
                opponent_auto: self.state.opponent_auto(),
                message_panel_height: self.config.ui.message_panel_height,
            },
        )
    }
}
