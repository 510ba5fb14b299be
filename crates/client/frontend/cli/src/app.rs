//! [`Frontend`] implementation for the terminal.
use anyhow::Result;
use battle_runtime::BattleSession;
use client_frontend_core::{Frontend, FrontendConfig};

use crate::config::CliConfig;
use crate::presentation::{event_loop::EventLoop, terminal};
use crate::start_screen::{StartChoice, show_start_screen};
use crate::state::AppState;

/// Terminal battle UI built on ratatui.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, session: BattleSession) -> Result<()> {
        let saved_battles = session.saved_battle_count().unwrap_or_else(|e| {
            tracing::warn!("Could not count saved battles: {}", e);
            0
        });

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let choice = show_start_screen(&mut terminal, saved_battles)?;
        tracing::info!("Start screen choice: {:?}", choice);

        let mut state = AppState::new(session, &self.frontend_config);
        match choice {
            StartChoice::Quit => return Ok(()),
            StartChoice::LoadLatest => state.load_database(),
            StartChoice::NewBattle => {}
        }
        state.sync();

        let state = EventLoop::new(state, &self.cli_config).run(&mut terminal)?;
        tracing::info!(
            "Frontend stopped after {} rounds: {}",
            state.round(),
            state.view().turn_label
        );

        Ok(())
    }
}
