//! Terminal frontend for the battle client.
//!
//! Renders the battle with ratatui and maps keystrokes onto
//! [`battle_runtime::BattleSession`] calls.
mod app;
mod config;
mod input;
pub mod logging;
mod presentation;
mod start_screen;
mod state;

pub use app::CliFrontend;
pub use client_frontend_core::FrontendConfig;
pub use config::{CliConfig, UiConfig};
pub use start_screen::StartChoice;
