//! Battle client binary.
//!
//! Composition root: builds the battle session and the frontend from the
//! environment, injects both into [`battle_client::Client`], and runs it.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal UI (default)
//! - `sqlite`: SQLite save repository (default)
//!
//! # Examples
//!
//! ```bash
//! # Seeded battle kept in memory only
//! BATTLE_STORAGE=memory BATTLE_SEED=7 cargo run -p battle-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use battle_client::Client;
    use battle_runtime::{BattleSession, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&cli_config.session_id)?;

    tracing::info!("Starting battle client");
    tracing::info!("Storage: {}", runtime_config.storage);
    tracing::info!("Opponent auto: {}", runtime_config.opponent_auto);

    // 3. Build the battle session (independent layer)
    tracing::debug!("Building battle session...");
    let session = BattleSession::builder().config(runtime_config).build()?;

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .session(session)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
