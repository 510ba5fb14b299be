//! Top-level client wiring a battle session to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ BattleSession (engine, save repository, save file)
//!   └─→ Frontend (UI layer - CLI, etc.)
//! ```
//!
//! Both layers are built independently and injected through
//! [`ClientBuilder`].

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use battle_runtime::BattleSession;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives the session and the frontend
/// 2. `Client::run()` hands the session to the frontend and blocks until it returns
pub struct Client {
    session: BattleSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub fn run(self) -> Result<()> {
        let Self {
            session,
            mut frontend,
        } = self;

        tracing::info!("Starting frontend");
        let result = frontend.run(session);

        match &result {
            Ok(()) => tracing::info!("Frontend exited"),
            Err(e) => tracing::error!("Frontend failed: {:#}", e),
        }
        result
    }
}
