//! Trait describing a runnable client front-end.
use anyhow::Result;
use battle_runtime::BattleSession;

/// Frontend abstraction for UI layers.
///
/// Frontends drive the game through a [`BattleSession`]:
/// - Subscribe to state snapshots
/// - Submit the player's move choices
/// - Trigger saves, loads and resets
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
pub trait Frontend {
    /// Run the frontend event loop.
    ///
    /// Takes ownership of the session and blocks until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    fn run(&mut self, session: BattleSession) -> Result<()>;
}
