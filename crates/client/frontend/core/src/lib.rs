//! Cross-frontend primitives for presenting a battle.
//!
//! Houses message logging, round narration and view-model types that both
//! the CLI and future graphical clients can reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{BattleView, CombatantPanel, MoveButton};
