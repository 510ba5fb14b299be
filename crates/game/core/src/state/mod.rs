//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe moves, combatants and
//! the turn cursor. Outer layers clone or query this state but mutate it
//! exclusively through [`crate::BattleEngine`].
mod battle;
mod combatant;
mod error;
mod moves;
mod save_slot;
mod side;

pub use battle::BattleState;
pub use combatant::Combatant;
pub use error::RestoreError;
pub use moves::Move;
pub use save_slot::SaveSlot;
pub use side::{Outcome, Side};
