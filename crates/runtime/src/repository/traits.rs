//! Repository contracts for saving and loading battles.

use battle_core::{Combatant, SaveSlot, Side};

use super::Result;
use super::types::{RecordId, SavedBattle};

/// Relational store of full battles.
///
/// Every save creates a new record; nothing is ever overwritten.
/// Implementations must be atomic: a failed save leaves no partial record.
pub trait BattleRepository: Send + Sync {
    /// Persist both combatants and whose turn it is under `label`.
    fn save(&self, label: &str, turn: Side, a: &Combatant, b: &Combatant) -> Result<RecordId>;

    /// Most recent record, by timestamp and then by id.
    ///
    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when nothing was ever saved.
    fn load_latest(&self) -> Result<SavedBattle>;

    /// Number of stored battles.
    fn count(&self) -> Result<usize>;
}

/// Single-slot store for the compact progress record.
///
/// A write replaces whatever the slot held before.
pub trait SlotRepository: Send + Sync {
    fn write(&self, slot: &SaveSlot) -> Result<()>;

    /// Returns [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when the slot is empty.
    fn read(&self) -> Result<SaveSlot>;
}
