//! In-memory BattleRepository implementation for tests and local runs.

use std::sync::RwLock;

use battle_core::{Combatant, Side};
use chrono::Utc;

use crate::repository::{BattleRepository, RecordId, RepositoryError, Result, SavedBattle};

/// In-memory implementation of BattleRepository.
///
/// Records live in insertion order; ids start at 1.
pub struct InMemoryBattleRepository {
    records: RwLock<Vec<SavedBattle>>,
}

impl InMemoryBattleRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBattleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRepository for InMemoryBattleRepository {
    fn save(&self, label: &str, turn: Side, a: &Combatant, b: &Combatant) -> Result<RecordId> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let id = RecordId(records.len() as i64 + 1);
        records.push(SavedBattle {
            id,
            label: label.to_string(),
            active_turn: turn,
            saved_at: Utc::now(),
            combatant_a: a.clone(),
            combatant_b: b.clone(),
        });

        tracing::debug!("Saved battle {} in memory", id);
        Ok(id)
    }

    fn load_latest(&self) -> Result<SavedBattle> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        records
            .iter()
            .max_by(|x, y| x.saved_at.cmp(&y.saved_at).then(x.id.cmp(&y.id)))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn count(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.len())
    }
}
