//! Records exchanged with battle repositories.

use std::fmt;

use battle_core::{BattleState, Combatant, RestoreError, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

/// Identifier assigned to a saved battle by its repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A full battle as persisted in a [`BattleRepository`](super::BattleRepository).
///
/// Unlike the flat-file save slot this carries names, powers and max PP, so
/// it can rebuild a battle without a roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedBattle {
    pub id: RecordId,
    pub label: String,
    pub active_turn: Side,
    pub saved_at: DateTime<Utc>,
    pub combatant_a: Combatant,
    pub combatant_b: Combatant,
}

impl SavedBattle {
    /// Rebuilds the battle state, re-deriving the outcome from health.
    pub fn into_state(self) -> std::result::Result<BattleState, RestoreError> {
        BattleState::from_parts(self.combatant_a, self.combatant_b, self.active_turn)
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::A => &self.combatant_a,
            Side::B => &self.combatant_b,
        }
    }

    /// Pretty-printed JSON, used for debug logging and exports.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RepositoryError::Json(e.to_string()))
    }
}
