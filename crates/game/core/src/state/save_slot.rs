use strum::IntoEnumIterator;

use super::{BattleState, RestoreError, Side};
use crate::config::BattleConfig;

/// Compact progress record: both healths, the turn and every move's PP.
///
/// Names, powers and max PP are not part of the record; they come from the
/// battle the slot is applied to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveSlot {
    pub health: [f64; BattleConfig::SIDES],
    pub active_turn: Side,
    pub pp: [[u32; BattleConfig::MOVES_PER_COMBATANT]; BattleConfig::SIDES],
}

impl SaveSlot {
    /// Captures the progress of a battle.
    pub fn capture(state: &BattleState) -> Self {
        let side_pp = |side: Side| {
            let moves = state.combatant(side).moves();
            std::array::from_fn(|slot| moves[slot].pp_current())
        };

        Self {
            health: [
                state.combatant(Side::A).health(),
                state.combatant(Side::B).health(),
            ],
            active_turn: state.active_turn(),
            pp: [side_pp(Side::A), side_pp(Side::B)],
        }
    }

    /// Produces a copy of `base` with this slot's progress applied.
    ///
    /// `base` is never modified, so callers can validate before committing.
    pub fn apply_to(&self, base: &BattleState) -> Result<BattleState, RestoreError> {
        let mut next = base.clone();

        for side in Side::iter() {
            let health = self.health[side.index()];
            let combatant = next.combatant_mut(side);
            if !(0.0..=1.0).contains(&health) {
                return Err(RestoreError::HealthOutOfRange {
                    name: combatant.name().to_string(),
                    value: health,
                });
            }

            let mut moves = combatant.moves().clone();
            for (slot, mv) in moves.iter_mut().enumerate() {
                let value = self.pp[side.index()][slot];
                *mv = mv
                    .with_pp_current(value)
                    .ok_or(RestoreError::PpOutOfRange {
                        side,
                        slot,
                        value,
                        max: mv.pp_max(),
                    })?;
            }

            combatant.set_health(health);
            combatant.set_moves(moves);
        }

        next.set_active_turn(self.active_turn);
        next.refresh_outcome()?;
        Ok(next)
    }
}
