//! Presentation-facing view of the battle.
//!
//! A [`BattleSnapshot`] carries everything a UI needs to render one frame:
//! display percentages, PP counters, the turn label and the game-over flag.
//! It is derived from [`BattleState`] and owns its data, so observers can keep
//! it around after the engine moves on.

use crate::config::BattleConfig;
use crate::state::{BattleState, Combatant, Move, Side};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveView {
    pub name: String,
    pub pp_current: u32,
    pub pp_max: u32,
}

impl From<&Move> for MoveView {
    fn from(mv: &Move) -> Self {
        Self {
            name: mv.name().to_string(),
            pp_current: mv.pp_current(),
            pp_max: mv.pp_max(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub side: Side,
    pub name: String,
    /// Health as 0–100, rounded to the nearest integer.
    pub health_percent: u8,
    pub moves: [MoveView; BattleConfig::MOVES_PER_COMBATANT],
}

impl CombatantView {
    fn new(side: Side, combatant: &Combatant) -> Self {
        let moves = combatant.moves();
        Self {
            side,
            name: combatant.name().to_string(),
            health_percent: combatant.health_percent(),
            moves: std::array::from_fn(|slot| MoveView::from(&moves[slot])),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOver {
    pub winner: Side,
    pub winner_name: String,
    pub loser_name: String,
}

/// State-change notification delivered to observers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub combatants: [CombatantView; BattleConfig::SIDES],
    pub active_turn: Side,
    pub turn_label: String,
    pub game_over: Option<GameOver>,
}

impl BattleSnapshot {
    pub fn capture(state: &BattleState) -> Self {
        let game_over = state.outcome().map(|outcome| GameOver {
            winner: outcome.winner,
            winner_name: state.combatant(outcome.winner).name().to_string(),
            loser_name: state.combatant(outcome.loser()).name().to_string(),
        });

        let turn_label = match &game_over {
            Some(over) => format!("{} has been defeated!", over.loser_name),
            None => format!("Turn of {}", state.combatant(state.active_turn()).name()),
        };

        Self {
            combatants: [
                CombatantView::new(Side::A, state.combatant(Side::A)),
                CombatantView::new(Side::B, state.combatant(Side::B)),
            ],
            active_turn: state.active_turn(),
            turn_label,
            game_over,
        }
    }

    pub fn combatant(&self, side: Side) -> &CombatantView {
        &self.combatants[side.index()]
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }
}
