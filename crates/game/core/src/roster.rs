//! Static definitions that combatants are built from.
//!
//! A [`Roster`] names the two combatants of a battle and their moves. It is
//! plain data (RON files in `battle-content`) and is validated when turned
//! into a [`BattleState`].

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::state::{BattleState, Combatant, Move};

/// Errors raised while building combatants from roster data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("'{combatant}' has {count} moves, expected {expected}")]
    WrongMoveCount {
        combatant: String,
        count: usize,
        expected: usize,
    },

    #[error("move '{name}' must have positive max PP")]
    ZeroMaxPp { name: String },

    #[error("move '{name}' has invalid power {power}")]
    InvalidPower { name: String, power: f64 },
}

/// Definition of a single move.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSpec {
    pub name: String,
    pub power: f64,
    pub pp_max: u32,
}

impl MoveSpec {
    pub fn new(name: impl Into<String>, power: f64, pp_max: u32) -> Self {
        Self {
            name: name.into(),
            power,
            pp_max,
        }
    }

    pub fn build(&self) -> Result<Move, RosterError> {
        if self.pp_max == 0 {
            return Err(RosterError::ZeroMaxPp {
                name: self.name.clone(),
            });
        }
        if !self.power.is_finite() || self.power < 0.0 {
            return Err(RosterError::InvalidPower {
                name: self.name.clone(),
                power: self.power,
            });
        }
        Ok(Move::new(self.name.clone(), self.power, self.pp_max))
    }
}

/// Definition of a combatant and its move set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub moves: Vec<MoveSpec>,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, moves: Vec<MoveSpec>) -> Self {
        Self {
            name: name.into(),
            moves,
        }
    }

    pub fn build(&self) -> Result<Combatant, RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }

        let wrong_count = || RosterError::WrongMoveCount {
            combatant: self.name.clone(),
            count: self.moves.len(),
            expected: BattleConfig::MOVES_PER_COMBATANT,
        };
        if self.moves.len() != BattleConfig::MOVES_PER_COMBATANT {
            return Err(wrong_count());
        }

        let mut moves = ArrayVec::<Move, { BattleConfig::MOVES_PER_COMBATANT }>::new();
        for spec in &self.moves {
            moves.push(spec.build()?);
        }
        let moves = moves.into_inner().map_err(|_| wrong_count())?;

        Ok(Combatant::new(self.name.clone(), moves))
    }
}

/// The two combatants that meet in a battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    pub a: CombatantSpec,
    pub b: CombatantSpec,
}

impl Roster {
    pub fn new(a: CombatantSpec, b: CombatantSpec) -> Self {
        Self { a, b }
    }

    /// Builds a fresh battle from this roster.
    pub fn build_state(&self) -> Result<BattleState, RosterError> {
        Ok(BattleState::new(self.a.build()?, self.b.build()?))
    }
}
