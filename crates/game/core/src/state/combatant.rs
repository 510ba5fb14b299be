use super::{Move, RestoreError};
use crate::config::BattleConfig;

/// One side's in-battle entity: a name, a health fraction and four moves.
///
/// Health is a fraction of the maximum in `[0, 1]` and never goes negative.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    health: f64,
    moves: [Move; BattleConfig::MOVES_PER_COMBATANT],
}

impl Combatant {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, moves: [Move; BattleConfig::MOVES_PER_COMBATANT]) -> Self {
        Self {
            name: name.into(),
            health: 1.0,
            moves,
        }
    }

    /// Rebuilds a combatant from persisted fields.
    pub fn from_parts(
        name: impl Into<String>,
        health: f64,
        moves: [Move; BattleConfig::MOVES_PER_COMBATANT],
    ) -> Result<Self, RestoreError> {
        let name = name.into();
        if !(0.0..=1.0).contains(&health) {
            return Err(RestoreError::HealthOutOfRange {
                name,
                value: health,
            });
        }
        Ok(Self {
            name,
            health,
            moves,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    /// Health as a whole percentage, rounded to the nearest integer.
    pub fn health_percent(&self) -> u8 {
        (self.health * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    pub fn moves(&self) -> &[Move; BattleConfig::MOVES_PER_COMBATANT] {
        &self.moves
    }

    pub fn move_at(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    pub(crate) fn move_at_mut(&mut self, index: usize) -> Option<&mut Move> {
        self.moves.get_mut(index)
    }

    /// Removes `amount` of health and returns what is left.
    ///
    /// The result is clamped to `[0, 1]`; values within
    /// [`BattleConfig::HEALTH_EPSILON`] of zero become exactly zero.
    pub(crate) fn take_damage(&mut self, amount: f64) -> f64 {
        let remaining = self.health - amount;
        self.health = if remaining <= BattleConfig::HEALTH_EPSILON {
            0.0
        } else {
            remaining.min(1.0)
        };
        self.health
    }

    pub(crate) fn set_health(&mut self, health: f64) {
        self.health = health;
    }

    pub(crate) fn set_moves(&mut self, moves: [Move; BattleConfig::MOVES_PER_COMBATANT]) {
        self.moves = moves;
    }

    /// Full health and full PP on every move.
    pub fn reset(&mut self) {
        self.health = 1.0;
        for mv in &mut self.moves {
            mv.reset();
        }
    }
}
