//! Outcome of one player round.

use battle_core::{AttackResult, HitReport};

/// What the opponent did after the player's attack.
#[derive(Clone, Debug, PartialEq)]
pub enum OpponentTurn {
    /// The opponent drew a usable move and attacked.
    Attacked(AttackResult),
    /// No usable move turned up within the draw limit; the turn went back.
    Passed,
}

/// Player attack followed by the opponent's automatic response, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    pub player: AttackResult,
    /// The player had no PP left on any move, so the turn went to the opponent.
    pub player_passed: bool,
    pub opponent: Option<OpponentTurn>,
}

impl RoundReport {
    pub fn player_hit(&self) -> Option<&HitReport> {
        self.player.hit()
    }

    pub fn opponent_hit(&self) -> Option<&HitReport> {
        match &self.opponent {
            Some(OpponentTurn::Attacked(result)) => result.hit(),
            _ => None,
        }
    }
}
