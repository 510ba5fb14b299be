//! Turn resolution and the battle state machine.
//!
//! The [`BattleEngine`] is the only writer of [`BattleState`]. States are
//! `Active(A)`, `Active(B)` and `Over(winner)`; a battle starts in
//! `Active(A)`, alternates on every landed hit and stays in `Over` until it is
//! reset or replaced by a restore.

mod observer;
mod result;
mod snapshot;

pub use observer::BattleObserver;
pub use result::{AttackRejection, AttackResult, HitReport};
pub use snapshot::{BattleSnapshot, CombatantView, GameOver, MoveView};

use crate::config::BattleConfig;
use crate::rng::{PcgRng, RngOracle};
use crate::roster::{Roster, RosterError};
use crate::state::{BattleState, RestoreError, SaveSlot, Side};

/// Battle engine owning the state, the injected RNG and the observers.
pub struct BattleEngine<R = PcgRng> {
    state: BattleState,
    config: BattleConfig,
    rng: R,
    observers: Vec<Box<dyn BattleObserver>>,
}

impl<R: RngOracle> BattleEngine<R> {
    /// Creates an engine around a fresh battle.
    pub fn new(state: BattleState, rng: R) -> Self {
        Self::with_config(state, BattleConfig::default(), rng)
    }

    pub fn with_config(state: BattleState, config: BattleConfig, rng: R) -> Self {
        Self {
            state,
            config,
            rng,
            observers: Vec::new(),
        }
    }

    /// Builds the combatants from a roster and starts a fresh battle.
    pub fn from_roster(roster: &Roster, rng: R) -> Result<Self, RosterError> {
        Ok(Self::new(roster.build_state()?, rng))
    }

    /// Registers an observer for state-change notifications.
    pub fn subscribe(&mut self, observer: impl BattleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot::capture(&self.state)
    }

    pub fn save_slot(&self) -> SaveSlot {
        SaveSlot::capture(&self.state)
    }

    /// Resolves one attack by `side` with the move at `move_index`.
    ///
    /// Spends one PP, removes `power / 100` of the defender's health and
    /// either ends the battle (defender at zero, turn kept) or passes the turn.
    /// Rejected attacks leave the state untouched.
    pub fn attack(&mut self, side: Side, move_index: usize) -> AttackResult {
        if let Err(reason) = self.validate_attack(side, move_index) {
            return reason.into();
        }

        let attacker = self.state.combatant_mut(side);
        let Some(mv) = attacker.move_at_mut(move_index) else {
            return AttackRejection::InvalidMove { index: move_index }.into();
        };
        if !mv.consume() {
            return AttackRejection::NoPp {
                index: move_index,
                name: mv.name().to_string(),
            }
            .into();
        }
        let damage = mv.damage();
        let move_name = mv.name().to_string();
        let pp_remaining = mv.pp_current();

        let defender = self.state.combatant_mut(side.opponent());
        let defender_health = defender.take_damage(damage);
        let defeated = defender.is_defeated();

        if defeated {
            self.state.finish(side);
        } else {
            self.state.flip_turn();
        }

        self.notify();

        AttackResult::Hit(HitReport {
            attacker: side,
            move_index,
            move_name,
            damage,
            defender_health,
            pp_remaining,
            defeated,
        })
    }

    /// Lets side B pick a random move and attack with it.
    ///
    /// Returns `None` when no attack happened.
    pub fn random_opponent_attack(&mut self) -> Option<AttackResult> {
        self.random_attack(Side::B)
    }

    /// Draws a move uniformly for `side`, redrawing while the pick has no PP.
    ///
    /// Gives up after [`BattleConfig::opponent_draw_limit`] draws in total, so
    /// this can return `None` even though a usable move exists. Also returns
    /// `None`, without drawing, once the battle is over or when it is not
    /// `side`'s turn.
    pub fn random_attack(&mut self, side: Side) -> Option<AttackResult> {
        if self.state.is_over() || self.state.active_turn() != side {
            return None;
        }

        let moves = self.state.combatant(side).moves();
        let draw_limit = self.config.opponent_draw_limit.max(1);

        let mut index = self.rng.pick_index(moves.len());
        let mut draws = 1;
        while moves[index].is_depleted() && draws < draw_limit {
            index = self.rng.pick_index(moves.len());
            draws += 1;
        }

        if moves[index].is_depleted() {
            return None;
        }
        Some(self.attack(side, index))
    }

    /// Gives up `side`'s turn without attacking.
    ///
    /// Used when a random draw finds nothing to play, so the other side is
    /// not blocked forever. No PP or health changes.
    pub fn pass_turn(&mut self, side: Side) -> Result<(), AttackRejection> {
        if self.state.is_over() {
            return Err(AttackRejection::BattleOver);
        }
        let active = self.state.active_turn();
        if side != active {
            return Err(AttackRejection::OutOfTurn {
                attempted: side,
                active,
            });
        }
        self.state.flip_turn();
        self.notify();
        Ok(())
    }

    /// Restores both combatants to full health and PP and gives side A the turn.
    pub fn reset_battle(&mut self) {
        self.state.reset();
        self.notify();
    }

    /// Replaces the whole battle with a previously persisted one.
    pub fn restore_state(&mut self, state: BattleState) {
        self.state = state;
        self.notify();
    }

    /// Applies a compact save record to the current combatants.
    ///
    /// Validation happens on a copy; on error the engine is unchanged.
    pub fn apply_save_slot(&mut self, slot: &SaveSlot) -> Result<(), RestoreError> {
        let next = slot.apply_to(&self.state)?;
        self.restore_state(next);
        Ok(())
    }

    fn validate_attack(&self, side: Side, move_index: usize) -> Result<(), AttackRejection> {
        if self.state.is_over() {
            return Err(AttackRejection::BattleOver);
        }

        let active = self.state.active_turn();
        if side != active {
            return Err(AttackRejection::OutOfTurn {
                attempted: side,
                active,
            });
        }

        if self.state.combatant(side).move_at(move_index).is_none() {
            return Err(AttackRejection::InvalidMove { index: move_index });
        }

        Ok(())
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_state_changed(&snapshot);
        }
    }
}
