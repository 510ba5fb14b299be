//! Deterministic battle rules and data types shared across clients.
//!
//! `battle-core` defines the canonical rules (moves, combatants, turn
//! resolution) and exposes pure APIs reused by the runtime and frontends.
//! All state mutation flows through [`engine::BattleEngine`]; presentation
//! layers observe it through [`engine::BattleObserver`] and never touch the
//! state directly.
pub mod config;
pub mod engine;
pub mod rng;
pub mod roster;
pub mod state;

pub use config::BattleConfig;
pub use engine::{
    AttackRejection, AttackResult, BattleEngine, BattleObserver, BattleSnapshot, CombatantView,
    GameOver, HitReport, MoveView,
};
pub use rng::{PcgRng, RngOracle};
pub use roster::{CombatantSpec, MoveSpec, Roster, RosterError};
pub use state::{BattleState, Combatant, Move, Outcome, RestoreError, SaveSlot, Side};
