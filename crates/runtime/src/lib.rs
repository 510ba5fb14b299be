//! Runtime orchestration for turn-based battles.
//!
//! This crate wires the battle engine to its persistence collaborators and a
//! random source. Consumers build a [`BattleSession`] from a
//! [`RuntimeConfig`] and drive it one player round at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`api`] exposes the error and report types downstream clients handle
//! - [`repository`] provides the database, in-memory and flat-file stores
//! - [`config`] reads settings from the environment
pub mod api;
pub mod config;
pub mod repository;
pub mod rng;
pub mod session;

pub use api::{OpponentTurn, Result, RoundReport, RuntimeError};
pub use config::{RuntimeConfig, StorageKind};
#[cfg(feature = "sqlite")]
pub use repository::SqliteBattleRepository;
pub use repository::{
    BattleRepository, FlatFileSave, InMemoryBattleRepository, InMemorySlotRepo, RecordId,
    RepositoryError, SavedBattle, SlotRepository,
};
pub use rng::EntropyRng;
pub use session::{BattleSession, SessionBuilder};
