//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from repositories, roster loading and state restores so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use battle_core::{RestoreError, RosterError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("saved battle cannot be restored: {0}")]
    Restore(#[from] RestoreError),

    #[error("invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("failed to load roster: {0}")]
    RosterLoad(String),

    #[error("{0} storage is not available in this build")]
    StorageUnavailable(&'static str),
}
