//! Repository layer for saved battles.
//!
//! Two persistence shapes exist side by side:
//! - [`BattleRepository`] keeps every save as a full record (names, powers,
//!   max PP) and answers "latest save"
//! - [`SlotRepository`] holds one compact [`battle_core::SaveSlot`] that is
//!   overwritten on every write

mod error;
mod file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FlatFileSave;
pub use memory::{InMemoryBattleRepository, InMemorySlotRepo};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBattleRepository;
pub use traits::{BattleRepository, SlotRepository};
pub use types::{RecordId, SavedBattle};
