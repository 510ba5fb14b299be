//! In-memory repository implementations for testing and development.

mod battle;
mod slot;

pub use battle::InMemoryBattleRepository;
pub use slot::InMemorySlotRepo;
