//! In-memory SlotRepository implementation.

use std::sync::RwLock;

use battle_core::SaveSlot;

use crate::repository::{RepositoryError, Result, SlotRepository};

/// Keeps the save slot in memory, e.g. when no save file is configured.
#[derive(Default)]
pub struct InMemorySlotRepo {
    slot: RwLock<Option<SaveSlot>>,
}

impl InMemorySlotRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotRepository for InMemorySlotRepo {
    fn write(&self, slot: &SaveSlot) -> Result<()> {
        let mut current = self
            .slot
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(slot.clone());
        Ok(())
    }

    fn read(&self) -> Result<SaveSlot> {
        let current = self
            .slot
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        current.clone().ok_or(RepositoryError::NotFound)
    }
}
