//! In-process slot backend

use std::collections::HashMap;

use super::errors::StoreResult;
use super::slot::{validate_slot_key, SlotBackend};

/// Slots held in memory. Nothing survives the process; moving the backend
/// out of one store and into another simulates a restart.
#[derive(Debug, Default, Clone)]
pub struct MemorySlots {
    slots: HashMap<String, String>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotBackend for MemorySlots {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        validate_slot_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write_slot(&mut self, key: &str, value: &str) -> StoreResult<()> {
        validate_slot_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
