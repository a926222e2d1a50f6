//! Key-value slot abstraction

use std::fmt::Debug;

use super::errors::{StoreError, StoreResult};

/// A durable location holding one serialized value per key.
///
/// `write_slot` must replace the stored value as a single unit: readers
/// see either the old value or the new one.
pub trait SlotBackend: Debug {
    /// Read the value under `key`, `None` if the slot was never written
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    fn write_slot(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Slot keys double as file stems, so they are limited to `[A-Za-z0-9_-]+`.
pub fn validate_slot_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidSlotKey(key.to_string()))
    }
}
