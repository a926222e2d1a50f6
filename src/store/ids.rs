//! Identifier assignment

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::record::ContactRecord;

/// How `create` picks the id of a new record.
///
/// - `MaxPlusOne`: one more than the largest id present, 1 when empty.
///   Never duplicates an id in the collection, whatever the stored order.
///   Deleting the current maximum frees that id for the next create.
/// - `LastPlusOne`: one more than the id of the last record in insertion
///   order, 1 when empty. Reads and writes collections exactly as the legacy
///   widget did. Duplicates an id when the last record does not hold the
///   maximum, which only happens with collections not written by this store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    #[default]
    MaxPlusOne,
    LastPlusOne,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPolicy::MaxPlusOne => "max_plus_one",
            IdPolicy::LastPlusOne => "last_plus_one",
        }
    }

    /// Next id for a collection
    pub fn next_id(&self, records: &[ContactRecord]) -> StoreResult<u64> {
        let base = match self {
            IdPolicy::MaxPlusOne => records.iter().map(ContactRecord::id).max(),
            IdPolicy::LastPlusOne => records.last().map(ContactRecord::id),
        };

        base.unwrap_or(0)
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)
    }
}
