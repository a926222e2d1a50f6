//! Record Store for addrbook
//!
//! Owns the ordered collection of contact records and the single slot it
//! is persisted in. The collection is one unit of persistence: every
//! mutation reads the slot, applies the change, and writes the whole
//! collection back with one slot write.
//!
//! # Guarantees
//!
//! - Insertion order is preserved; update never reorders, delete keeps
//!   the relative order of the rest
//! - Ids are positive, unique within the collection, and never change
//! - An absent or unparseable slot reads as an empty collection
//! - Update/delete of an unknown id writes nothing and reports not-found

mod errors;
mod file_slots;
mod ids;
mod memory_slots;
mod record;
mod slot;
#[allow(clippy::module_inception)]
mod store;

pub use errors::{StoreError, StoreResult};
pub use file_slots::FileSlots;
pub use ids::IdPolicy;
pub use memory_slots::MemorySlots;
pub use record::ContactRecord;
pub use slot::{validate_slot_key, SlotBackend};
pub use store::{RecordStore, DEFAULT_SLOT};
