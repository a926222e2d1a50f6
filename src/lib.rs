//! addrbook - a validated, file-backed address book
//!
//! - `validation`: per-field grammars, all-or-nothing acceptance
//! - `store`: ordered contact collection persisted as one slot value
//! - `book`: form-submission flow tying the two together
//! - `regions`: reference list of region names for the state picker
//! - `api` / `cli`: JSON request surface and command-line front end

pub mod api;
pub mod book;
pub mod cli;
pub mod observability;
pub mod regions;
pub mod store;
pub mod validation;

pub use book::{AddressBook, BookError, BookResult, FormMode};
pub use store::{ContactRecord, FileSlots, IdPolicy, MemorySlots, RecordStore, SlotBackend};
pub use validation::{validate, ContactPayload, Field, RawFields, ValidationFailure};
