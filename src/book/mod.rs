//! Address book: validation in front of the record store
//!
//! This is the surface a form UI drives. A submission is validated in full
//! before the store is touched, so a rejected form never changes the
//! collection.

mod errors;

pub use errors::{BookError, BookResult};

use crate::observability::{log_event_with_fields, Event};
use crate::store::{ContactRecord, RecordStore, SlotBackend, StoreError};
use crate::validation::{validate, ContactPayload, RawFields, ValidationFailure};

/// What a form submission does on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// New record; the store assigns the id
    Add,
    /// Overwrite the record with this id
    Update(u64),
}

#[derive(Debug)]
pub struct AddressBook<B: SlotBackend> {
    store: RecordStore<B>,
}

impl<B: SlotBackend> AddressBook<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn into_store(self) -> RecordStore<B> {
        self.store
    }

    /// Validates a submission without storing it.
    pub fn check(&self, raw: &RawFields) -> Result<ContactPayload, ValidationFailure> {
        validate(raw).map_err(|failure| {
            let fields = failure.field_names().join(",");
            log_event_with_fields(Event::ValidationRejected, &[("fields", fields.as_str())]);
            failure
        })
    }

    /// Handles a form save in either mode.
    pub fn submit(&mut self, mode: FormMode, raw: &RawFields) -> BookResult<ContactRecord> {
        let payload = self.check(raw)?;

        let record = match mode {
            FormMode::Add => self.store.create(payload)?,
            FormMode::Update(id) => self.store.update(id, payload)?,
        };

        Ok(record)
    }

    pub fn add(&mut self, raw: &RawFields) -> BookResult<ContactRecord> {
        self.submit(FormMode::Add, raw)
    }

    pub fn edit(&mut self, id: u64, raw: &RawFields) -> BookResult<ContactRecord> {
        self.submit(FormMode::Update(id), raw)
    }

    pub fn remove(&mut self, id: u64) -> BookResult<ContactRecord> {
        Ok(self.store.delete(id)?)
    }

    /// All contacts in insertion order
    pub fn contacts(&self) -> Vec<ContactRecord> {
        self.store.list()
    }

    pub fn contact(&self, id: u64) -> BookResult<ContactRecord> {
        self.store
            .find(id)
            .ok_or_else(|| BookError::Store(StoreError::NotFound(id)))
    }

    /// Current values of a record as form input, for the edit form.
    pub fn edit_form(&self, id: u64) -> BookResult<RawFields> {
        Ok(self.contact(id)?.payload().to_raw())
    }
}
