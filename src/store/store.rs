//! RecordStore: CRUD over the persisted collection

use crate::observability::{log_event_with_fields, Event};
use crate::validation::ContactPayload;

use super::errors::{StoreError, StoreResult};
use super::ids::IdPolicy;
use super::record::{parse_collection, ContactRecord};
use super::slot::{validate_slot_key, SlotBackend};

/// Slot key used when none is configured
pub const DEFAULT_SLOT: &str = "addressBook";

/// Ordered contact collection persisted under one slot.
///
/// Holds no cached copy: every call reads the slot, so the slot is the
/// single source of truth.
#[derive(Debug)]
pub struct RecordStore<B: SlotBackend> {
    backend: B,
    slot: String,
    id_policy: IdPolicy,
}

impl<B: SlotBackend> RecordStore<B> {
    /// Binds a store to `slot` on `backend`.
    ///
    /// # Errors
    ///
    /// `StoreError::InvalidSlotKey` if the key is empty or contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn open(backend: B, slot: impl Into<String>) -> StoreResult<Self> {
        let slot = slot.into();
        validate_slot_key(&slot)?;

        log_event_with_fields(Event::StoreOpened, &[("slot", slot.as_str())]);

        Ok(Self {
            backend,
            slot,
            id_policy: IdPolicy::default(),
        })
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases the backend, e.g. to reopen it as a fresh store.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// All records in insertion order.
    ///
    /// Never fails: an absent slot is a first run, and an unreadable or
    /// unparseable slot is logged and read as empty.
    pub fn list(&self) -> Vec<ContactRecord> {
        self.load_lenient()
    }

    /// The record with `id`, if present
    pub fn find(&self, id: u64) -> Option<ContactRecord> {
        self.load_lenient().into_iter().find(|r| r.id() == id)
    }

    /// Number of records. Reads and parses the slot on every call; use
    /// `list().len()` when the records are needed too.
    pub fn len(&self) -> usize {
        self.list().len()
    }

    /// Reads the slot like [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a new record with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// `StoreError::IoError` if the slot exists but cannot be read; nothing
    /// is written, so the stored collection survives.
    pub fn create(&mut self, payload: ContactPayload) -> StoreResult<ContactRecord> {
        let mut records = self.load_for_write()?;
        let id = self.id_policy.next_id(&records)?;

        let record = ContactRecord::new(id, payload);
        records.push(record.clone());
        self.persist(&records)?;

        self.log_record_event(Event::RecordCreated, id);

        Ok(record)
    }

    /// Overwrites every field of record `id` except the id, in place.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no record has `id`, or `StoreError::IoError`
    /// if the slot cannot be read; nothing is written in either case.
    pub fn update(&mut self, id: u64, payload: ContactPayload) -> StoreResult<ContactRecord> {
        let mut records = self.load_for_write()?;

        let record = match records.iter_mut().find(|r| r.id() == id) {
            Some(record) => record,
            None => return Err(self.not_found(id)),
        };
        record.overwrite(payload);
        let updated = record.clone();

        self.persist(&records)?;

        self.log_record_event(Event::RecordUpdated, id);

        Ok(updated)
    }

    /// Removes the first record with `id` and returns it.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no record has `id`, or `StoreError::IoError`
    /// if the slot cannot be read; nothing is written in either case.
    pub fn delete(&mut self, id: u64) -> StoreResult<ContactRecord> {
        let mut records = self.load_for_write()?;

        let position = match records.iter().position(|r| r.id() == id) {
            Some(position) => position,
            None => return Err(self.not_found(id)),
        };
        let removed = records.remove(position);

        self.persist(&records)?;

        self.log_record_event(Event::RecordDeleted, id);

        Ok(removed)
    }

    fn not_found(&self, id: u64) -> StoreError {
        self.log_record_event(Event::RecordNotFound, id);
        StoreError::NotFound(id)
    }

    fn log_record_event(&self, event: Event, id: u64) {
        let id = id.to_string();
        log_event_with_fields(event, &[("id", id.as_str()), ("slot", self.slot.as_str())]);
    }

    fn log_corrupt_slot(&self, reason: &str) {
        log_event_with_fields(
            Event::SlotCorrupt,
            &[("reason", reason), ("slot", self.slot.as_str())],
        );
    }

    fn log_unreadable_slot(&self, err: &StoreError) {
        let reason = err.to_string();
        log_event_with_fields(
            Event::SlotUnreadable,
            &[("reason", reason.as_str()), ("slot", self.slot.as_str())],
        );
    }

    /// Reads for display: a failed read degrades to an empty collection.
    fn load_lenient(&self) -> Vec<ContactRecord> {
        self.load().unwrap_or_else(|e| {
            self.log_unreadable_slot(&e);
            Vec::new()
        })
    }

    /// Reads before a mutation. Bad content may be replaced, but a failed
    /// read must not be, since the next write would drop every record.
    fn load_for_write(&self) -> StoreResult<Vec<ContactRecord>> {
        self.load().map_err(|e| {
            self.log_unreadable_slot(&e);
            e
        })
    }

    /// Absent and unparseable slots are empty; only read failures error.
    fn load(&self) -> StoreResult<Vec<ContactRecord>> {
        let content = match self.backend.read_slot(&self.slot) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(Vec::new()),
            Err(StoreError::Serialization(reason)) => {
                self.log_corrupt_slot(&reason);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        match parse_collection(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                self.log_corrupt_slot(&e.to_string());
                Ok(Vec::new())
            }
        }
    }

    fn persist(&mut self, records: &[ContactRecord]) -> StoreResult<()> {
        let content = serde_json::to_string(records)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.backend.write_slot(&self.slot, &content)?;

        let count = records.len().to_string();
        log_event_with_fields(
            Event::SlotWritten,
            &[("records", count.as_str()), ("slot", self.slot.as_str())],
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlots;
    use crate::validation::{validate, RawFields};

    fn payload(first_name: &str) -> ContactPayload {
        validate(&RawFields {
            first_name: first_name.into(),
            last_name: "Rao".into(),
            email: "asha.rao@mail.com".into(),
            phone: "9876543210".into(),
            street_address: "12 MG Road".into(),
            postal_code: "560034".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            labels: "".into(),
        })
        .unwrap()
    }

    fn store() -> RecordStore<MemorySlots> {
        RecordStore::open(MemorySlots::new(), DEFAULT_SLOT).unwrap()
    }

    #[test]
    fn test_open_rejects_bad_slot() {
        let result = RecordStore::open(MemorySlots::new(), "no/slashes");
        assert!(matches!(result, Err(StoreError::InvalidSlotKey(_))));
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = store();
        assert!(store.list().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.find(1), None);
    }

    #[test]
    fn test_sequential_ids() {
        let mut store = store();
        let ids: Vec<u64> = ["Asha", "Ravi", "Meera"]
            .iter()
            .map(|n| store.create(payload(n)).unwrap().id())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = store();
        store.create(payload("Asha")).unwrap();
        store.create(payload("Ravi")).unwrap();
        store.create(payload("Meera")).unwrap();

        let updated = store.update(2, payload("Kiran")).unwrap();
        assert_eq!(updated.id(), 2);

        let names: Vec<String> = store.list().iter().map(|r| r.first_name().to_string()).collect();
        assert_eq!(names, vec!["Asha", "Kiran", "Meera"]);
    }

    #[test]
    fn test_update_missing_writes_nothing() {
        let mut store = store();
        store.create(payload("Asha")).unwrap();
        let before = store.backend().get(DEFAULT_SLOT).map(str::to_string);

        let result = store.update(9, payload("Kiran"));
        assert_eq!(result, Err(StoreError::NotFound(9)));
        assert_eq!(store.backend().get(DEFAULT_SLOT).map(str::to_string), before);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut store = store();
        for name in ["Asha", "Ravi", "Meera"] {
            store.create(payload(name)).unwrap();
        }

        let removed = store.delete(2).unwrap();
        assert_eq!(removed.first_name(), "Ravi");

        let ids: Vec<u64> = store.list().iter().map(ContactRecord::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing() {
        let mut store = store();
        store.create(payload("Asha")).unwrap();

        assert_eq!(store.delete(4), Err(StoreError::NotFound(4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_corrupt_slot_reads_empty() {
        let mut backend = MemorySlots::new();
        backend.write_slot(DEFAULT_SLOT, "{not json").unwrap();
        let mut store = RecordStore::open(backend, DEFAULT_SLOT).unwrap();

        assert!(store.list().is_empty());

        // The next write replaces the unreadable value
        let record = store.create(payload("Asha")).unwrap();
        assert_eq!(record.id(), 1);
        assert_eq!(store.len(), 1);
    }

    /// Memory slots whose reads can be switched to fail.
    #[derive(Debug, Default)]
    struct FlakyReads {
        slots: MemorySlots,
        fail_reads: bool,
    }

    impl SlotBackend for FlakyReads {
        fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
            if self.fail_reads {
                return Err(StoreError::IoError("device not ready".into()));
            }
            self.slots.read_slot(key)
        }

        fn write_slot(&mut self, key: &str, value: &str) -> StoreResult<()> {
            self.slots.write_slot(key, value)
        }
    }

    fn unreadable_store() -> (RecordStore<FlakyReads>, Option<String>) {
        let mut store = RecordStore::open(FlakyReads::default(), DEFAULT_SLOT).unwrap();
        store.create(payload("Asha")).unwrap();
        store.create(payload("Ravi")).unwrap();

        let before = store.backend().slots.get(DEFAULT_SLOT).map(str::to_string);
        store.backend.fail_reads = true;
        (store, before)
    }

    #[test]
    fn test_failed_read_blocks_mutations() {
        let (mut store, before) = unreadable_store();

        assert!(matches!(store.create(payload("Meera")), Err(StoreError::IoError(_))));
        assert!(matches!(store.update(1, payload("Kiran")), Err(StoreError::IoError(_))));
        assert!(matches!(store.delete(2), Err(StoreError::IoError(_))));

        assert_eq!(store.backend().slots.get(DEFAULT_SLOT).map(str::to_string), before);
    }

    #[test]
    fn test_failed_read_lists_empty() {
        let (mut store, _) = unreadable_store();
        assert!(store.list().is_empty());

        store.backend.fail_reads = false;
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut store = store();
        store.create(payload("Asha")).unwrap();

        let backend = store.into_backend();
        let other = RecordStore::open(backend, "otherBook").unwrap();
        assert!(other.is_empty());
    }
}
