//! Identifier Assignment Tests
//!
//! New records get ids from the store's `IdPolicy`:
//! - `MaxPlusOne` (default): largest id present + 1
//! - `LastPlusOne` (legacy): id of the last record in insertion order + 1
//!
//! Includes the delete-then-create regressions for both.

use addrbook::store::DEFAULT_SLOT;
use addrbook::{
    validate, ContactPayload, ContactRecord, IdPolicy, MemorySlots, RawFields, RecordStore,
    SlotBackend,
};

// =============================================================================
// Test Utilities
// =============================================================================

fn payload() -> ContactPayload {
    validate(&RawFields {
        first_name: "Farah".into(),
        last_name: "Khan".into(),
        email: "farah_k@mail.com".into(),
        phone: "8899776655".into(),
        street_address: "Flat 3, Sea View".into(),
        postal_code: "400050".into(),
        city: "Mumbai".into(),
        state: "Maharashtra".into(),
        labels: "".into(),
    })
    .expect("fixture must be valid")
}

fn ids(store: &RecordStore<MemorySlots>) -> Vec<u64> {
    store.list().iter().map(ContactRecord::id).collect()
}

fn store_with(policy: IdPolicy) -> RecordStore<MemorySlots> {
    RecordStore::open(MemorySlots::new(), DEFAULT_SLOT)
        .unwrap()
        .with_id_policy(policy)
}

/// A store whose slot holds records in a non-ascending id order, as can
/// happen with collections edited outside this store.
fn store_with_ids(policy: IdPolicy, stored_ids: &[u64]) -> RecordStore<MemorySlots> {
    let records: Vec<serde_json::Value> = stored_ids
        .iter()
        .map(|id| {
            let mut value = serde_json::to_value(payload()).unwrap();
            value["id"] = serde_json::json!(id);
            value
        })
        .collect();

    let mut backend = MemorySlots::new();
    backend
        .write_slot(DEFAULT_SLOT, &serde_json::to_string(&records).unwrap())
        .unwrap();

    RecordStore::open(backend, DEFAULT_SLOT)
        .unwrap()
        .with_id_policy(policy)
}

// =============================================================================
// Sequential assignment
// =============================================================================

#[test]
fn test_sequential_creates_assign_one_two_three() {
    for policy in [IdPolicy::MaxPlusOne, IdPolicy::LastPlusOne] {
        let mut store = store_with(policy);
        for _ in 0..3 {
            store.create(payload()).unwrap();
        }
        assert_eq!(ids(&store), vec![1, 2, 3], "policy {:?}", policy);
    }
}

#[test]
fn test_default_policy_is_max_plus_one() {
    let store = RecordStore::open(MemorySlots::new(), DEFAULT_SLOT).unwrap();
    assert_eq!(store.id_policy(), IdPolicy::MaxPlusOne);
}

// =============================================================================
// Delete-then-create regressions
// =============================================================================

#[test]
fn test_delete_middle_then_create_does_not_duplicate() {
    for policy in [IdPolicy::MaxPlusOne, IdPolicy::LastPlusOne] {
        let mut store = store_with(policy);
        for _ in 0..3 {
            store.create(payload()).unwrap();
        }

        store.delete(2).unwrap();
        let created = store.create(payload()).unwrap();

        assert_eq!(created.id(), 4, "policy {:?}", policy);
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }
}

#[test]
fn test_delete_highest_then_create_reuses_freed_id() {
    let mut store = store_with(IdPolicy::MaxPlusOne);
    for _ in 0..3 {
        store.create(payload()).unwrap();
    }

    store.delete(3).unwrap();
    let created = store.create(payload()).unwrap();

    // The freed id is reissued; it is still unique within the collection
    assert_eq!(created.id(), 3);
    assert_eq!(ids(&store), vec![1, 2, 3]);
}

#[test]
fn test_delete_all_then_create_restarts_at_one() {
    let mut store = store_with(IdPolicy::MaxPlusOne);
    store.create(payload()).unwrap();
    store.create(payload()).unwrap();

    store.delete(1).unwrap();
    store.delete(2).unwrap();

    assert_eq!(store.create(payload()).unwrap().id(), 1);
}

#[test]
fn test_unsorted_tail_max_plus_one_stays_unique() {
    let mut store = store_with_ids(IdPolicy::MaxPlusOne, &[1, 5, 2]);

    let created = store.create(payload()).unwrap();

    assert_eq!(created.id(), 6);
    let mut all = ids(&store);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);
}

#[test]
fn test_unsorted_tail_last_plus_one_duplicates() {
    // Legacy behaviour, kept selectable for compatibility: the last record
    // (id 2) is not the maximum, so the new id collides with an existing one.
    let mut store = store_with_ids(IdPolicy::LastPlusOne, &[1, 3, 2]);

    let created = store.create(payload()).unwrap();

    assert_eq!(created.id(), 3);
    assert_eq!(ids(&store), vec![1, 3, 2, 3]);
}

#[test]
fn test_update_keeps_id_and_position() {
    let mut store = store_with_ids(IdPolicy::MaxPlusOne, &[4, 9, 2]);

    let updated = store.update(9, payload()).unwrap();

    assert_eq!(updated.id(), 9);
    assert_eq!(ids(&store), vec![4, 9, 2]);
}
