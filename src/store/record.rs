//! Persisted contact record

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::validation::{ContactPayload, RawFields};

/// One address-book entry: a store-assigned id plus validated fields.
///
/// Serializes flat, id first:
/// `{"id":1,"firstName":..,"lastName":..,"email":..,"phone":..,`
/// `"streetAddr":..,"postCode":..,"city":..,"state":..,"labels":..}`
///
/// Only the store parses records (`parse_collection`), so field
/// values cannot enter it from outside without passing validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    id: u64,
    #[serde(flatten)]
    payload: ContactPayload,
}

/// Persisted shape. Every key is required, so a partial object marks the
/// slot as corrupt rather than loading blanks. Unknown keys are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: u64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    #[serde(rename = "streetAddr")]
    street_address: String,
    #[serde(rename = "postCode")]
    postal_code: String,
    city: String,
    state: String,
    labels: String,
}

impl From<StoredRecord> for ContactRecord {
    fn from(stored: StoredRecord) -> Self {
        let fields = RawFields {
            first_name: stored.first_name,
            last_name: stored.last_name,
            email: stored.email,
            phone: stored.phone,
            street_address: stored.street_address,
            postal_code: stored.postal_code,
            city: stored.city,
            state: stored.state,
            labels: stored.labels,
        };
        Self::new(stored.id, ContactPayload::accept(&fields))
    }
}

/// Parses a serialized collection as written by the store.
pub(super) fn parse_collection(content: &str) -> serde_json::Result<Vec<ContactRecord>> {
    let stored: Vec<StoredRecord> = serde_json::from_str(content)?;
    Ok(stored.into_iter().map(ContactRecord::from).collect())
}

impl ContactRecord {
    pub(super) fn new(id: u64, payload: ContactPayload) -> Self {
        Self { id, payload }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    pub fn into_payload(self) -> ContactPayload {
        self.payload
    }

    /// Overwrite every field except the id
    pub(super) fn overwrite(&mut self, payload: ContactPayload) {
        self.payload = payload;
    }
}

impl Deref for ContactRecord {
    type Target = ContactPayload;

    fn deref(&self) -> &ContactPayload {
        &self.payload
    }
}
