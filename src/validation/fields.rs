//! Submitted field sets
//!
//! Serialized names match the persisted record shape:
//! `firstName, lastName, email, phone, streetAddr, postCode, city, state, labels`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The constrained fields of a contact form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "streetAddr")]
    StreetAddress,
    #[serde(rename = "postCode")]
    PostalCode,
    #[serde(rename = "city")]
    City,
}

impl Field {
    /// All constrained fields, in form order.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::StreetAddress,
        Field::PostalCode,
        Field::City,
    ];

    /// Persisted field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::StreetAddress => "streetAddr",
            Field::PostalCode => "postCode",
            Field::City => "city",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw, unvalidated form input.
///
/// Missing keys deserialize to empty strings, which every constrained
/// field rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "streetAddr")]
    pub street_address: String,
    #[serde(rename = "postCode")]
    pub postal_code: String,
    pub city: String,
    pub state: String,
    pub labels: String,
}

impl RawFields {
    /// Raw value submitted for a constrained field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::StreetAddress => &self.street_address,
            Field::PostalCode => &self.postal_code,
            Field::City => &self.city,
        }
    }
}

/// A field set that passed validation.
///
/// Only produced by [`validate`](super::validate) or by the store reading
/// back its own records. Values are stored exactly as submitted.
///
/// Not deserializable, so this does not compile:
///
/// ```compile_fail
/// let payload: addrbook::ContactPayload =
///     serde_json::from_str(r#"{"firstName":"R2D2"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
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

impl ContactPayload {
    /// Wraps fields without checking them: callers are `validate` and the
    /// store's own read path.
    pub(crate) fn accept(raw: &RawFields) -> Self {
        Self {
            first_name: raw.first_name.clone(),
            last_name: raw.last_name.clone(),
            email: raw.email.clone(),
            phone: raw.phone.clone(),
            street_address: raw.street_address.clone(),
            postal_code: raw.postal_code.clone(),
            city: raw.city.clone(),
            state: raw.state.clone(),
            labels: raw.labels.clone(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn street_address(&self) -> &str {
        &self.street_address
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn labels(&self) -> &str {
        &self.labels
    }

    /// Converts back into editable form input (the edit modal's prefill).
    pub fn to_raw(&self) -> RawFields {
        RawFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            street_address: self.street_address.clone(),
            postal_code: self.postal_code.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            labels: self.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_fields_use_persisted_names() {
        let raw: RawFields = serde_json::from_str(
            r#"{"firstName":"Asha","streetAddr":"12 MG Road","postCode":"560034"}"#,
        )
        .unwrap();

        assert_eq!(raw.first_name, "Asha");
        assert_eq!(raw.street_address, "12 MG Road");
        assert_eq!(raw.postal_code, "560034");
        assert_eq!(raw.email, "");
        assert_eq!(raw.labels, "");
    }

    #[test]
    fn test_field_names_match_serde() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_payload_round_trips_to_raw() {
        let raw = RawFields {
            first_name: "Ravi".into(),
            state: "Kerala".into(),
            ..RawFields::default()
        };
        let payload = ContactPayload::accept(&raw);
        assert_eq!(payload.to_raw(), raw);
    }
}
