//! Validation failure reporting

use thiserror::Error;

use super::fields::Field;

/// The complete set of fields that failed validation, in form order.
///
/// Never empty. An expected, recoverable outcome: callers mark each field
/// and let the user correct it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fields: {}", field_list(.fields))]
pub struct ValidationFailure {
    fields: Vec<Field>,
}

impl ValidationFailure {
    pub(super) fn new(mut fields: Vec<Field>) -> Self {
        fields.sort();
        fields.dedup();
        Self { fields }
    }

    /// Failing fields, in form order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Persisted names of the failing fields
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::as_str).collect()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
