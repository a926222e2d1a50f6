//! Per-field grammars and the validate entry point

use std::sync::OnceLock;

use regex::Regex;

use super::errors::ValidationFailure;
use super::fields::{ContactPayload, Field, RawFields};

/// Letters and whitespace only. Matches the empty string; blankness is
/// rejected separately. U+FEFF counts as whitespace, as it does for form
/// input checked in a browser.
const NAME_PATTERN: &str = r"^[a-zA-Z\s\x{FEFF}]*$";

/// Alphanumeric local part with at most one separator from `+._-`,
/// alphanumeric domain, 2-3 letter TLD with an optional second 2-3 letter
/// suffix.
const EMAIL_PATTERN: &str =
    r"^[0-9a-zA-Z]+[+._-]?[0-9a-zA-Z]+@[a-zA-Z0-9]+\.[a-zA-Z]{2,3}(\.[a-zA-Z]{2,3})?$";

/// Optional `+91`, `91` or `0` prefix, then ten digits starting with 7, 8 or 9.
const PHONE_PATTERN: &str = r"^((\+91)|91|0)?[789][0-9]{9}$";

/// Six digits, first non-zero, optional single space after the third.
const POSTAL_CODE_PATTERN: &str = r"^[1-9][0-9]{2}[ ]?[0-9]{3}$";

struct Grammars {
    name: Regex,
    email: Regex,
    phone: Regex,
    postal_code: Regex,
}

fn grammars() -> &'static Grammars {
    static GRAMMARS: OnceLock<Grammars> = OnceLock::new();
    GRAMMARS.get_or_init(|| Grammars {
        name: compile(NAME_PATTERN),
        email: compile(EMAIL_PATTERN),
        phone: compile(PHONE_PATTERN),
        postal_code: compile(POSTAL_CODE_PATTERN),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field grammar is a valid regex")
}

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Checks one constrained field.
///
/// Every constrained field must be non-blank after trimming; the grammar
/// is then applied to the untrimmed value.
pub fn check_field(field: Field, value: &str) -> bool {
    if is_blank(value) {
        return false;
    }

    let g = grammars();
    match field {
        Field::FirstName | Field::LastName | Field::City => g.name.is_match(value),
        Field::Email => g.email.is_match(value),
        Field::Phone => g.phone.is_match(value),
        Field::PostalCode => g.postal_code.is_match(value),
        Field::StreetAddress => true,
    }
}

/// Validates a full submission.
///
/// Does not stop at the first failure: the error carries every failing
/// field. `state` and `labels` pass through unchecked.
pub fn validate(raw: &RawFields) -> Result<ContactPayload, ValidationFailure> {
    let failed: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| !check_field(*field, raw.value(*field)))
        .collect();

    if failed.is_empty() {
        Ok(ContactPayload::accept(raw))
    } else {
        Err(ValidationFailure::new(failed))
    }
}
