//! Field validation for contact submissions
//!
//! Every constrained field is checked independently and all failures are
//! reported together. Validation is all-or-nothing: a `ContactPayload` only
//! exists once every constrained field has passed.
//!
//! # Rules
//!
//! - firstName, lastName, city: non-blank, letters and whitespace only
//! - email: restricted local-part/domain grammar
//! - phone: optional `+91`/`91`/`0` prefix, ten digits starting 7-9
//! - streetAddr: non-blank
//! - postCode: six digits, first non-zero, optional space after the third
//! - state, labels: unchecked

mod errors;
mod fields;
mod rules;

pub use errors::ValidationFailure;
pub use fields::{ContactPayload, Field, RawFields};
pub use rules::{check_field, validate};
