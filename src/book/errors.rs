//! Address book errors

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationFailure;

pub type BookResult<T> = Result<T, BookError>;

#[derive(Debug, Error)]
pub enum BookError {
    /// One or more fields were rejected; nothing was stored
    #[error("{0}")]
    Invalid(#[from] ValidationFailure),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookError {
    pub fn code(&self) -> &'static str {
        match self {
            BookError::Invalid(_) => "ADDRBOOK_VALIDATION_FAILED",
            BookError::Store(e) => e.code(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BookError::Store(e) if e.is_not_found())
    }

    /// Failing field names, empty unless this is a validation failure
    pub fn failed_fields(&self) -> Vec<&'static str> {
        match self {
            BookError::Invalid(failure) => failure.field_names(),
            BookError::Store(_) => Vec::new(),
        }
    }
}
