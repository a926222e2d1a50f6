//! Record store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid slot key: {0:?}")]
    InvalidSlotKey(String),

    #[error("Record not found: {0}")]
    NotFound(u64),

    #[error("Record id space exhausted")]
    IdSpaceExhausted,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Stable error code for outward surfaces
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::InvalidSlotKey(_) => "ADDRBOOK_INVALID_SLOT_KEY",
            StoreError::NotFound(_) => "ADDRBOOK_NOT_FOUND",
            StoreError::IdSpaceExhausted => "ADDRBOOK_ID_EXHAUSTED",
            StoreError::IoError(_) => "ADDRBOOK_STORAGE_IO_ERROR",
            StoreError::Serialization(_) => "ADDRBOOK_SERIALIZATION_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
