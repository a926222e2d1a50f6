//! API error types
//!
//! Errors from the address book pass through with their own codes; the API
//! adds codes only for malformed requests.

use std::fmt;

use crate::book::BookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request is not valid JSON or lacks a required key
    InvalidRequest,
    /// `op` names no known operation
    UnknownOperation,
}

impl ApiErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::InvalidRequest => "ADDRBOOK_INVALID_REQUEST",
            ApiErrorCode::UnknownOperation => "ADDRBOOK_UNKNOWN_OPERATION",
        }
    }
}

/// API error with the originating error code preserved
#[derive(Debug)]
pub struct ApiError {
    code: String,
    message: String,
    /// Failing field names for validation failures
    fields: Vec<String>,
}

impl ApiError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest.code().to_string(),
            message: reason.into(),
            fields: Vec::new(),
        }
    }

    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::UnknownOperation.code().to_string(),
            message: format!("Unknown operation: {}", op.into()),
            fields: Vec::new(),
        }
    }

    /// Pass-through from the address book
    pub fn from_book_error(err: BookError) -> Self {
        Self {
            code: err.code().to_string(),
            fields: err.failed_fields().into_iter().map(String::from).collect(),
            message: err.to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        Self::from_book_error(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
