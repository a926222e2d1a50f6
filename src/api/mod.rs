//! JSON request layer for addrbook
//!
//! One JSON object in, one JSON object out. Used by the CLI serving loop
//! in place of a form UI.
//!
//! # Supported Operations
//!
//! - list
//! - get
//! - create
//! - update
//! - delete
//! - validate

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};
