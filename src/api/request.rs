//! API request parsing

use serde::Deserialize;

use crate::validation::RawFields;

use super::errors::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Get { id: u64 },
    Create { fields: RawFields },
    Update { id: u64, fields: RawFields },
    Delete { id: u64 },
    Validate { fields: RawFields },
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    fields: Option<RawFields>,
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        let id = || raw.id.ok_or_else(|| ApiError::invalid_request("Missing id"));
        let fields = || {
            raw.fields
                .clone()
                .ok_or_else(|| ApiError::invalid_request("Missing fields"))
        };

        match raw.op.as_str() {
            "list" => Ok(Request::List),
            "get" => Ok(Request::Get { id: id()? }),
            "create" => Ok(Request::Create { fields: fields()? }),
            "update" => Ok(Request::Update {
                id: id()?,
                fields: fields()?,
            }),
            "delete" => Ok(Request::Delete { id: id()? }),
            "validate" => Ok(Request::Validate { fields: fields()? }),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
