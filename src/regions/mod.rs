//! Region reference list
//!
//! The list of region (state) names offered by the form's dropdown, loaded
//! from a JSON file shaped `[{"state": "Kerala"}, ...]`. Validation never
//! consults it: `state` is stored as submitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("failed to read region list {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("malformed region list {path}: {reason}")]
    Malformed { path: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub state: String,
}

/// Ordered region names, as listed in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionList {
    regions: Vec<Region>,
}

impl RegionList {
    pub fn load(path: &Path) -> Result<Self, RegionError> {
        let content = fs::read_to_string(path).map_err(|e| RegionError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let list = Self::parse(&content).map_err(|e| RegionError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let count = list.len().to_string();
        log_event_with_fields(Event::RegionsLoaded, &[("count", count.as_str())]);

        Ok(list)
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        Ok(Self { regions })
    }

    /// Names trimmed for display, blanks dropped
    pub fn names(&self) -> Vec<&str> {
        self.regions
            .iter()
            .map(|r| r.state.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
