//! Configuration file
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "slot": "addressBook",
//!   "id_policy": "max_plus_one",
//!   "regions_file": "./states.json"
//! }
//! ```
//!
//! Only `data_dir` is required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event};
use crate::store::{validate_slot_key, IdPolicy, DEFAULT_SLOT};

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the slot files (required)
    pub data_dir: String,

    /// Slot key of the collection
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Id assignment for new records
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Region reference list, `[{"state": ".."}]`
    #[serde(default)]
    pub regions_file: Option<String>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&content)?;

        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("data_dir", config.data_dir.as_str()),
                ("id_policy", config.id_policy.as_str()),
                ("slot", config.slot.as_str()),
            ],
        );

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        validate_slot_key(&self.slot).map_err(|_| {
            CliError::config_error(format!(
                "Invalid slot: '{}'. Use letters, digits, '_' or '-'.",
                self.slot
            ))
        })?;

        if let Some(regions_file) = &self.regions_file {
            if regions_file.trim().is_empty() {
                return Err(CliError::config_error("regions_file must not be empty when set"));
            }
        }

        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    pub fn regions_path(&self) -> Option<PathBuf> {
        self.regions_file.as_ref().map(PathBuf::from)
    }
}
