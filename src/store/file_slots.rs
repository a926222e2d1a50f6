//! File-backed slot backend
//!
//! Each slot is `<root>/<key>.json`. A write goes to a temp file in the same
//! directory, is fsynced, and is then renamed over the slot file, so a crash
//! leaves either the previous collection or the new one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::slot::{validate_slot_key, SlotBackend};

#[derive(Debug, Clone)]
pub struct FileSlots {
    root: PathBuf,
}

impl FileSlots {
    /// Slots under `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> StoreResult<PathBuf> {
        validate_slot_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!(".{}.json.tmp", key))
    }
}

impl SlotBackend for FileSlots {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.slot_path(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::IoError(format!(
                    "failed to read slot {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        // Undecodable bytes are bad content, not a failed read
        String::from_utf8(bytes).map(Some).map_err(|e| {
            StoreError::Serialization(format!("slot {} is not UTF-8: {}", path.display(), e))
        })
    }

    fn write_slot(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.slot_path(key)?;
        let temp_path = self.temp_path(key);

        fs::create_dir_all(&self.root).map_err(|e| {
            StoreError::IoError(format!(
                "failed to create slot directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::IoError(format!("failed to create temp slot file: {}", e)))?;

        file.write_all(value.as_bytes())
            .map_err(|e| StoreError::IoError(format!("failed to write slot content: {}", e)))?;

        file.sync_all()
            .map_err(|e| StoreError::IoError(format!("failed to fsync slot file: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            StoreError::IoError(format!("failed to commit slot {}: {}", path.display(), e))
        })?;

        // Make the rename itself durable; not every platform allows this
        if let Ok(dir) = File::open(&self.root) {
            let _ = dir.sync_all();
        }

        Ok(())
    }
}
