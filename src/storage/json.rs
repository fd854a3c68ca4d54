//! JSON file-backed storage slot.
//!
//! This module provides a durable [`StorageSlot`] for hosts without a browser
//! (the CLI, native front ends). All entries live in one human-readable JSON
//! file that is rewritten atomically (write-to-temp + rename) on every change,
//! so a crash never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "postlist:list-state": "{\"q\":\"hooks\",\"tags\":[\"react\"],\"page\":2}"
//!   }
//! }
//! ```

use super::backend::StorageSlot;
use crate::domain::error::{PostlistError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotData {
    /// Version of the file format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for SlotData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage slot.
///
/// The whole file is loaded on open and kept in memory; each `set` persists
/// the full document.
///
/// A file that exists but does not parse is treated as empty (and logged):
/// the slot is a cache of UI state, not a source of truth, and the next write
/// replaces it.
#[derive(Debug)]
pub struct JsonFileSlot {
    file_path: PathBuf,
    data: SlotData,
}

impl JsonFileSlot {
    /// Opens (or prepares to create) the slot file at `file_path`.
    ///
    /// Parent directories are created eagerly.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or an
    /// existing file cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use postlist::storage::JsonFileSlot;
    /// use std::path::PathBuf;
    ///
    /// let slot = JsonFileSlot::open(PathBuf::from("/tmp/postlist/state.json"))?;
    /// # Ok::<(), postlist::PostlistError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON storage slot");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("slot file missing, starting empty");
            SlotData::default()
        };

        tracing::debug!(entries = data.entries.len(), "storage slot opened");
        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<SlotData> {
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str::<SlotData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded slot data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "slot file is corrupt, starting empty");
                Ok(SlotData::default())
            }
        }
    }

    /// Writes the document to a temporary sibling file, then renames it over
    /// the target.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| PostlistError::Storage(format!("failed to serialize slot data: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "slot file saved");
        Ok(())
    }
}

impl StorageSlot for JsonFileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_slot_set", key = %key, bytes = value.len()).entered();

        let previous = self.data.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_to_file() {
            // Keep memory consistent with disk.
            match previous {
                Some(previous) => self.data.entries.insert(key.to_string(), previous),
                None => self.data.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
