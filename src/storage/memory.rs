//! In-memory storage slot with fault injection.

use super::backend::StorageSlot;
use crate::domain::error::{PostlistError, Result};
use std::collections::HashMap;

/// A [`StorageSlot`] kept in memory.
///
/// Used by tests and by hosts without durable storage. Reads and writes can be
/// made to fail to simulate disabled storage or an exceeded quota, and every
/// successful write is counted.
///
/// # Example
///
/// ```
/// use postlist::storage::{MemorySlot, StorageSlot};
///
/// let mut slot = MemorySlot::new().failing_writes();
/// assert!(slot.set("k", "v").is_err());
/// assert_eq!(slot.write_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slot = Self::default();
        slot.entries.insert(key.into(), value.into());
        slot
    }

    /// Makes every subsequent read fail.
    #[must_use]
    pub const fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every subsequent write fail.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Toggles write failures on an existing slot.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored value, bypassing fault injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(PostlistError::Storage("storage is disabled".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PostlistError::Storage("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
