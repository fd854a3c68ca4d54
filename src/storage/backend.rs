//! Storage slot abstraction.
//!
//! This module defines the [`StorageSlot`] trait: a durable string key/value
//! store in the shape of the browser's `localStorage`. The persisted store only
//! ever touches one key, but the port mirrors the real API so adapters stay
//! one-liners.
//!
//! # Implementations
//!
//! - [`MemorySlot`](crate::storage::MemorySlot): in-memory, with fault injection
//! - [`JsonFileSlot`](crate::storage::JsonFileSlot): JSON file with atomic writes
//! - `LocalStorageSlot` (`web` feature): `window.localStorage`

use crate::domain::error::Result;

/// A durable string key/value store.
///
/// Implementations report failures as errors; callers in the engine decide
/// whether to swallow them.
///
/// # Examples
///
/// ```
/// use postlist::storage::{MemorySlot, StorageSlot};
///
/// let mut slot = MemorySlot::new();
/// slot.set("key", "value")?;
/// assert_eq!(slot.get("key")?, Some("value".to_string()));
/// # Ok::<(), postlist::PostlistError>(())
/// ```
pub trait StorageSlot {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (quota exceeded, storage disabled,
    /// I/O failure).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
