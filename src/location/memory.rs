//! In-memory [`Location`] that records every write.

use super::{HistoryMode, Location};
use crate::domain::error::{PostlistError, Result};

/// A session history kept in memory.
///
/// `Push` appends an entry, `Replace` overwrites the current one. Counters for
/// both modes let tests assert on history behaviour.
///
/// # Example
///
/// ```
/// use postlist::location::{HistoryMode, Location, MemoryLocation};
///
/// let mut location = MemoryLocation::new("?page=2");
/// location.write_query("q=css", HistoryMode::Push)?;
///
/// assert_eq!(location.query(), "q=css");
/// assert_eq!(location.entries(), ["page=2", "q=css"]);
/// # Ok::<(), postlist::PostlistError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    pushes: usize,
    replaces: usize,
    fail_writes: bool,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    /// Starts a history whose only entry is `query` (leading `?` optional).
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            entries: vec![query.strip_prefix('?').unwrap_or(query).to_string()],
            pushes: 0,
            replaces: 0,
            fail_writes: false,
        }
    }

    /// Makes every write fail, as a sandboxed frame might.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// All history entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn push_count(&self) -> usize {
        self.pushes
    }

    #[must_use]
    pub const fn replace_count(&self) -> usize {
        self.replaces
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.entries.last().cloned().unwrap_or_default()
    }

    fn write_query(&mut self, query: &str, mode: HistoryMode) -> Result<()> {
        if self.fail_writes {
            return Err(PostlistError::Location("history is not writable".to_string()));
        }

        match mode {
            HistoryMode::Push => {
                self.entries.push(query.to_string());
                self.pushes += 1;
            }
            HistoryMode::Replace => {
                match self.entries.last_mut() {
                    Some(current) => *current = query.to_string(),
                    None => self.entries.push(query.to_string()),
                }
                self.replaces += 1;
            }
        }
        tracing::trace!(query, ?mode, entries = self.entries.len(), "history updated");
        Ok(())
    }
}
