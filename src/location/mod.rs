//! Address-bar port and the query-string codec.
//!
//! The engine never talks to a browser directly. It reads and writes the
//! query string through the [`Location`] trait, which hosts implement over
//! `window.location` + `history` (see the `web` feature), or in memory for
//! tests and the CLI ([`MemoryLocation`]).
//!
//! # Modules
//!
//! - [`params`]: `ListState` ⇄ query string ([`decode`], [`encode`])
//! - `memory`: In-memory location recording its history entries

pub mod memory;
pub mod params;

pub use memory::MemoryLocation;
pub use params::{decode, encode};

use crate::domain::error::Result;

/// How an address-bar write interacts with the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Adds a history entry. Used for user-initiated changes.
    Push,
    /// Replaces the current entry. Used for mount and corrections.
    Replace,
}

/// Read/write access to the current URL's query string.
pub trait Location {
    /// The current query string, with or without the leading `?`.
    fn query(&self) -> String;

    /// Replaces the query string, keeping path and fragment.
    ///
    /// `query` carries no leading `?`; an empty string removes the query.
    ///
    /// # Errors
    ///
    /// Returns [`PostlistError::Location`](crate::PostlistError::Location) if
    /// the host rejects the write.
    fn write_query(&mut self, query: &str, mode: HistoryMode) -> Result<()>;
}

impl<L: Location + ?Sized> Location for Box<L> {
    fn query(&self) -> String {
        (**self).query()
    }

    fn write_query(&mut self, query: &str, mode: HistoryMode) -> Result<()> {
        (**self).write_query(query, mode)
    }
}
