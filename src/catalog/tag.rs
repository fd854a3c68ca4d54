//! Catalog entry type.

use serde::Serialize;

/// A known tag with its display label and usage count.
///
/// Produced by [`TagCatalog::build`](super::TagCatalog::build). Entries are
/// rebuilt with the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Normalized identifier used in state, URL and storage.
    pub id: String,
    /// Label of the first item that used this tag.
    pub label: String,
    /// Number of items carrying the tag.
    pub count: usize,
}
