//! The canonical list state and its untrusted partial projections.
//!
//! [`ListState`] is the single value the whole engine operates on. The two
//! external projections of it (the URL query string and the persisted slot)
//! are read back as [`PartialListState`], where each field is independently
//! present or absent. Resolution of partial states into a canonical one
//! happens in the reconciler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The canonical browsing state: free-text query, selected tags, current page.
///
/// # Invariants
///
/// - `page` is never zero. Constructors and [`ListState::with_page`] clamp it.
/// - Once owned by a [`ListController`](crate::app::ListController), `tags`
///   only contains identifiers known to the tag catalog and `page` lies within
///   the current page count.
///
/// `tags` is a `BTreeSet` so every projection iterates it in sorted order,
/// which makes encoding canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// Raw query text as typed. Filtering uses the trimmed form.
    pub query: String,
    /// Selected tag identifiers.
    pub tags: BTreeSet<String>,
    /// One-based page number.
    pub page: u32,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            tags: BTreeSet::new(),
            page: 1,
        }
    }
}

impl ListState {
    /// Creates a state, clamping `page` to at least 1.
    ///
    /// # Example
    ///
    /// ```
    /// use postlist::ListState;
    ///
    /// let state = ListState::new("hooks", ["react"], 0);
    /// assert_eq!(state.page, 1);
    /// assert!(state.tags.contains("react"));
    /// ```
    #[must_use]
    pub fn new<I, T>(query: impl Into<String>, tags: I, page: u32) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            query: query.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            page: page.max(1),
        }
    }

    /// Returns a copy with `page` replaced (clamped to at least 1).
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// The query with surrounding whitespace removed, as used for filtering.
    #[must_use]
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    /// Whether any filter (text or tag) is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.trimmed_query().is_empty() || !self.tags.is_empty()
    }
}

/// A list state read back from an untrusted source.
///
/// `None` means the source did not specify the field (or specified it in a
/// form that could not be recovered). `Some(String::new())` for `query` means
/// the source explicitly carried an empty query, which is distinct from absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialListState {
    /// Explicit query, possibly empty.
    pub query: Option<String>,
    /// Explicit tag list, already normalized to identifiers but not yet
    /// checked against the catalog.
    pub tags: Option<BTreeSet<String>>,
    /// Explicit page, always at least 1 when present.
    pub page: Option<u32>,
}

impl PartialListState {
    /// Whether no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_none() && self.tags.is_none() && self.page.is_none()
    }
}
