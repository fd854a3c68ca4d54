//! List state reconciliation across address bar, storage and memory.
//!
//! [`ListController`] owns the canonical [`ListState`] together with the
//! derived catalog, search index and current [`ResultPage`]. It is the only
//! place the state changes.
//!
//! # Mount
//!
//! Each field resolves independently with fixed precedence:
//!
//! ```text
//! URL (explicitly present) ─▶ storage (recovered) ─▶ default
//! ```
//!
//! The merged state is sanitized against the tag catalog, the page is clamped
//! by a recompute, and the result is written back once to both the URL
//! (`Replace`) and storage, so dropped ghost tags do not resurface.
//!
//! # Mutations
//!
//! Every entry point follows the same order:
//!
//! 1. Update the state synchronously
//! 2. Write the URL (`Push`, or `Replace` if the query string is unchanged)
//! 3. Write storage
//! 4. Recompute results
//! 5. If the recompute clamped the page, write the correction (`Replace` + storage)
//!
//! A request that clamps back to the current state writes nothing.
//!
//! URL and storage failures are logged at `warn` and never reach the caller.

use super::modes::Phase;
use crate::catalog::{Tag, TagCatalog};
use crate::domain::text::tag_id;
use crate::domain::{ContentItem, ListState, PartialListState};
use crate::location::{params, HistoryMode, Location};
use crate::search::{compute, ResultPage, SearchIndex};
use crate::storage::{PersistedStore, StorageSlot};
use crate::ui::viewmodel::ResultView;
use crate::Config;

/// Owner of the list state and its derived results.
///
/// # Example
///
/// ```rust
/// use postlist::app::ListController;
/// use postlist::location::{Location, MemoryLocation};
/// use postlist::storage::MemorySlot;
/// use postlist::{Config, ContentItem};
///
/// let items = vec![
///     ContentItem::new("a", "Docker basics", ["devops"]),
///     ContentItem::new("b", "React hooks", ["react"]),
/// ];
/// let mut list = ListController::new(items, MemoryLocation::new("?q=react"), MemorySlot::new(), &Config::default());
/// list.mount();
///
/// assert_eq!(list.state().query, "react");
/// assert_eq!(list.total(), 1);
///
/// list.reset();
/// assert_eq!(list.total(), 2);
/// assert_eq!(list.location().query(), "");
/// ```
#[derive(Debug)]
pub struct ListController<L: Location, S: StorageSlot> {
    collection: Vec<ContentItem>,
    catalog: TagCatalog,
    index: SearchIndex,
    page_size: usize,
    fuzziness: f64,
    state: ListState,
    result: ResultPage,
    phase: Phase,
    location: L,
    store: PersistedStore<S>,
}

impl<L: Location, S: StorageSlot> ListController<L, S> {
    /// Creates an unmounted controller over `collection`.
    ///
    /// Nothing is read from `location` or `slot` until [`mount`](Self::mount).
    pub fn new(collection: Vec<ContentItem>, location: L, slot: S, config: &Config) -> Self {
        let catalog = TagCatalog::build(&collection);
        let index = SearchIndex::build(&collection, config.fuzziness);
        let page_size = config.page_size.max(1);
        let state = ListState::default();
        let result = compute(&collection, &index, &state, page_size);

        tracing::debug!(
            items = collection.len(),
            tags = catalog.len(),
            page_size,
            storage_key = %config.storage_key,
            "list controller created"
        );

        Self {
            collection,
            catalog,
            index,
            page_size,
            fuzziness: config.fuzziness,
            state,
            result,
            phase: Phase::Uninitialized,
            location,
            store: PersistedStore::new(slot, config.storage_key.clone()),
        }
    }

    /// Resolves the initial state from URL, storage and defaults.
    ///
    /// Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.phase != Phase::Uninitialized {
            tracing::debug!(phase = ?self.phase, "already mounted, ignoring");
            return;
        }

        let _span = tracing::debug_span!("mount").entered();
        self.phase = Phase::Resolving;

        let from_url = params::decode(&self.location.query());
        let from_store = self.store.load().unwrap_or_default();
        let merged = resolve(from_url, from_store);

        self.state = ListState {
            tags: self.catalog.sanitize_tags(&merged.tags),
            ..merged
        };
        self.recompute();

        self.write_location(HistoryMode::Replace);
        self.store.save(&self.state);

        self.phase = Phase::Steady;
        tracing::debug!(
            query = %self.state.query,
            tags = ?self.state.tags,
            page = self.state.page,
            total = self.result.total,
            "list mounted"
        );
    }

    /// Sets the free-text query and returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let next = ListState {
            query: query.into(),
            tags: self.state.tags.clone(),
            page: 1,
        };
        self.commit(next, "set_query");
    }

    /// Adds or removes a tag from the selection and returns to page 1.
    ///
    /// `id` is normalized first. Unknown tags are ignored without any write.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn toggle_tag(&mut self, id: &str) -> bool {
        let id = tag_id(id);
        if !self.catalog.contains(&id) {
            tracing::debug!(tag = %id, "toggle of unknown tag ignored");
            return false;
        }

        let mut tags = self.state.tags.clone();
        if !tags.remove(&id) {
            tags.insert(id);
        }
        let next = ListState {
            query: self.state.query.clone(),
            tags,
            page: 1,
        };
        self.commit(next, "toggle_tag")
    }

    /// Moves to `page`. Zero is treated as 1; pages past the end are clamped
    /// after the write.
    pub fn set_page(&mut self, page: u32) {
        let next = self.state.clone().with_page(page);
        self.commit(next, "set_page");
    }

    /// Moves one page forward if a next page exists.
    pub fn next_page(&mut self) -> bool {
        if !self.result.has_next() {
            return false;
        }
        let next = self.state.clone().with_page(self.result.page.saturating_add(1));
        self.commit(next, "next_page")
    }

    /// Moves one page back if a previous page exists.
    pub fn previous_page(&mut self) -> bool {
        if !self.result.has_previous() {
            return false;
        }
        let next = self.state.clone().with_page(self.result.page - 1);
        self.commit(next, "previous_page")
    }

    /// Clears query, tags and page in one update.
    pub fn reset(&mut self) {
        self.commit(ListState::default(), "reset");
    }

    /// Replaces the content collection.
    ///
    /// Catalog and index are rebuilt, tags that no longer exist are dropped
    /// and the page is re-clamped. If that changed the state, the correction
    /// is written with `Replace`.
    pub fn replace_collection(&mut self, collection: Vec<ContentItem>) {
        let _span = tracing::debug_span!("replace_collection", items = collection.len()).entered();

        self.catalog = TagCatalog::build(&collection);
        self.index = SearchIndex::build(&collection, self.fuzziness);
        self.collection = collection;

        let before = self.state.clone();
        self.state.tags = self.catalog.sanitize_tags(&before.tags);
        self.recompute();

        if self.state != before && self.phase.accepts_mutations() {
            tracing::debug!(tags = ?self.state.tags, page = self.state.page, "collection change corrected state");
            self.write_location(HistoryMode::Replace);
            self.store.save(&self.state);
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// Items on the current page, in display order.
    #[must_use]
    pub fn items(&self) -> Vec<&ContentItem> {
        self.result
            .indices
            .iter()
            .filter_map(|&position| self.collection.get(position))
            .collect()
    }

    /// The full collection, in collection order.
    #[must_use]
    pub fn collection(&self) -> &[ContentItem] {
        &self.collection
    }

    /// Number of items matching the current filters.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.result.total
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.result.total_pages
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.state.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected tags in catalog order.
    #[must_use]
    pub fn active_tags(&self) -> Vec<&Tag> {
        self.catalog
            .iter()
            .filter(|tag| self.state.tags.contains(&tag.id))
            .collect()
    }

    #[must_use]
    pub const fn catalog(&self) -> &TagCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn result(&self) -> &ResultPage {
        &self.result
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn location(&self) -> &L {
        &self.location
    }

    #[must_use]
    pub const fn store(&self) -> &PersistedStore<S> {
        &self.store
    }

    /// Read-only projection for the view layer.
    #[must_use]
    pub fn view(&self) -> ResultView {
        ResultView::build(&self.collection, &self.catalog, &self.state, &self.result, self.page_size)
    }

    /// Applies a user mutation. Returns whether the state changed.
    fn commit(&mut self, next: ListState, operation: &'static str) -> bool {
        if !self.phase.accepts_mutations() {
            tracing::debug!(operation, phase = ?self.phase, "mutation before mount ignored");
            return false;
        }
        if next == self.state {
            tracing::trace!(operation, "state unchanged");
            return false;
        }

        let result = compute(&self.collection, &self.index, &next, self.page_size);
        if result.was_clamped() && next.clone().with_page(result.page) == self.state {
            tracing::trace!(operation, requested = next.page, "request clamps back to current state");
            return false;
        }

        let _span = tracing::debug_span!("commit", operation).entered();

        let previous_query = params::encode(&self.state);
        self.state = next;
        let query = params::encode(&self.state);
        let mode = if query == previous_query {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        };

        self.write_query(&query, mode);
        self.store.save(&self.state);

        self.result = result;
        if self.result.was_clamped() {
            self.state.page = self.result.page;
            self.write_location(HistoryMode::Replace);
            self.store.save(&self.state);
        }

        tracing::debug!(
            query = %self.state.query,
            tags = ?self.state.tags,
            page = self.state.page,
            total = self.result.total,
            "state committed"
        );
        true
    }

    /// Recomputes results and adopts the clamped page. Returns whether the
    /// page had to be corrected.
    fn recompute(&mut self) -> bool {
        self.result = compute(&self.collection, &self.index, &self.state, self.page_size);
        if self.result.was_clamped() {
            self.state.page = self.result.page;
            return true;
        }
        false
    }

    fn write_location(&mut self, mode: HistoryMode) {
        let query = params::encode(&self.state);
        self.write_query(&query, mode);
    }

    fn write_query(&mut self, query: &str, mode: HistoryMode) {
        if let Err(e) = self.location.write_query(query, mode) {
            tracing::warn!(error = %e, ?mode, "failed to update address bar, continuing");
        }
    }
}

/// Per-field precedence: URL, then storage, then default.
fn resolve(from_url: PartialListState, from_store: PartialListState) -> ListState {
    ListState {
        query: from_url.query.or(from_store.query).unwrap_or_default(),
        tags: from_url.tags.or(from_store.tags).unwrap_or_default(),
        page: from_url.page.or(from_store.page).unwrap_or(1).max(1),
    }
}
