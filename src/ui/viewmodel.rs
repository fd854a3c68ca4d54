//! View model types representing renderable list state.
//!
//! This module defines the read-only projection the view layer renders from:
//! visible items with title match highlights, tag chips with counts and
//! active flags, pagination info and the empty state. View models carry no
//! behaviour; every mutation goes back through the
//! [`ListController`](crate::app::ListController).
//!
//! All types serialize with `serde`, so a host can hand the whole view to a
//! template engine or a JavaScript renderer as JSON.
//!
//! # Example
//!
//! ```rust
//! use postlist::app::ListController;
//! use postlist::location::MemoryLocation;
//! use postlist::storage::MemorySlot;
//! use postlist::{Config, ContentItem};
//!
//! let items = vec![ContentItem::new("a", "Docker basics", ["devops"])];
//! let mut list = ListController::new(items, MemoryLocation::default(), MemorySlot::new(), &Config::default());
//! list.mount();
//! list.set_query("dock");
//!
//! let view = list.view();
//! assert_eq!(view.items[0].title_highlights, vec![(0, 4)]);
//! assert!(view.empty_state.is_none());
//! ```

use crate::catalog::TagCatalog;
use crate::domain::{ContentItem, ListState};
use crate::search::ResultPage;
use chrono::{DateTime, Utc};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

/// Complete list view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    /// Items on the current page, in display order.
    pub items: Vec<ItemView>,

    /// Every known tag, in catalog order, flagged when selected.
    pub tags: Vec<TagChip>,

    /// Current query text as typed.
    pub query: String,

    pub pagination: PaginationInfo,

    /// Present when the page has no items.
    pub empty_state: Option<EmptyState>,
}

/// Display information for one content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Tag labels of the item, with their ids for linking.
    pub tags: Vec<TagChip>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub image: Option<String>,

    /// Character ranges of the title to highlight for the current query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub title_highlights: Vec<(usize, usize)>,
}

/// A tag as shown in a filter bar or on an item card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub id: String,
    pub label: String,
    /// Items carrying the tag across the whole collection.
    pub count: usize,
    /// Whether the tag is part of the current selection.
    pub active: bool,
}

/// Pagination display information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub total_pages: u32,
    /// Items matching the filters across all pages.
    pub total: usize,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Primary message (e.g., "No posts match your filters").
    pub title: String,

    /// Secondary explanatory text.
    pub description: String,

    /// Whether a "clear filters" action should be offered.
    pub can_reset: bool,
}

impl ResultView {
    /// Projects the controller's current state into a view model.
    #[must_use]
    pub fn build(
        collection: &[ContentItem],
        catalog: &TagCatalog,
        state: &ListState,
        result: &ResultPage,
        page_size: usize,
    ) -> Self {
        let query = state.trimmed_query();
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);

        let items = result
            .indices
            .iter()
            .filter_map(|&position| collection.get(position))
            .map(|item| compute_item(item, catalog, state, query, matcher.as_ref()))
            .collect::<Vec<_>>();

        let tags = catalog
            .iter()
            .map(|tag| TagChip {
                id: tag.id.clone(),
                label: tag.label.clone(),
                count: tag.count,
                active: state.tags.contains(&tag.id),
            })
            .collect();

        let empty_state = items
            .is_empty()
            .then(|| compute_empty_state(collection.is_empty(), state.has_filters()));

        Self {
            items,
            tags,
            query: state.query.clone(),
            pagination: PaginationInfo {
                page: result.page,
                total_pages: result.total_pages,
                total: result.total,
                page_size,
                has_previous: result.has_previous(),
                has_next: result.has_next(),
            },
            empty_state,
        }
    }
}

fn compute_item(
    item: &ContentItem,
    catalog: &TagCatalog,
    state: &ListState,
    query: &str,
    matcher: Option<&SkimMatcherV2>,
) -> ItemView {
    let tags = item
        .tags
        .iter()
        .map(|tag| TagChip {
            id: tag.id.clone(),
            label: tag.label.clone(),
            count: catalog.get(&tag.id).map_or(0, |known| known.count),
            active: state.tags.contains(&tag.id),
        })
        .collect();

    ItemView {
        id: item.id.clone(),
        title: item.title.clone(),
        excerpt: item.excerpt.clone(),
        tags,
        published_at: item.published_at,
        author: item.author.clone(),
        image: item.image.clone(),
        title_highlights: matcher.map_or_else(Vec::new, |m| compute_highlight_ranges(&item.title, query, m)),
    }
}

/// Computes character index ranges to highlight for fuzzy match visualization.
///
/// Uses the Skim fuzzy matcher to find matching character positions, then
/// coalesces consecutive indices into ranges. Titles the query only matches
/// through typo tolerance get no highlight.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn compute_empty_state(collection_empty: bool, has_filters: bool) -> EmptyState {
    if has_filters && !collection_empty {
        return EmptyState {
            title: "No posts match your filters".to_string(),
            description: "Try a different search or clear the selected tags.".to_string(),
            can_reset: true,
        };
    }

    EmptyState {
        title: "No posts yet".to_string(),
        description: "Check back soon for new content.".to_string(),
        can_reset: false,
    }
}
