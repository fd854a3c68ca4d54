//! Tag intersection, text filtering and pagination.
//!
//! [`compute`] is the single recompute step the reconciler runs after every
//! state change. It is pure: the same collection, index, state and page size
//! always produce the same [`ResultPage`].

use super::index::SearchIndex;
use crate::domain::{ContentItem, ListState};

/// One page of filtered results plus pagination metadata.
///
/// `indices` are positions into the collection the page was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    /// Collection positions of the items on this page, in display order.
    pub indices: Vec<usize>,
    /// Number of items matching the filters across all pages.
    pub total: usize,
    /// `max(1, ceil(total / page_size))`.
    pub total_pages: u32,
    /// Page actually served, always within `[1, total_pages]`.
    pub page: u32,
    /// Page the state asked for.
    pub requested_page: u32,
}

impl ResultPage {
    /// Whether the requested page was out of range and had to be clamped.
    ///
    /// When true the caller must adopt [`ResultPage::page`] as its new page.
    #[must_use]
    pub const fn was_clamped(&self) -> bool {
        self.page != self.requested_page
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filters, ranks and paginates `items` for `state`.
///
/// # Algorithm
///
/// 1. **Tag Intersection**: keep items carrying *every* selected tag (AND)
/// 2. **Text Filter**: if the trimmed query is non-empty, replace the working
///    set with its ranked search results (searching only the tag-filtered
///    subset); otherwise keep collection order
/// 3. **Count**: `total` and `total_pages = max(1, ceil(total / page_size))`
/// 4. **Clamp**: force the requested page into `[1, total_pages]`
/// 5. **Slice**: `[(page - 1) * page_size, page * page_size)`
///
/// A `page_size` of zero is treated as one.
///
/// # Example
///
/// ```rust
/// use postlist::{ContentItem, ListState, SearchIndex};
/// use postlist::search::compute;
///
/// let items: Vec<ContentItem> = (0..7)
///     .map(|n| ContentItem::new(format!("p{n}"), format!("Post {n}"), if n < 2 { vec!["react"] } else { vec![] }))
///     .collect();
/// let index = SearchIndex::build(&items, 0.35);
///
/// let page = compute(&items, &index, &ListState::new("", ["react"], 2), 6);
/// assert_eq!(page.total, 2);
/// assert_eq!(page.total_pages, 1);
/// assert_eq!(page.page, 1);
/// assert!(page.was_clamped());
/// ```
#[must_use]
pub fn compute(items: &[ContentItem], index: &SearchIndex, state: &ListState, page_size: usize) -> ResultPage {
    let page_size = page_size.max(1);
    let _span = tracing::debug_span!("compute_results",
        items = items.len(),
        tags = state.tags.len(),
        query_len = state.query.len(),
        page = state.page,
        page_size
    ).entered();

    let tag_filtered: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| state.tags.iter().all(|tag| item.has_tag(tag)))
        .map(|(position, _)| position)
        .collect();

    let ordered = index
        .search_within(state.trimmed_query(), tag_filtered.iter().copied())
        .unwrap_or(tag_filtered);

    let total = ordered.len();
    let total_pages = u32::try_from(total.div_ceil(page_size))
        .unwrap_or(u32::MAX)
        .max(1);

    let requested_page = state.page;
    let page = requested_page.clamp(1, total_pages);
    if page != requested_page {
        tracing::debug!(requested_page, page, total_pages, "page out of range, clamping");
    }

    let start = (page as usize - 1).saturating_mul(page_size);
    let indices = ordered.into_iter().skip(start).take(page_size).collect();

    tracing::debug!(total, total_pages, page, "results computed");

    ResultPage {
        indices,
        total,
        total_pages,
        page,
        requested_page,
    }
}
