//! Tag catalog derived from the content collection.
//!
//! The catalog is the universe of valid tag identifiers. It is rebuilt in full
//! whenever the collection is replaced (collections are small and static per
//! session) and is the reference every untrusted tag list is sanitized against.
//!
//! # Ordering
//!
//! Entries are sorted by label with case- and diacritic-insensitive collation
//! ("Ciencia" < "devops" < "Filosofía"), ties broken by the raw label and then
//! the identifier so the order is total and deterministic.
//!
//! # Example
//!
//! ```rust
//! use postlist::{ContentItem, TagCatalog};
//!
//! let items = vec![
//!     ContentItem::new("a", "A", ["React", "Filosofía"]),
//!     ContentItem::new("b", "B", ["react"]),
//! ];
//! let catalog = TagCatalog::build(&items);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get("react").map(|t| t.count), Some(2));
//! assert!(catalog.contains("filosofia"));
//! ```

mod tag;

pub use tag::Tag;

use crate::domain::text::{fold, tag_id};
use crate::domain::ContentItem;
use std::collections::{BTreeSet, HashMap};

/// Ordered set of known tags with a membership index.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: Vec<Tag>,
    positions: HashMap<String, usize>,
}

impl TagCatalog {
    /// Builds the catalog from a content collection.
    ///
    /// Counts each identifier once per item. An empty collection yields an
    /// empty catalog.
    #[must_use]
    pub fn build(items: &[ContentItem]) -> Self {
        let _span = tracing::debug_span!("build_tag_catalog", items = items.len()).entered();

        let mut counts: HashMap<&str, Tag> = HashMap::new();
        for item in items {
            for tag in &item.tags {
                counts
                    .entry(tag.id.as_str())
                    .and_modify(|entry| entry.count += 1)
                    .or_insert_with(|| Tag {
                        id: tag.id.clone(),
                        label: tag.label.clone(),
                        count: 1,
                    });
            }
        }

        let mut tags: Vec<Tag> = counts.into_values().collect();
        tags.sort_by_cached_key(|tag| (fold(&tag.label), tag.label.clone(), tag.id.clone()));

        let positions = tags
            .iter()
            .enumerate()
            .map(|(position, tag)| (tag.id.clone(), position))
            .collect();

        tracing::debug!(tags = tags.len(), "tag catalog built");
        Self { tags, positions }
    }

    /// Whether `id` is a known tag identifier.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Looks up a tag by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.positions.get(id).map(|&position| &self.tags[position])
    }

    /// Display label for `id`, if known.
    #[must_use]
    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).map(|tag| tag.label.as_str())
    }

    /// Tags in collation order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Normalizes candidate identifiers and keeps the known ones.
    ///
    /// Idempotent: sanitizing an already sanitized set returns it unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postlist::{ContentItem, TagCatalog};
    ///
    /// let catalog = TagCatalog::build(&[ContentItem::new("a", "A", ["React", "CSS"])]);
    /// let clean = catalog.sanitize_tags(["React", "ghost-tag", "css", "css"]);
    /// assert_eq!(clean.into_iter().collect::<Vec<_>>(), vec!["css", "react"]);
    /// ```
    pub fn sanitize_tags<I, T>(&self, candidates: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        candidates
            .into_iter()
            .map(|candidate| tag_id(candidate.as_ref()))
            .filter(|id| {
                let known = self.contains(id);
                if !known && !id.is_empty() {
                    tracing::debug!(tag = %id, "dropping unknown tag");
                }
                known
            })
            .collect()
    }
}
