//! Weighted fuzzy search index over content fields.
//!
//! The index flattens every [`ContentItem`] into one searchable record of four
//! folded fields, each with a fixed weight:
//!
//! | Field   | Weight |
//! |---------|--------|
//! | title   | 0.4    |
//! | excerpt | 0.3    |
//! | body    | 0.2    |
//! | tags    | 0.1    |
//!
//! # Matching Algorithm
//!
//! 1. **Tokenize**: fold the query and split it on whitespace
//! 2. **Field Match**: for each token and field, compute the normalized
//!    approximate-substring distance (see [`super::fuzzy`]); the token matches
//!    the field when the ratio is within the fuzziness threshold
//! 3. **Item Match**: every token must match at least one field (word order is
//!    irrelevant)
//! 4. **Relevance**: mean over tokens of `Σ weight × (1 − ratio)` over the
//!    fields the token matched
//! 5. **Rank**: relevance descending, collection order breaking ties
//!
//! The index is built once per collection and holds no query-dependent state.

use super::fuzzy::{match_ratio, MatchText};
use crate::domain::text::fold;
use crate::domain::ContentItem;

/// Fuzziness used when none is configured (0 = exact, 1 = anything).
pub const DEFAULT_FUZZINESS: f64 = 0.35;

/// Tokens longer than this are truncated before matching.
const MAX_TOKEN_CHARS: usize = 64;

/// A searchable field and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Excerpt,
    Body,
    Tags,
}

impl SearchField {
    /// All fields in record order.
    pub const ALL: [Self; 4] = [Self::Title, Self::Excerpt, Self::Body, Self::Tags];

    /// Relative weight of the field in relevance scoring.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Title => 0.4,
            Self::Excerpt => 0.3,
            Self::Body => 0.2,
            Self::Tags => 0.1,
        }
    }
}

#[derive(Debug, Clone)]
struct SearchRecord {
    fields: [MatchText; 4],
}

impl SearchRecord {
    fn from_item(item: &ContentItem) -> Self {
        let tag_labels = item
            .tags
            .iter()
            .map(|tag| tag.label.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            fields: [
                MatchText::new(fold(&item.title)),
                MatchText::new(fold(&item.excerpt)),
                MatchText::new(fold(&item.body)),
                MatchText::new(fold(&tag_labels)),
            ],
        }
    }
}

struct QueryToken {
    text: String,
    chars: Vec<char>,
}

/// Fuzzy index over a content collection.
///
/// Record positions match the positions of the collection the index was
/// built from; results are returned as those positions.
///
/// # Example
///
/// ```rust
/// use postlist::{ContentItem, SearchIndex};
///
/// let items = vec![
///     ContentItem::new("a", "Docker en producción", ["DevOps"]),
///     ContentItem::new("b", "Hooks de React", ["React"]),
/// ];
/// let index = SearchIndex::build(&items, 0.35);
///
/// assert_eq!(index.search("dokcer"), Some(vec![0]));
/// assert_eq!(index.search("   "), None);
/// ```
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    fuzziness: f64,
}

impl SearchIndex {
    /// Builds the index for `items` with the given fuzziness threshold
    /// (clamped to `[0, 1]`).
    #[must_use]
    pub fn build(items: &[ContentItem], fuzziness: f64) -> Self {
        let _span = tracing::debug_span!("build_search_index", items = items.len(), fuzziness).entered();

        Self {
            records: items.iter().map(SearchRecord::from_item).collect(),
            fuzziness: clamp_fuzziness(fuzziness),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn fuzziness(&self) -> f64 {
        self.fuzziness
    }

    /// Ranks the whole collection against `query`.
    ///
    /// Returns `None` when the trimmed query is empty, meaning "no text filter
    /// applied"; callers must pass their working set through unchanged. An
    /// empty `Vec` means the filter ran and nothing matched.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<Vec<usize>> {
        self.search_within(query, 0..self.records.len())
    }

    /// Ranks only the given record positions against `query`.
    ///
    /// Positions outside the index are ignored. Same `None` contract as
    /// [`SearchIndex::search`].
    pub fn search_within<I>(&self, query: &str, candidates: I) -> Option<Vec<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return None;
        }

        let _span = tracing::debug_span!("search", tokens = tokens.len()).entered();

        let mut scored: Vec<(usize, f64)> = candidates
            .into_iter()
            .filter_map(|position| {
                let record = self.records.get(position)?;
                self.relevance(record, &tokens).map(|score| (position, score))
            })
            .collect();

        // Stable sort: equal scores keep collection order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        tracing::debug!(matches = scored.len(), "search ranked");
        Some(scored.into_iter().map(|(position, _)| position).collect())
    }

    fn relevance(&self, record: &SearchRecord, tokens: &[QueryToken]) -> Option<f64> {
        let mut total = 0.0;

        for token in tokens {
            let mut token_score = 0.0;
            let mut matched = false;

            for (field, text) in SearchField::ALL.iter().zip(&record.fields) {
                if let Some(ratio) = match_ratio(&token.chars, &token.text, text, self.fuzziness) {
                    matched = true;
                    token_score += field.weight() * (1.0 - ratio);
                }
            }

            if !matched {
                return None;
            }
            total += token_score;
        }

        #[allow(clippy::cast_precision_loss)]
        Some(total / tokens.len() as f64)
    }
}

fn tokenize(query: &str) -> Vec<QueryToken> {
    fold(query)
        .split_whitespace()
        .map(|token| {
            let chars: Vec<char> = token.chars().take(MAX_TOKEN_CHARS).collect();
            QueryToken {
                text: chars.iter().collect(),
                chars,
            }
        })
        .collect()
}

fn clamp_fuzziness(fuzziness: f64) -> f64 {
    if fuzziness.is_finite() {
        fuzziness.clamp(0.0, 1.0)
    } else {
        DEFAULT_FUZZINESS
    }
}
