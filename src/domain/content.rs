//! Content items and their ingestion from loosely shaped records.
//!
//! Content arrives from sources that disagree on field names: the same post
//! may carry its title under `title` or `titulo`, its tags under `tags`,
//! `etiquetas` or `tag_list`. Ingestion resolves every alias once and produces
//! [`ContentItem`], the only shape the catalog, search index and filter engine
//! ever see.
//!
//! # Accepted Aliases
//!
//! | Field        | Keys (first present wins)                                   |
//! |--------------|-------------------------------------------------------------|
//! | id           | `id`, `slug`, `identifier` (string or number)               |
//! | title        | `title`, `titulo`, `name`                                   |
//! | excerpt      | `excerpt`, `resumen`, `summary`                             |
//! | body         | `body`, `content`, `contenido`                              |
//! | tags         | `tags`, `etiquetas`, `tag_list`                             |
//! | published_at | `published_at`, `created_at`, `createdAt`, `date`, `fecha`  |
//! | author       | `author`, `autor`                                           |
//! | image        | `image`, `imagen`, `cover`                                  |

use super::error::{PostlistError, Result};
use super::text::{slugify, tag_id};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Title used when a record carries none.
pub const UNTITLED: &str = "Untitled post";

const ID_KEYS: &[&str] = &["id", "slug", "identifier"];
const TITLE_KEYS: &[&str] = &["title", "titulo", "name"];
const EXCERPT_KEYS: &[&str] = &["excerpt", "resumen", "summary"];
const BODY_KEYS: &[&str] = &["body", "content", "contenido"];
const TAG_KEYS: &[&str] = &["tags", "etiquetas", "tag_list"];
const DATE_KEYS: &[&str] = &["published_at", "created_at", "createdAt", "date", "fecha"];
const AUTHOR_KEYS: &[&str] = &["author", "autor"];
const IMAGE_KEYS: &[&str] = &["image", "imagen", "cover"];

/// A tag reference carried by a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemTag {
    /// Normalized identifier (see [`tag_id`]).
    pub id: String,
    /// Label as written by the author (e.g. `"Filosofía"`).
    pub label: String,
}

impl ItemTag {
    /// Builds a tag reference from a label. Returns `None` when the label
    /// has no alphanumeric content.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let id = tag_id(label);
        if id.is_empty() {
            return None;
        }
        Some(Self {
            id,
            label: label.to_string(),
        })
    }
}

/// A single piece of content in canonical shape.
///
/// Immutable once ingested. `tags` keeps the order the source listed them,
/// deduplicated by identifier (first label wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, unique within a collection.
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub tags: Vec<ItemTag>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub image: Option<String>,
}

impl ContentItem {
    /// Creates an item with the given identifier, title and tag labels and
    /// empty text fields.
    ///
    /// # Example
    ///
    /// ```
    /// use postlist::ContentItem;
    ///
    /// let item = ContentItem::new("hooks-101", "Hooks 101", ["React", "Tutorial", "react"]);
    /// assert_eq!(item.tag_ids().collect::<Vec<_>>(), vec!["react", "tutorial"]);
    /// ```
    #[must_use]
    pub fn new<I, T>(id: impl Into<String>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: String::new(),
            body: String::new(),
            tags: dedupe_labels(tags.into_iter().map(Into::into)),
            published_at: None,
            author: None,
            image: None,
        }
    }

    /// Iterates the item's tag identifiers in source order.
    pub fn tag_ids(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.id.as_str())
    }

    /// Whether the item carries the tag with identifier `id`.
    #[must_use]
    pub fn has_tag(&self, id: &str) -> bool {
        self.tags.iter().any(|tag| tag.id == id)
    }

    /// Sets the excerpt.
    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the publication timestamp.
    #[must_use]
    pub const fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}

/// Order applied to a collection at ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentOrder {
    /// Keep the order of the source.
    #[default]
    AsProvided,
    /// Most recently published first; undated items last, in source order.
    NewestFirst,
}

impl ContentOrder {
    /// Parses `as-provided` / `newest-first` (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "as-provided" | "natural" => Some(Self::AsProvided),
            "newest-first" | "newest" => Some(Self::NewestFirst),
            _ => None,
        }
    }
}

/// Parses a JSON array of content records into canonical items.
///
/// # Errors
///
/// Returns [`PostlistError::Json`] if `json` is not valid JSON and
/// [`PostlistError::Content`] if it is not an array. Individual entries that
/// are not objects are skipped with a debug log rather than failing the batch.
///
/// # Example
///
/// ```
/// use postlist::domain::content::{parse_collection, ContentOrder};
///
/// let json = r#"[{"titulo": "Hola", "etiquetas": ["React"], "fecha": "2024-03-01"}]"#;
/// let items = parse_collection(json, ContentOrder::AsProvided)?;
/// assert_eq!(items[0].title, "Hola");
/// assert_eq!(items[0].id, "hola");
/// # Ok::<(), postlist::PostlistError>(())
/// ```
pub fn parse_collection(json: &str, order: ContentOrder) -> Result<Vec<ContentItem>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = value else {
        return Err(PostlistError::Content(
            "expected a JSON array of content records".to_string(),
        ));
    };

    let records: Vec<Map<String, Value>> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry {
            Value::Object(record) => Some(record),
            other => {
                tracing::debug!(position, kind = %json_kind(&other), "skipping non-object content record");
                None
            }
        })
        .collect();

    Ok(normalize_records(records, order))
}

/// Normalizes raw records into canonical items with unique identifiers.
///
/// Identifier resolution: explicit id, else the slug of the title, else
/// `post-<n>` (one-based position). A repeated identifier gets a `-<n>` suffix.
#[must_use]
pub fn normalize_records(records: Vec<Map<String, Value>>, order: ContentOrder) -> Vec<ContentItem> {
    let _span = tracing::debug_span!("normalize_records", count = records.len()).entered();

    let mut seen_ids = HashSet::new();
    let mut items: Vec<ContentItem> = records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let mut item = normalize_record(record, position);
            if !seen_ids.insert(item.id.clone()) {
                let mut suffix = 2;
                while seen_ids.contains(&format!("{}-{suffix}", item.id)) {
                    suffix += 1;
                }
                let unique = format!("{}-{suffix}", item.id);
                tracing::debug!(duplicate = %item.id, renamed = %unique, "duplicate content id");
                item.id = unique;
                seen_ids.insert(item.id.clone());
            }
            item
        })
        .collect();

    if order == ContentOrder::NewestFirst {
        // Stable sort keeps source order among equal and undated items.
        items.sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    tracing::debug!(items = items.len(), ?order, "content normalized");
    items
}

fn normalize_record(record: &Map<String, Value>, position: usize) -> ContentItem {
    let title = first_text(record, TITLE_KEYS)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let id = first_value(record, ID_KEYS)
        .and_then(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .filter(|id| !id.is_empty())
        .or_else(|| title.as_deref().map(slugify).filter(|slug| !slug.is_empty()))
        .unwrap_or_else(|| format!("post-{}", position + 1));

    let tags = first_value(record, TAG_KEYS)
        .and_then(Value::as_array)
        .map(|labels| {
            dedupe_labels(labels.iter().filter_map(|label| match label {
                Value::String(s) => Some(s.clone()),
                Value::Object(tag) => first_text(tag, &["name", "label", "slug"]).map(str::to_string),
                _ => None,
            }))
        })
        .unwrap_or_default();

    ContentItem {
        id,
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        excerpt: first_text(record, EXCERPT_KEYS).unwrap_or_default().to_string(),
        body: first_text(record, BODY_KEYS).unwrap_or_default().to_string(),
        tags,
        published_at: first_text(record, DATE_KEYS).and_then(parse_timestamp),
        author: first_text(record, AUTHOR_KEYS)
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()),
        image: first_text(record, IMAGE_KEYS).map(str::to_string),
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn dedupe_labels(labels: impl Iterator<Item = String>) -> Vec<ItemTag> {
    let mut seen = HashSet::new();
    labels
        .filter_map(|label| ItemTag::from_label(&label))
        .filter(|tag| seen.insert(tag.id.clone()))
        .collect()
}

fn first_value<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

fn first_text<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find_map(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
