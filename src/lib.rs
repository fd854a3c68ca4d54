//! Postlist: the list state engine of a blog front end.
//!
//! Postlist keeps a post list's browsing state (free-text query, selected
//! tags, current page) consistent across three places at once:
//! - The address bar, so filtered views are shareable and survive reloads
//! - Persistent local storage, so a returning reader finds their last view
//! - The in-memory state the view renders from
//!
//! On top of that state it derives a paginated result set via typo-tolerant
//! weighted search and tag intersection.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Hosts: CLI (main.rs), browser glue (web)           │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Reconciler
//! │  - ListController (mount, mutations, propagation)   │
//! │  - Event handling, keyboard shortcuts               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search Layer  │   │ Storage Layer │   │ Location      │
//! │ (search/)     │   │ (storage/)    │   │ (location/)   │
//! │ - Fuzzy index │   │ - Slot port   │   │ - URL port    │
//! │ - Filter/page │   │ - JSON file   │   │ - Query codec │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog & Domain Layers                            │
//! │  - Tag catalog (catalog/)                           │
//! │  - Content, list state, text folding, errors        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation (ui/) & Observability                 │
//! │  - View model, text renderer, tracing setup         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: List controller, event/action model, keyboard shortcuts
//! - [`catalog`]: Tag universe and usage counts
//! - [`domain`]: Core domain types (content, list state, errors)
//! - [`infrastructure`]: Platform paths
//! - [`location`]: Address-bar port and query-string codec
//! - [`search`]: Fuzzy search index and the filter/pagination pipeline
//! - [`storage`]: Storage slot port and the persisted list state
//! - [`ui`]: View model and text rendering
//! - [`observability`]: Tracing subscriber setup
//! - `web`: Browser adapters (`web` feature)
//!
//! # Configuration
//!
//! Hosts pass configuration either as a string map (element attributes,
//! environment) or as a TOML file:
//!
//! ```toml
//! page_size = 9
//! fuzziness = 0.35
//! storage_key = "postlist:list-state"
//! content_order = "newest-first"
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Ingest**: Normalize content records ([`parse_collection`])
//! 2. **Build**: Tag catalog and search index from the collection
//! 3. **Mount**: Resolve the state from URL, then storage, then defaults;
//!    write the resolved state back to both
//! 4. **Steady**: Every mutation writes URL and storage, then recomputes
//!
//! # Examples
//!
//! ```rust
//! use postlist::location::{Location, MemoryLocation};
//! use postlist::storage::MemorySlot;
//! use postlist::{mount, Config, ContentItem};
//!
//! let items = vec![
//!     ContentItem::new("docker", "Docker basics", ["DevOps"]),
//!     ContentItem::new("hooks", "React hooks", ["React"]),
//!     ContentItem::new("css", "Modern CSS", ["CSS", "React"]),
//! ];
//!
//! let mut list = mount(items, MemoryLocation::new("?tags=react"), MemorySlot::new(), &Config::default());
//! assert_eq!(list.total(), 2);
//!
//! list.set_query("hoks");
//! assert_eq!(list.items()[0].id, "hooks");
//! assert_eq!(list.location().query(), "q=hoks&tags=react");
//! ```
//!
//! # Key Design Decisions
//!
//! ## Fixed Precedence, Field by Field
//!
//! The URL wins over storage only for the fields it actually carries. A shared
//! link with `?tags=react` keeps the reader's stored query.
//!
//! ## Never Trust Projections
//!
//! URL and storage contents are sanitized on every read: unknown tags are
//! dropped, pages are clamped, malformed fields fall back individually, and
//! corrections are written back so they do not resurface.
//!
//! ## Storage Is Best-Effort
//!
//! Disabled or full storage degrades silently to URL plus memory. No storage
//! or address-bar failure ever reaches a mutation.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod location;
pub mod search;
pub mod storage;
pub mod ui;

pub mod observability;

#[cfg(feature = "web")]
pub mod web;

pub use app::{handle_event, Action, Event, KeyboardController, ListController};
pub use catalog::{Tag, TagCatalog};
pub use domain::{parse_collection, ContentItem, ContentOrder, ListState, PartialListState, PostlistError, Result};
pub use location::{HistoryMode, Location};
pub use search::{ResultPage, SearchIndex};
pub use storage::{PersistedStore, StorageSlot};

use search::DEFAULT_FUZZINESS;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use storage::DEFAULT_STORAGE_KEY;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Engine configuration.
///
/// # Example
///
/// ```toml
/// page_size = 6
/// fuzziness = 0.2
/// storage_key = "blog:list"
/// content_order = "as-provided"
/// trace_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Items per page. Default: 9
    pub page_size: usize,

    /// Fuzzy match threshold in `[0, 1]`; `0` requires exact substrings.
    /// Default: 0.35
    pub fuzziness: f64,

    /// Storage slot key for the persisted list state.
    ///
    /// Default: `"postlist:list-state"`
    pub storage_key: String,

    /// Ordering applied when ingesting content. Default: as provided
    pub content_order: ContentOrder,

    /// Tracing level for log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fuzziness: DEFAULT_FUZZINESS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            content_order: ContentOrder::AsProvided,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Lenient: every key is optional and invalid values fall back to their
    /// defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `page_size`: String → `usize` (falls back to 9 on parse error or zero)
    /// - `fuzziness`: String → `f64`, clamped to `[0, 1]` (falls back to 0.35)
    /// - `storage_key`: String (falls back to the default when blank)
    /// - `content_order`: `as-provided` | `newest-first`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use postlist::{Config, ContentOrder};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "6".to_string());
    /// map.insert("fuzziness".to_string(), "1.7".to_string());
    /// map.insert("content_order".to_string(), "newest-first".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 6);
    /// assert_eq!(config.fuzziness, 1.0);
    /// assert_eq!(config.content_order, ContentOrder::NewestFirst);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&size| size >= 1)
            .unwrap_or(defaults.page_size);

        let fuzziness = config
            .get("fuzziness")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|f| f.is_finite())
            .map_or(defaults.fuzziness, |f| f.clamp(0.0, 1.0));

        let storage_key = config
            .get("storage_key")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.storage_key, String::from);

        let content_order = config
            .get("content_order")
            .and_then(|s| ContentOrder::from_name(s.trim()))
            .unwrap_or(defaults.content_order);

        Self {
            page_size,
            fuzziness,
            storage_key,
            content_order,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PostlistError::Config`] for invalid TOML, unknown keys, a zero
    /// page size, or a fuzziness outside `[0, 1]`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| PostlistError::Config(e.to_string()))?;

        if config.page_size == 0 {
            return Err(PostlistError::Config("page_size must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&config.fuzziness) {
            return Err(PostlistError::Config(format!(
                "fuzziness must be between 0 and 1, got {}",
                config.fuzziness
            )));
        }
        if config.storage_key.trim().is_empty() {
            return Err(PostlistError::Config("storage_key must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PostlistError::Io`] if the file cannot be read, or the errors
    /// of [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = ?path, page_size = config.page_size, "configuration loaded");
        Ok(config)
    }
}

/// Creates a controller and mounts it.
///
/// Shorthand for [`ListController::new`] followed by
/// [`ListController::mount`]: on return the state has been resolved from
/// `location` and `slot` and written back to both.
pub fn mount<L: Location, S: StorageSlot>(
    collection: Vec<ContentItem>,
    location: L,
    slot: S,
    config: &Config,
) -> ListController<L, S> {
    tracing::debug!(items = collection.len(), "mounting list");
    let mut list = ListController::new(collection, location, slot, config);
    list.mount();
    list
}
