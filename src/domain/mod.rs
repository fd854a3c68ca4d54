//! Domain layer: content, list state, text normalization and errors.
//!
//! These types carry no host or storage concerns. Everything above this layer
//! (catalog, search, reconciler) works exclusively on them.
//!
//! # Organization
//!
//! - [`content`]: Canonical content items and alias-tolerant ingestion
//! - [`error`]: Error type and result alias
//! - [`state`]: Canonical [`ListState`] and untrusted [`PartialListState`]
//! - [`text`]: Case/diacritic folding and slugs

pub mod content;
pub mod error;
pub mod state;
pub mod text;

pub use content::{parse_collection, ContentItem, ContentOrder, ItemTag};
pub use error::{PostlistError, Result};
pub use state::{ListState, PartialListState};
