//! Mapping between [`ListState`] and the durable storage slot.
//!
//! The slot holds one JSON object under a fixed key:
//!
//! ```json
//! { "q": "hooks", "tags": ["css", "react"], "page": 2 }
//! ```
//!
//! Reads never fail. Whatever the slot contains is recovered field by field: a
//! wrong type on one field only makes *that* field absent. Writes are
//! best-effort: failures are logged and swallowed so storage problems never
//! reach the mutation path.

use super::backend::StorageSlot;
use crate::domain::text::tag_id;
use crate::domain::{ListState, PartialListState};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Default key of the list state slot.
pub const DEFAULT_STORAGE_KEY: &str = "postlist:list-state";

/// Serialized projection written to the slot.
#[derive(Debug, Serialize)]
struct PersistedState<'a> {
    q: &'a str,
    tags: Vec<&'a str>,
    page: u32,
}

/// List state persistence over a [`StorageSlot`].
#[derive(Debug)]
pub struct PersistedStore<S: StorageSlot> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> PersistedStore<S> {
    /// Wraps `slot`, storing the state under `key`.
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    /// Unwraps the store, returning the slot.
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Reads the persisted state.
    ///
    /// Returns `None` when the slot is empty, unreadable, not JSON, or not a
    /// JSON object. Otherwise returns the fields that could be recovered.
    ///
    /// # Example
    ///
    /// ```
    /// use postlist::storage::{MemorySlot, PersistedStore};
    ///
    /// let slot = MemorySlot::with_entry("k", r#"{"q": "hooks", "tags": "oops", "page": 3}"#);
    /// let store = PersistedStore::new(slot, "k");
    /// let partial = store.load().unwrap();
    ///
    /// assert_eq!(partial.query.as_deref(), Some("hooks"));
    /// assert_eq!(partial.tags, None);
    /// assert_eq!(partial.page, Some(3));
    /// ```
    #[must_use]
    pub fn load(&self) -> Option<PartialListState> {
        let _span = tracing::debug_span!("persisted_load", key = %self.key).entered();

        let raw = match self.slot.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no persisted state");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted state unreadable, ignoring");
                return None;
            }
        };

        let object = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                tracing::debug!("persisted state is not an object, ignoring");
                return None;
            }
            Err(e) => {
                tracing::debug!(error = %e, "persisted state is not valid JSON, ignoring");
                return None;
            }
        };

        let partial = recover_fields(&object);
        tracing::debug!(
            has_query = partial.query.is_some(),
            has_tags = partial.tags.is_some(),
            has_page = partial.page.is_some(),
            "persisted state loaded"
        );
        Some(partial)
    }

    /// Writes `state` to the slot, swallowing any failure.
    ///
    /// Returns whether the write succeeded so callers and tests can observe
    /// degradation without it ever being an error.
    pub fn save(&mut self, state: &ListState) -> bool {
        let persisted = PersistedState {
            q: &state.query,
            tags: state.tags.iter().map(String::as_str).collect(),
            page: state.page,
        };

        let json = match serde_json::to_string(&persisted) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize list state");
                return false;
            }
        };

        match self.slot.set(&self.key, &json) {
            Ok(()) => {
                tracing::trace!(key = %self.key, "list state persisted");
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist list state, continuing without storage");
                false
            }
        }
    }
}

fn recover_fields(object: &Map<String, Value>) -> PartialListState {
    let query = object.get("q").and_then(Value::as_str).map(str::to_string);

    let tags = object.get("tags").and_then(Value::as_array).map(|entries| {
        entries
            .iter()
            .filter_map(Value::as_str)
            .map(tag_id)
            .filter(|id| !id.is_empty())
            .collect::<BTreeSet<_>>()
    });

    let page = object.get("page").and_then(page_from_json);

    PartialListState { query, tags, page }
}

/// Accepts positive integral numbers (`2` or `2.0`), saturating at `u32::MAX`.
fn page_from_json(value: &Value) -> Option<u32> {
    if let Some(page) = value.as_u64() {
        return (page >= 1).then(|| u32::try_from(page).unwrap_or(u32::MAX));
    }

    let page = value.as_f64()?;
    if page.is_finite() && page >= 1.0 && page.fract() == 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return Some(page.min(f64::from(u32::MAX)) as u32);
    }
    None
}
