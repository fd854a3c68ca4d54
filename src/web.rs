//! Browser adapters (enabled with the `web` feature).
//!
//! Glue between the engine's ports and the DOM:
//!
//! - [`BrowserLocation`]: [`Location`] over `window.location` and `history`
//! - [`LocalStorageSlot`]: [`StorageSlot`] over `window.localStorage`
//! - [`key_press_from_event`] and [`focus_context`]: inputs for the
//!   [`KeyboardController`](crate::app::KeyboardController)
//!
//! A typical host wires them like this:
//!
//! ```rust,ignore
//! let location = BrowserLocation::new()?;
//! let slot = LocalStorageSlot::new();
//! let mut list = ListController::new(items, location, slot, &config);
//! list.mount();
//!
//! // in the document keydown listener:
//! let focus = focus_context(&document, "post-search", "post-list");
//! let (changed, actions) = handle_event(&mut list, &keyboard, Event::KeyPressed {
//!     press: key_press_from_event(&event),
//!     focus,
//! });
//! ```

use crate::app::keyboard::{Key, KeyPress};
use crate::app::modes::FocusContext;
use crate::domain::error::{PostlistError, Result};
use crate::location::{HistoryMode, Location};
use crate::storage::StorageSlot;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent, Storage, Window};

fn location_error(value: &JsValue) -> PostlistError {
    PostlistError::Location(format!("{value:?}"))
}

fn storage_error(value: &JsValue) -> PostlistError {
    PostlistError::Storage(format!("{value:?}"))
}

/// The browser address bar.
///
/// Writes keep the current path and fragment and only swap the query string.
#[derive(Debug, Clone)]
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    /// # Errors
    ///
    /// Returns [`PostlistError::Location`] outside a window context (workers).
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| PostlistError::Location("no global window".to_string()))?;
        Ok(Self { window })
    }
}

impl Location for BrowserLocation {
    fn query(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn write_query(&mut self, query: &str, mode: HistoryMode) -> Result<()> {
        let location = self.window.location();
        let path = location.pathname().map_err(|e| location_error(&e))?;
        let hash = location.hash().map_err(|e| location_error(&e))?;
        let url = if query.is_empty() {
            format!("{path}{hash}")
        } else {
            format!("{path}?{query}{hash}")
        };

        let history = self.window.history().map_err(|e| location_error(&e))?;
        match mode {
            HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
            HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
        }
        .map_err(|e| location_error(&e))
    }
}

/// `window.localStorage`.
///
/// Storage can be missing (privacy modes, sandboxed frames) or throw on
/// access. Then every read and write fails, which the persisted store logs
/// and ignores.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    storage: Option<Storage>,
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageSlot {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = ?e, "localStorage is not accessible");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| PostlistError::Storage("localStorage is unavailable".to_string()))
    }
}

impl StorageSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| storage_error(&e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(|e| storage_error(&e))
    }
}

/// Reads key and modifier state from a DOM keyboard event.
#[must_use]
pub fn key_press_from_event(event: &KeyboardEvent) -> KeyPress {
    KeyPress {
        key: Key::from_dom_key(&event.key()),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    }
}

/// Classifies `document.activeElement`.
///
/// # Parameters
///
/// * `document` - The page document
/// * `search_input_id` - Element id of the list's search input
/// * `list_root_id` - Element id of the list's container
#[must_use]
pub fn focus_context(document: &Document, search_input_id: &str, list_root_id: &str) -> FocusContext {
    let Some(active) = document.active_element() else {
        return FocusContext::Document;
    };

    let tag = active.tag_name().to_ascii_uppercase();
    if tag == "BODY" || tag == "HTML" {
        return FocusContext::Document;
    }
    if active.id() == search_input_id {
        return FocusContext::SearchInput;
    }

    let content_editable = active
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    if matches!(tag.as_str(), "INPUT" | "TEXTAREA" | "SELECT") || content_editable {
        return FocusContext::Editable;
    }

    let inside_list = active
        .closest(&format!("#{list_root_id}"))
        .ok()
        .flatten()
        .is_some();
    if inside_list {
        FocusContext::ListControl
    } else {
        FocusContext::ForeignControl
    }
}
