//! Global keyboard shortcuts for the list.
//!
//! | Key      | Focus                  | Effect                                   |
//! |----------|------------------------|------------------------------------------|
//! | `/`      | document, list control | focus the search input                   |
//! | `Escape` | search input           | clear the input, even whitespace only    |
//! | `Escape` | document, list control | clear the query, only when one is active |
//!
//! Keys are never intercepted while focus sits in another editable element or
//! a foreign control, and `/` is ignored when a modifier is held so browser
//! and OS shortcuts keep working.

use super::modes::FocusContext;

/// Keys the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Slash,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "/" => Self::Slash,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyPress {
    /// A press of `key` without modifiers.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    #[must_use]
    pub const fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// What a shortcut asks the list to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    FocusSearch,
    ClearQuery,
}

/// Result of offering a key press to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Whether the key's default behaviour must be suppressed.
    pub consumed: bool,
    /// State or focus change to apply, if any.
    pub command: Option<KeyCommand>,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        consumed: false,
        command: None,
    };

    const fn consumed(command: Option<KeyCommand>) -> Self {
        Self {
            consumed: true,
            command,
        }
    }
}

/// Binds `/` and `Escape` to list commands while attached.
///
/// # Example
///
/// ```rust
/// use postlist::app::keyboard::{Key, KeyCommand, KeyPress, KeyboardController};
/// use postlist::app::modes::FocusContext;
///
/// let mut keyboard = KeyboardController::new();
/// let slash = KeyPress::plain(Key::Slash);
///
/// assert!(!keyboard.handle_key(&slash, FocusContext::Document, "").consumed);
///
/// keyboard.attach();
/// let outcome = keyboard.handle_key(&slash, FocusContext::Document, "");
/// assert!(outcome.consumed);
/// assert_eq!(outcome.command, Some(KeyCommand::FocusSearch));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    attached: bool,
}

impl KeyboardController {
    #[must_use]
    pub const fn new() -> Self {
        Self { attached: false }
    }

    /// Starts intercepting keys. Idempotent.
    pub fn attach(&mut self) {
        if !self.attached {
            tracing::debug!("keyboard shortcuts attached");
        }
        self.attached = true;
    }

    /// Stops intercepting keys. Idempotent.
    pub fn detach(&mut self) {
        if self.attached {
            tracing::debug!("keyboard shortcuts detached");
        }
        self.attached = false;
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Decides what a key press does.
    ///
    /// # Parameters
    ///
    /// * `press` - The key and its modifiers
    /// * `focus` - Where focus currently is
    /// * `query` - Current query text as typed
    #[must_use]
    pub fn handle_key(&self, press: &KeyPress, focus: FocusContext, query: &str) -> KeyOutcome {
        if !self.attached {
            return KeyOutcome::IGNORED;
        }

        let outcome = match (press.key, focus) {
            (Key::Slash, _) if press.has_modifier() => KeyOutcome::IGNORED,
            (Key::Slash, focus) if focus.allows_shortcuts() => {
                KeyOutcome::consumed(Some(KeyCommand::FocusSearch))
            }
            (Key::Escape, FocusContext::SearchInput) => {
                KeyOutcome::consumed((!query.is_empty()).then_some(KeyCommand::ClearQuery))
            }
            (Key::Escape, focus) if focus.allows_shortcuts() && !query.trim().is_empty() => {
                KeyOutcome::consumed(Some(KeyCommand::ClearQuery))
            }
            _ => KeyOutcome::IGNORED,
        };

        tracing::trace!(key = ?press.key, ?focus, query_len = query.len(), consumed = outcome.consumed, "key handled");
        outcome
    }
}
