//! Side effects the host view must perform after an event.
//!
//! The engine owns the list state and writes URL and storage itself. What it
//! cannot do is touch the view: moving focus and suppressing a key's default
//! browser behaviour are returned as [`Action`]s from
//! [`handle_event`](crate::app::handle_event) for the host to execute in order.
//!
//! # Example
//!
//! ```rust
//! use postlist::app::Action;
//!
//! let actions = vec![Action::PreventDefault, Action::FocusSearchInput];
//! assert!(actions.contains(&Action::FocusSearchInput));
//! ```

/// Commands for the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Suppresses the key's default behaviour (typing `/`, closing a dialog).
    ///
    /// Emitted whenever a shortcut consumed the key press.
    PreventDefault,

    /// Moves focus to the list's search input.
    FocusSearchInput,

    /// Scrolls the list back to its top, after the visible page changed.
    ScrollToTop,
}
