//! Event handling and state transition logic.
//!
//! This module translates view-layer events into list mutations and returns
//! the side effects the host must perform. It is the single entry point a
//! view needs: input changes, chip clicks, pagination buttons, key presses
//! and content reloads all arrive as an [`Event`].
//!
//! # Architecture
//!
//! ```text
//! View → Event → handle_event → ListController mutation → URL + storage writes
//!                     │                                          │
//!                     └──────────── Vec<Action> ◀── recompute ◀──┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use postlist::app::{handle_event, Action, Event, KeyboardController, ListController};
//! use postlist::app::keyboard::{Key, KeyPress};
//! use postlist::app::modes::FocusContext;
//! use postlist::location::MemoryLocation;
//! use postlist::storage::MemorySlot;
//! use postlist::{Config, ContentItem};
//!
//! let items = vec![ContentItem::new("a", "React hooks", ["react"])];
//! let mut list = ListController::new(items, MemoryLocation::default(), MemorySlot::new(), &Config::default());
//! let mut keyboard = KeyboardController::new();
//! list.mount();
//! keyboard.attach();
//!
//! let event = Event::KeyPressed { press: KeyPress::plain(Key::Slash), focus: FocusContext::Document };
//! let (changed, actions) = handle_event(&mut list, &keyboard, event);
//! assert!(!changed);
//! assert_eq!(actions, vec![Action::PreventDefault, Action::FocusSearchInput]);
//! ```

use super::keyboard::{KeyCommand, KeyPress, KeyboardController};
use super::modes::FocusContext;
use super::{Action, ListController};
use crate::domain::ContentItem;
use crate::location::Location;
use crate::storage::StorageSlot;

/// Events raised by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search input's value changed.
    QueryChanged(String),

    /// A tag chip was clicked.
    TagToggled(String),

    /// A numbered pagination button was clicked.
    PageSelected(u32),

    NextPage,
    PreviousPage,

    /// The empty state's "clear filters" button was clicked.
    ResetFilters,

    /// A key was pressed anywhere on the page.
    KeyPressed {
        press: KeyPress,
        focus: FocusContext,
    },

    /// The content source delivered a new collection.
    ContentReplaced(Vec<ContentItem>),
}

/// Processes an event and returns whether the list changed plus the actions
/// the host must execute in order.
///
/// # Parameters
///
/// * `list` - The mounted list controller
/// * `keyboard` - Shortcut bindings, consulted for [`Event::KeyPressed`]
/// * `event` - Event to process
///
/// # Returns
///
/// `(changed, actions)`. `changed` is true when the visible state changed and
/// the view should re-render from [`ListController::view`].
pub fn handle_event<L: Location, S: StorageSlot>(
    list: &mut ListController<L, S>,
    keyboard: &KeyboardController,
    event: Event,
) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(&event)).entered();

    let before = list.state().clone();
    let page_before = list.page();

    let mut actions = Vec::new();
    match event {
        Event::QueryChanged(query) => list.set_query(query),
        Event::TagToggled(id) => {
            list.toggle_tag(&id);
        }
        Event::PageSelected(page) => list.set_page(page),
        Event::NextPage => {
            list.next_page();
        }
        Event::PreviousPage => {
            list.previous_page();
        }
        Event::ResetFilters => list.reset(),
        Event::KeyPressed { press, focus } => {
            let outcome = keyboard.handle_key(&press, focus, &list.state().query);
            if outcome.consumed {
                actions.push(Action::PreventDefault);
            }
            match outcome.command {
                Some(KeyCommand::FocusSearch) => actions.push(Action::FocusSearchInput),
                Some(KeyCommand::ClearQuery) => list.set_query(String::new()),
                None => {}
            }
        }
        Event::ContentReplaced(items) => {
            list.replace_collection(items);
            // Result membership may change even when the state does not.
            return (true, actions);
        }
    }

    let changed = *list.state() != before;
    if list.page() != page_before {
        actions.push(Action::ScrollToTop);
    }

    tracing::debug!(changed, actions = actions.len(), "event handled");
    (changed, actions)
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::QueryChanged(_) => "query_changed",
        Event::TagToggled(_) => "tag_toggled",
        Event::PageSelected(_) => "page_selected",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::ResetFilters => "reset_filters",
        Event::KeyPressed { .. } => "key_pressed",
        Event::ContentReplaced(_) => "content_replaced",
    }
}
