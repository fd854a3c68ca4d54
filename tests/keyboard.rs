use postlist::app::keyboard::{Key, KeyCommand, KeyOutcome, KeyPress};
use postlist::app::modes::FocusContext;
use postlist::app::{handle_event, Action, Event, KeyboardController, ListController};
use postlist::location::{Location, MemoryLocation};
use postlist::storage::MemorySlot;
use postlist::{Config, ContentItem};

type List = ListController<MemoryLocation, MemorySlot>;

fn attached() -> KeyboardController {
    let mut keyboard = KeyboardController::new();
    keyboard.attach();
    keyboard
}

fn list(url: &str) -> List {
    let items = (1..=5)
        .map(|n| ContentItem::new(format!("p{n}"), format!("Entry {n}"), ["Notes"]))
        .chain([ContentItem::new("d", "Docker basics", ["DevOps"])])
        .collect();
    let config = Config {
        page_size: 2,
        ..Config::default()
    };
    let mut list = ListController::new(items, MemoryLocation::new(url), MemorySlot::new(), &config);
    list.mount();
    list
}

fn key(list: &mut List, keyboard: &KeyboardController, key: Key, focus: FocusContext) -> (bool, Vec<Action>) {
    handle_event(list, keyboard, Event::KeyPressed {
        press: KeyPress::plain(key),
        focus,
    })
}

#[test]
fn dom_key_names_are_recognized() {
    assert_eq!(Key::from_dom_key("/"), Key::Slash);
    assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
    assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
    assert_eq!(Key::from_dom_key("?"), Key::Other);
    assert_eq!(Key::from_dom_key("Enter"), Key::Other);
}

#[test]
fn detached_controller_ignores_everything() {
    let mut keyboard = attached();
    keyboard.detach();
    assert!(!keyboard.is_attached());

    let slash = KeyPress::plain(Key::Slash);
    assert_eq!(keyboard.handle_key(&slash, FocusContext::Document, "docker"), KeyOutcome::default());
}

#[test]
fn slash_focuses_search_outside_text_entry() {
    let keyboard = attached();
    let slash = KeyPress::plain(Key::Slash);

    for focus in [FocusContext::Document, FocusContext::ListControl] {
        let outcome = keyboard.handle_key(&slash, focus, "");
        assert!(outcome.consumed);
        assert_eq!(outcome.command, Some(KeyCommand::FocusSearch));
    }
}

#[test]
fn slash_types_normally_in_text_entry() {
    let keyboard = attached();
    let slash = KeyPress::plain(Key::Slash);

    for focus in [FocusContext::SearchInput, FocusContext::Editable, FocusContext::ForeignControl] {
        assert!(!keyboard.handle_key(&slash, focus, "").consumed, "{focus:?}");
    }
}

#[test]
fn slash_with_modifier_is_left_to_the_browser() {
    let keyboard = attached();
    for press in [
        KeyPress { ctrl: true, ..KeyPress::plain(Key::Slash) },
        KeyPress { alt: true, ..KeyPress::plain(Key::Slash) },
        KeyPress { meta: true, ..KeyPress::plain(Key::Slash) },
    ] {
        assert!(!keyboard.handle_key(&press, FocusContext::Document, "").consumed);
    }
}

#[test]
fn escape_in_search_input_is_always_consumed() {
    let keyboard = attached();
    let escape = KeyPress::plain(Key::Escape);

    let with_query = keyboard.handle_key(&escape, FocusContext::SearchInput, "docker");
    assert!(with_query.consumed);
    assert_eq!(with_query.command, Some(KeyCommand::ClearQuery));

    let without_query = keyboard.handle_key(&escape, FocusContext::SearchInput, "");
    assert!(without_query.consumed);
    assert_eq!(without_query.command, None);
}

#[test]
fn escape_in_search_input_clears_whitespace_only_text() {
    let keyboard = attached();
    let escape = KeyPress::plain(Key::Escape);

    let outcome = keyboard.handle_key(&escape, FocusContext::SearchInput, "  ");
    assert!(outcome.consumed);
    assert_eq!(outcome.command, Some(KeyCommand::ClearQuery));
}

#[test]
fn escape_elsewhere_ignores_whitespace_only_text() {
    let keyboard = attached();
    let escape = KeyPress::plain(Key::Escape);

    for focus in [FocusContext::Document, FocusContext::ListControl] {
        assert!(!keyboard.handle_key(&escape, focus, "  ").consumed, "{focus:?}");
    }
}

#[test]
fn escape_elsewhere_only_acts_on_an_active_query() {
    let keyboard = attached();
    let escape = KeyPress::plain(Key::Escape);

    assert_eq!(
        keyboard.handle_key(&escape, FocusContext::Document, "docker").command,
        Some(KeyCommand::ClearQuery)
    );
    assert!(!keyboard.handle_key(&escape, FocusContext::Document, "").consumed);
    assert!(!keyboard.handle_key(&escape, FocusContext::Editable, "docker").consumed);
    assert!(!keyboard.handle_key(&escape, FocusContext::ForeignControl, "docker").consumed);
}

#[test]
fn slash_event_requests_focus() {
    let mut list = list("");
    let (changed, actions) = key(&mut list, &attached(), Key::Slash, FocusContext::Document);

    assert!(!changed);
    assert_eq!(actions, [Action::PreventDefault, Action::FocusSearchInput]);
}

#[test]
fn escape_event_clears_the_query() {
    let mut list = list("?q=docker");
    assert_eq!(list.total(), 1);

    let (changed, actions) = key(&mut list, &attached(), Key::Escape, FocusContext::SearchInput);

    assert!(changed);
    assert_eq!(actions, [Action::PreventDefault]);
    assert_eq!(list.state().query, "");
    assert_eq!(list.location().query(), "");
    assert_eq!(list.total(), 6);
}

#[test]
fn escape_event_clears_a_whitespace_query() {
    let mut list = list("?q=%20%20");
    assert_eq!(list.state().query, "  ");

    let (changed, actions) = key(&mut list, &attached(), Key::Escape, FocusContext::SearchInput);

    assert!(changed);
    assert_eq!(actions, [Action::PreventDefault]);
    assert_eq!(list.state().query, "");
    assert_eq!(list.location().query(), "");
}

#[test]
fn escape_clearing_the_query_from_a_later_page_scrolls_up() {
    let mut list = list("?q=entry&page=2");
    assert_eq!(list.page(), 2);

    let (changed, actions) = key(&mut list, &attached(), Key::Escape, FocusContext::ListControl);

    assert!(changed);
    assert_eq!(actions, [Action::PreventDefault, Action::ScrollToTop]);
    assert_eq!(list.page(), 1);
}

#[test]
fn unhandled_key_does_nothing() {
    let mut list = list("?q=docker");
    let (changed, actions) = key(&mut list, &attached(), Key::Other, FocusContext::Document);

    assert!(!changed);
    assert!(actions.is_empty());
    assert_eq!(list.state().query, "docker");
}

#[test]
fn page_changes_scroll_to_top() {
    let mut list = list("");
    let keyboard = attached();

    assert_eq!(handle_event(&mut list, &keyboard, Event::NextPage), (true, vec![Action::ScrollToTop]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::PageSelected(3)), (true, vec![Action::ScrollToTop]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::NextPage), (false, vec![]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::PreviousPage), (true, vec![Action::ScrollToTop]));
    assert_eq!(list.page(), 2);
}

#[test]
fn filter_events_report_changes() {
    let mut list = list("");
    let keyboard = attached();

    assert_eq!(handle_event(&mut list, &keyboard, Event::QueryChanged("dock".into())), (true, vec![]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::TagToggled("devops".into())), (true, vec![]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::TagToggled("ghost".into())), (false, vec![]));
    assert_eq!(list.total(), 1);

    assert_eq!(handle_event(&mut list, &keyboard, Event::ResetFilters), (true, vec![]));
    assert_eq!(handle_event(&mut list, &keyboard, Event::ResetFilters), (false, vec![]));
    assert_eq!(list.total(), 6);
}

#[test]
fn content_replacement_always_rerenders() {
    let mut list = list("?tags=devops");
    let keyboard = attached();

    let event = Event::ContentReplaced(vec![ContentItem::new("x", "Kubernetes", ["DevOps"])]);
    assert_eq!(handle_event(&mut list, &keyboard, event), (true, vec![]));
    assert_eq!(list.items()[0].id, "x");
}
