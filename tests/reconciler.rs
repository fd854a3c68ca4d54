use postlist::app::{ListController, Phase};
use postlist::location::{Location, MemoryLocation};
use postlist::storage::{MemorySlot, DEFAULT_STORAGE_KEY};
use postlist::{Config, ContentItem, ListState};
use serde_json::{json, Value};

type List = ListController<MemoryLocation, MemorySlot>;

fn post(id: &str, title: &str, tags: &[&str]) -> ContentItem {
    ContentItem::new(id, title, tags.iter().copied())
}

fn config(page_size: usize) -> Config {
    Config {
        page_size,
        ..Config::default()
    }
}

fn mounted(items: Vec<ContentItem>, url: &str, slot: MemorySlot, page_size: usize) -> List {
    let mut list = ListController::new(items, MemoryLocation::new(url), slot, &config(page_size));
    list.mount();
    list
}

fn stored(list: &List) -> Value {
    let raw = list
        .store()
        .slot()
        .peek(DEFAULT_STORAGE_KEY)
        .expect("state persisted");
    serde_json::from_str(raw).expect("valid json")
}

/// Seven posts, the first two tagged `react`.
fn seven_posts() -> Vec<ContentItem> {
    vec![
        post("p1", "Hooks in depth", &["React"]),
        post("p2", "Suspense patterns", &["React"]),
        post("p3", "Docker basics", &["DevOps"]),
        post("p4", "Compose files", &["DevOps"]),
        post("p5", "Grid layouts", &["CSS"]),
        post("p6", "Flexbox tricks", &["CSS"]),
        post("p7", "Kant for engineers", &["Filosofía"]),
    ]
}

#[test]
fn selecting_a_tag_from_page_two_lands_on_page_one() {
    let mut list = mounted(seven_posts(), "?page=2", MemorySlot::new(), 6);
    assert_eq!(list.page(), 2);
    assert_eq!(list.total_pages(), 2);

    assert!(list.toggle_tag("react"));

    assert_eq!(list.page(), 1);
    assert_eq!(list.total(), 2);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.location().query(), "tags=react");
}

#[test]
fn out_of_range_page_is_written_then_corrected_with_replace() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 6);
    let pushes = list.location().push_count();
    let replaces = list.location().replace_count();

    list.set_page(5);

    assert_eq!(list.page(), 2);
    assert_eq!(list.location().push_count(), pushes + 1);
    assert_eq!(list.location().replace_count(), replaces + 1);
    assert_eq!(list.location().entries().last().map(String::as_str), Some("page=2"));
    assert_eq!(stored(&list)["page"], json!(2));
}

#[test]
fn out_of_range_page_on_the_last_page_writes_nothing() {
    let mut list = mounted(seven_posts(), "?page=2", MemorySlot::new(), 6);
    assert_eq!(list.page(), 2);
    let entries = list.location().entries().to_vec();
    let pushes = list.location().push_count();
    let replaces = list.location().replace_count();
    let writes = list.store().slot().write_count();

    list.set_page(9);

    assert_eq!(list.page(), 2);
    assert_eq!(list.location().entries(), entries.as_slice());
    assert_eq!(list.location().push_count(), pushes);
    assert_eq!(list.location().replace_count(), replaces);
    assert_eq!(list.store().slot().write_count(), writes);
}

#[test]
fn oversized_url_page_beats_storage_and_clamps_to_the_last_page() {
    let items = (1..=20)
        .map(|n| post(&format!("p{n}"), &format!("Post {n}"), &[]))
        .collect();
    let slot = MemorySlot::with_entry(DEFAULT_STORAGE_KEY, r#"{"page":2}"#);

    let list = mounted(items, "?page=99999999999", slot, 2);

    assert_eq!(list.page(), 10);
    assert_eq!(list.total_pages(), 10);
    assert_eq!(list.location().query(), "page=10");
    assert_eq!(stored(&list)["page"], json!(10));
}

#[test]
fn stored_ghost_tag_is_dropped_and_not_resurrected() {
    let items = vec![
        post("a", "React hooks", &["React"]),
        post("b", "Hooks in depth", &["React"]),
        post("c", "Docker basics", &["DevOps"]),
    ];
    let slot = MemorySlot::with_entry(DEFAULT_STORAGE_KEY, r#"{"q":"hooks","tags":["ghost-tag"],"page":5}"#);

    let list = mounted(items, "", slot, 9);

    assert_eq!(list.state(), &ListState::new("hooks", Vec::<String>::new(), 1));
    assert_eq!(list.total(), 2);
    assert_eq!(stored(&list), json!({"q": "hooks", "tags": [], "page": 1}));
    assert_eq!(list.location().query(), "q=hooks");
    assert_eq!(list.phase(), Phase::Steady);
}

#[test]
fn url_fields_win_and_missing_ones_come_from_storage() {
    let items = vec![
        post("a", "Layout one", &["React", "CSS"]),
        post("b", "Layout two", &["React", "CSS"]),
        post("c", "Layout three", &["React", "CSS"]),
        post("d", "Layout four", &["React", "CSS"]),
        post("e", "Pipelines", &["DevOps"]),
    ];
    let slot = MemorySlot::with_entry(DEFAULT_STORAGE_KEY, r#"{"q":"css","tags":["devops"],"page":7}"#);

    let list = mounted(items, "?tags=react,css&page=2", slot, 2);

    assert_eq!(list.state(), &ListState::new("css", ["css", "react"], 2));
    assert_eq!(list.total(), 4);
    assert_eq!(list.location().query(), "q=css&tags=css%2Creact&page=2");
}

#[test]
fn explicitly_empty_url_query_overrides_storage() {
    let slot = MemorySlot::with_entry(DEFAULT_STORAGE_KEY, r#"{"q":"docker","tags":[],"page":1}"#);

    let list = mounted(seven_posts(), "?q=", slot, 9);

    assert_eq!(list.state().query, "");
    assert_eq!(list.total(), 7);
}

#[test]
fn changing_the_query_resets_the_page() {
    let items: Vec<ContentItem> = (1..=20).map(|n| post(&format!("p{n}"), &format!("Post {n}"), &[])).collect();
    let mut list = mounted(items, "?page=3", MemorySlot::new(), 5);
    assert_eq!(list.page(), 3);

    list.set_query("post");

    assert_eq!(list.page(), 1);
    assert_eq!(list.total(), 20);
    assert_eq!(list.location().query(), "q=post");
}

#[test]
fn tag_selection_is_an_intersection() {
    let items = vec![
        post("both", "Styled hooks", &["React", "CSS"]),
        post("react", "Hooks", &["React"]),
        post("css", "Grid", &["CSS"]),
    ];
    let mut list = mounted(items, "", MemorySlot::new(), 9);

    list.toggle_tag("react");
    assert_eq!(list.total(), 2);

    list.toggle_tag("css");
    let ids: Vec<&str> = list.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["both"]);

    list.toggle_tag("react");
    assert_eq!(list.total(), 2);
}

#[test]
fn page_always_stays_within_bounds() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 3);

    for requested in 0..10 {
        list.set_page(requested);
        assert!(list.page() >= 1);
        assert!(list.page() <= list.total_pages());
        assert!(list.items().len() <= 3);
    }
    assert_eq!(list.total_pages(), 3);
}

#[test]
fn toggling_an_unknown_tag_writes_nothing() {
    let mut list = mounted(seven_posts(), "?page=2", MemorySlot::new(), 6);
    let writes = list.store().slot().write_count();
    let entries = list.location().entries().to_vec();

    assert!(!list.toggle_tag("ghost-tag"));

    assert_eq!(list.store().slot().write_count(), writes);
    assert_eq!(list.location().entries(), entries.as_slice());
    assert_eq!(list.page(), 2);
}

#[test]
fn toggle_accepts_labels_and_normalizes_them() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 9);

    assert!(list.toggle_tag("Filosofía"));

    assert_eq!(list.active_tags().len(), 1);
    assert_eq!(list.active_tags()[0].id, "filosofia");
    assert_eq!(list.location().query(), "tags=filosofia");
}

#[test]
fn reset_is_a_single_update() {
    let mut list = mounted(seven_posts(), "?q=docker&tags=devops", MemorySlot::new(), 9);
    assert_eq!(list.total(), 1);
    let pushes = list.location().push_count();
    let writes = list.store().slot().write_count();

    list.reset();

    assert_eq!(list.state(), &ListState::default());
    assert_eq!(list.location().push_count(), pushes + 1);
    assert_eq!(list.store().slot().write_count(), writes + 1);
    assert_eq!(list.location().query(), "");
    assert_eq!(list.total(), 7);
}

#[test]
fn unchanged_state_is_not_written_again() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 9);
    let writes = list.store().slot().write_count();

    list.set_page(1);
    list.set_page(0);
    list.set_query("");

    assert_eq!(list.store().slot().write_count(), writes);
    assert_eq!(list.location().push_count(), 0);
}

#[test]
fn user_changes_push_history_entries() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 2);

    list.set_page(2);
    list.set_query("docker");

    assert_eq!(list.location().entries(), ["", "page=2", "q=docker"]);
    assert_eq!(stored(&list), json!({"q": "docker", "tags": [], "page": 1}));
}

#[test]
fn storage_failures_never_reach_the_caller() {
    let slot = MemorySlot::new().failing_reads().failing_writes();

    let mut list = mounted(seven_posts(), "?tags=css", slot, 9);
    assert_eq!(list.total(), 2);

    list.set_query("grid");
    assert_eq!(list.total(), 1);
    assert_eq!(list.location().query(), "q=grid&tags=css");
    assert_eq!(list.store().slot().write_count(), 0);
}

#[test]
fn address_bar_failures_never_reach_the_caller() {
    let location = MemoryLocation::new("?q=docker").failing_writes();
    let mut list = ListController::new(seven_posts(), location, MemorySlot::new(), &config(9));
    list.mount();
    assert_eq!(list.state().query, "docker");

    list.toggle_tag("devops");
    assert_eq!(list.total(), 1);
    assert_eq!(stored(&list)["tags"], json!(["devops"]));
}

#[test]
fn mutations_before_mount_are_ignored() {
    let mut list = ListController::new(seven_posts(), MemoryLocation::new(""), MemorySlot::new(), &config(9));
    assert_eq!(list.phase(), Phase::Uninitialized);

    list.set_query("docker");
    assert!(!list.toggle_tag("react"));

    assert_eq!(list.state(), &ListState::default());
    assert_eq!(list.store().slot().write_count(), 0);
    assert_eq!(list.location().replace_count(), 0);
}

#[test]
fn mount_writes_back_exactly_once() {
    let mut list = ListController::new(seven_posts(), MemoryLocation::new("?page=9"), MemorySlot::new(), &config(3));
    list.mount();
    list.mount();

    assert_eq!(list.page(), 3);
    assert_eq!(list.location().replace_count(), 1);
    assert_eq!(list.location().push_count(), 0);
    assert_eq!(list.store().slot().write_count(), 1);
    assert_eq!(list.location().query(), "page=3");
}

#[test]
fn empty_collection_still_has_one_page() {
    let list = mounted(Vec::new(), "?page=4&tags=react", MemorySlot::new(), 9);

    assert_eq!(list.total(), 0);
    assert_eq!(list.total_pages(), 1);
    assert_eq!(list.page(), 1);
    assert!(list.state().tags.is_empty());
    assert!(list.catalog().is_empty());
}

#[test]
fn replacing_the_collection_drops_vanished_tags() {
    let mut list = mounted(seven_posts(), "?tags=react", MemorySlot::new(), 9);
    let replaces = list.location().replace_count();

    list.replace_collection(vec![post("x", "Only docker now", &["DevOps"])]);

    assert!(list.state().tags.is_empty());
    assert_eq!(list.total(), 1);
    assert_eq!(list.location().replace_count(), replaces + 1);
    assert_eq!(list.location().query(), "");
    assert_eq!(stored(&list)["tags"], json!([]));
}

#[test]
fn replacing_the_collection_without_state_change_writes_nothing() {
    let mut list = mounted(seven_posts(), "?tags=css", MemorySlot::new(), 9);
    let writes = list.store().slot().write_count();

    let mut items = seven_posts();
    items.push(post("p8", "Container queries", &["CSS"]));
    list.replace_collection(items);

    assert_eq!(list.total(), 3);
    assert_eq!(list.store().slot().write_count(), writes);
    assert_eq!(list.catalog().get("css").map(|tag| tag.count), Some(3));
}

#[test]
fn next_and_previous_stop_at_the_edges() {
    let mut list = mounted(seven_posts(), "", MemorySlot::new(), 3);

    assert!(!list.previous_page());
    assert!(list.next_page());
    assert!(list.next_page());
    assert!(!list.next_page());
    assert_eq!(list.page(), 3);
    assert_eq!(list.items().len(), 1);

    assert!(list.previous_page());
    assert_eq!(list.page(), 2);
}

#[test]
fn typo_tolerant_query_ranks_title_matches_first() {
    let items = vec![
        post("body", "Deploy notes", &[]).with_body("We moved every service into docker last year."),
        post("title", "Docker basics", &["DevOps"]),
    ];
    let mut list = mounted(items, "", MemorySlot::new(), 9);

    list.set_query("dokcer");

    let ids: Vec<&str> = list.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["title", "body"]);
}
