use chrono::{TimeZone, Utc};
use postlist::{parse_collection, ContentOrder, PostlistError};

#[test]
fn aliases_are_resolved() {
    let json = r#"[{
        "id": 7,
        "titulo": "Hola mundo",
        "resumen": "Breve",
        "contenido": "Largo",
        "etiquetas": ["Filosofía", {"name": "Ensayo"}, "filosofia"],
        "fecha": "2024-03-01",
        "autor": "  Ana  ",
        "imagen": "/img/hola.png"
    }]"#;

    let items = parse_collection(json, ContentOrder::AsProvided).expect("valid collection");
    let item = &items[0];

    assert_eq!(item.id, "7");
    assert_eq!(item.title, "Hola mundo");
    assert_eq!(item.excerpt, "Breve");
    assert_eq!(item.body, "Largo");
    assert_eq!(item.tag_ids().collect::<Vec<_>>(), ["filosofia", "ensayo"]);
    assert_eq!(item.tags[0].label, "Filosofía");
    assert_eq!(item.published_at, Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()));
    assert_eq!(item.author.as_deref(), Some("Ana"));
    assert_eq!(item.image.as_deref(), Some("/img/hola.png"));
}

#[test]
fn first_non_null_alias_wins() {
    let json = r#"[{"title": null, "name": "Fallback", "created_at": "2024-05-01T10:30:00+02:00"}]"#;

    let items = parse_collection(json, ContentOrder::AsProvided).expect("valid collection");

    assert_eq!(items[0].title, "Fallback");
    assert_eq!(items[0].published_at, Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()));
}

#[test]
fn missing_fields_get_defaults() {
    let json = r#"[{"tags": "not-a-list", "date": "yesterday"}]"#;

    let items = parse_collection(json, ContentOrder::AsProvided).expect("valid collection");

    assert_eq!(items[0].id, "post-1");
    assert_eq!(items[0].title, "Untitled post");
    assert!(items[0].tags.is_empty());
    assert_eq!(items[0].published_at, None);
    assert_eq!(items[0].author, None);
}

#[test]
fn identifiers_are_derived_and_made_unique() {
    let json = r#"[
        {"slug": "second", "title": "First"},
        {"title": "Second"},
        {"title": "Second"},
        {"title": "   "}
    ]"#;

    let items = parse_collection(json, ContentOrder::AsProvided).expect("valid collection");
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();

    assert_eq!(ids, ["second", "second-2", "second-3", "post-4"]);
    assert_eq!(items[3].title, "Untitled post");
}

#[test]
fn non_object_entries_are_skipped() {
    let json = r#"[1, "two", null, {"title": "Kept"}, []]"#;

    let items = parse_collection(json, ContentOrder::AsProvided).expect("valid collection");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Kept");
}

#[test]
fn newest_first_puts_undated_items_last() {
    let json = r#"[
        {"id": "old", "date": "2023-01-01"},
        {"id": "undated-a"},
        {"id": "new", "date": "2024-06-01"},
        {"id": "undated-b"},
        {"id": "mid", "date": "2023-09-15T12:00:00Z"}
    ]"#;

    let items = parse_collection(json, ContentOrder::NewestFirst).expect("valid collection");
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();

    assert_eq!(ids, ["new", "mid", "old", "undated-a", "undated-b"]);
}

#[test]
fn non_array_document_is_rejected() {
    let result = parse_collection(r#"{"posts": []}"#, ContentOrder::AsProvided);
    assert!(matches!(result, Err(PostlistError::Content(_))));
}

#[test]
fn invalid_json_is_rejected() {
    let result = parse_collection("[{", ContentOrder::AsProvided);
    assert!(matches!(result, Err(PostlistError::Json(_))));
}

#[test]
fn order_names_are_parsed() {
    assert_eq!(ContentOrder::from_name("Newest-First"), Some(ContentOrder::NewestFirst));
    assert_eq!(ContentOrder::from_name(" as-provided "), Some(ContentOrder::AsProvided));
    assert_eq!(ContentOrder::from_name("random"), None);
}
