use postlist::{Config, ContentOrder, PostlistError, DEFAULT_PAGE_SIZE};
use std::collections::BTreeMap;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert!((config.fuzziness - 0.35).abs() < f64::EPSILON);
    assert_eq!(config.storage_key, "postlist:list-state");
    assert_eq!(config.content_order, ContentOrder::AsProvided);
    assert_eq!(config.trace_level, None);
}

#[test]
fn map_values_are_parsed() {
    let config = Config::from_map(&map(&[
        ("page_size", " 12 "),
        ("fuzziness", "0.2"),
        ("storage_key", "blog:list"),
        ("content_order", "newest-first"),
        ("trace_level", "debug"),
    ]));

    assert_eq!(config.page_size, 12);
    assert!((config.fuzziness - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.storage_key, "blog:list");
    assert_eq!(config.content_order, ContentOrder::NewestFirst);
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn invalid_map_values_fall_back() {
    let config = Config::from_map(&map(&[
        ("page_size", "0"),
        ("fuzziness", "NaN"),
        ("storage_key", "   "),
        ("content_order", "shuffled"),
        ("unknown", "ignored"),
    ]));

    assert_eq!(config, Config::default());
}

#[test]
fn map_fuzziness_is_clamped() {
    assert!((Config::from_map(&map(&[("fuzziness", "-2")])).fuzziness).abs() < f64::EPSILON);
    assert!((Config::from_map(&map(&[("fuzziness", "7")])).fuzziness - 1.0).abs() < f64::EPSILON);
}

#[test]
fn toml_with_missing_keys_uses_defaults() {
    let config = Config::from_toml_str("page_size = 6\n").expect("valid");
    assert_eq!(config.page_size, 6);
    assert_eq!(config.storage_key, "postlist:list-state");

    assert_eq!(Config::from_toml_str("").expect("valid"), Config::default());
}

#[test]
fn toml_rejects_invalid_values() {
    for text in [
        "page_size = 0",
        "fuzziness = 1.5",
        "fuzziness = -0.1",
        "storage_key = \"  \"",
        "content_order = \"shuffled\"",
        "colour = \"blue\"",
        "page_size = ",
    ] {
        assert!(
            matches!(Config::from_toml_str(text), Err(PostlistError::Config(_))),
            "{text}"
        );
    }
}

#[test]
fn load_reads_a_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("postlist.toml");
    std::fs::write(&path, "page_size = 4\ncontent_order = \"newest-first\"\n").expect("write");

    let config = Config::load(&path).expect("load");
    assert_eq!(config.page_size, 4);
    assert_eq!(config.content_order, ContentOrder::NewestFirst);
}

#[test]
fn load_reports_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(PostlistError::Io(_))));
}
