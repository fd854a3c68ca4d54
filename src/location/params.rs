//! Query-string codec for the list state.
//!
//! Maps [`ListState`] to and from the address bar's query string:
//!
//! | Parameter | Value                               | Omitted when |
//! |-----------|-------------------------------------|--------------|
//! | `q`       | free-text query, verbatim           | empty        |
//! | `tags`    | tag ids, sorted, joined with commas | no tags      |
//! | `page`    | base-10 page number                 | page is `1`  |
//!
//! Decoding is lenient: every field is recovered on its own and anything that
//! does not parse is reported as absent so the reconciler can fall back to
//! storage or defaults.

use crate::domain::text::tag_id;
use crate::domain::{ListState, PartialListState};
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const QUERY_PARAM: &str = "q";
pub const TAGS_PARAM: &str = "tags";
pub const PAGE_PARAM: &str = "page";

/// Decodes a raw query string into the fields it explicitly carries.
///
/// The leading `?` is optional. When a parameter repeats, its first
/// occurrence wins.
///
/// `page` must be ASCII digits only, so `page=2abc` is absent rather than
/// `2`. A page too large for `u32` saturates to `u32::MAX` and is clamped
/// later against the filtered result.
///
/// # Example
///
/// ```
/// use postlist::location::params::decode;
///
/// let partial = decode("?tags=React,%20CSS,,react&page=2");
/// let tags: Vec<_> = partial.tags.unwrap().into_iter().collect();
///
/// assert_eq!(tags, ["css", "react"]);
/// assert_eq!(partial.page, Some(2));
/// assert_eq!(partial.query, None);
/// ```
#[must_use]
pub fn decode(raw: &str) -> PartialListState {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut partial = PartialListState::default();
    let mut page_seen = false;

    for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
        match &*name {
            QUERY_PARAM if partial.query.is_none() => {
                partial.query = Some(value.into_owned());
            }
            TAGS_PARAM if partial.tags.is_none() => {
                partial.tags = Some(decode_tags(&value));
            }
            // An invalid first `page` still claims the parameter.
            PAGE_PARAM if !page_seen => {
                page_seen = true;
                partial.page = decode_page(&value);
            }
            _ => {}
        }
    }

    tracing::trace!(
        has_query = partial.query.is_some(),
        has_tags = partial.tags.is_some(),
        page = ?partial.page,
        "decoded query string"
    );
    partial
}

/// Encodes `state` as a query string without the leading `?`.
///
/// Returns an empty string for the default state.
///
/// # Example
///
/// ```
/// use postlist::location::params::encode;
/// use postlist::ListState;
///
/// let state = ListState::new("react hooks", ["react", "css"], 2);
/// assert_eq!(encode(&state), "q=react+hooks&tags=css%2Creact&page=2");
/// assert_eq!(encode(&ListState::default()), "");
/// ```
#[must_use]
pub fn encode(state: &ListState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.query.is_empty() {
        serializer.append_pair(QUERY_PARAM, &state.query);
    }
    if !state.tags.is_empty() {
        let joined = state.tags.iter().map(String::as_str).collect::<Vec<_>>().join(",");
        serializer.append_pair(TAGS_PARAM, &joined);
    }
    if state.page > 1 {
        serializer.append_pair(PAGE_PARAM, &state.page.to_string());
    }

    serializer.finish()
}

/// Splits a `tags` value on commas into normalized, deduplicated tag ids.
#[must_use]
pub fn decode_tags(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(tag_id)
        .filter(|id| !id.is_empty())
        .collect()
}

/// Parses a strict base-10 page number. Zero, negatives, signs, fractions and
/// surrounding garbage are rejected. Overflow saturates.
fn decode_page(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = value.trim_start_matches('0');
    if digits.is_empty() {
        return None;
    }
    // All digits, so the only parse failure left is overflow.
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}
