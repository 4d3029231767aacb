//! Plain strings, structured objects and nulls.

use search_widget::{resolve_link_details, CanonicalLink, RawLinkValue};
use serde_json::json;

fn resolve(value: serde_json::Value) -> CanonicalLink {
    resolve_link_details(&RawLinkValue::from(value))
}

#[test]
fn test_plain_url_passes_through() {
    let link = resolve(json!("https://example.com/a?b=c"));
    assert_eq!(link.href, "https://example.com/a?b=c");
    assert_eq!(link.target, "");
    assert_eq!(link.rel, "");
    assert_eq!(link.search_value, "https://example.com/a?b=c");
}

#[test]
fn test_plain_string_is_trimmed() {
    let link = resolve(json!("  /about  "));
    assert_eq!(link.href, "/about");
}

#[test]
fn test_null_like_values_become_placeholder() {
    for value in [json!(null), json!(""), json!("   "), json!("null"), json!(42), json!([1])] {
        let link = resolve(value.clone());
        assert_eq!(link.href, "#", "input {value}");
        assert_eq!(link.search_value, "#", "input {value}");
    }
}

#[test]
fn test_object_object_text_is_empty() {
    let link = resolve(json!("[object Object]"));
    assert_eq!(link.href, "#");
}

#[test]
fn test_href_fallback_chain() {
    assert_eq!(resolve(json!({"href": "/a", "raw_url": "/b", "url": "/c"})).href, "/a");
    assert_eq!(resolve(json!({"raw_url": "/b", "url": "/c"})).href, "/b");
    assert_eq!(resolve(json!({"url": "/c"})).href, "/c");
    assert_eq!(resolve(json!({"href": "null", "url": "/c"})).href, "/c");
    assert_eq!(resolve(json!({})).href, "#");
}

#[test]
fn test_new_tab_flags() {
    let camel = resolve(json!({"href": "/a", "openInNewTab": true}));
    assert_eq!(camel.target, "_blank");
    assert_eq!(camel.rel, "noopener noreferrer");

    let snake = resolve(json!({"href": "/a", "open_in_new_tab": true}));
    assert_eq!(snake.target, "_blank");

    // Only a real boolean counts.
    let text_flag = resolve(json!({"href": "/a", "openInNewTab": "true"}));
    assert_eq!(text_flag.target, "");
}

#[test]
fn test_explicit_target_wins_over_flag() {
    let link = resolve(json!({"href": "/a", "target": "_self", "openInNewTab": true}));
    assert_eq!(link.target, "_self");
    assert_eq!(link.rel, "");
}

#[test]
fn test_explicit_rel_is_kept_for_blank() {
    let link = resolve(json!({"href": "/a", "target": "_blank", "rel": "external"}));
    assert_eq!(link.rel, "external");
}

#[test]
fn test_only_bare_null_target_is_dropped() {
    let padded = resolve(json!({"href": "/a", "target": " null "}));
    assert_eq!(padded.target, "null");

    let bare = resolve(json!({"href": "/a", "target": "null", "openInNewTab": true}));
    assert_eq!(bare.target, "_blank");
    assert_eq!(bare.rel, "noopener noreferrer");

    // Inherited into a decoded href, the outer target is checked after trimming.
    let inherited = resolve(json!({"href": "{href=/inner}", "target": " null "}));
    assert_eq!(inherited.target, "");
}

#[test]
fn test_search_value_part_order() {
    let link = resolve(json!({
        "href": "/docs",
        "url": "https://example.com/docs",
        "value": "Docs home",
        "label": "Documentation",
        "slug": "docs"
    }));
    assert_eq!(
        link.search_value,
        "Docs home Documentation /docs https://example.com/docs docs"
    );
}

#[test]
fn test_search_value_always_contains_href() {
    let link = resolve(json!({"raw_url": "/b", "label": "Bee"}));
    assert_eq!(link.href, "/b");
    assert!(link.search_value.split(' ').any(|part| part == "/b"));
}

#[test]
fn test_canonical_link_serializes_camel_case() {
    let link = resolve(json!("/a"));
    let value = serde_json::to_value(&link).unwrap();
    assert_eq!(
        value,
        json!({"href": "/a", "target": "", "rel": "", "searchValue": "/a"})
    );
}
