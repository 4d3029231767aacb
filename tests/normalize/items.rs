//! Whole `pageList` entries.

use super::common::site_item;
use search_widget::{normalize_item, RawItem};

fn item(json: &str) -> search_widget::SearchItem {
    let raw: RawItem = serde_json::from_str(json).unwrap();
    normalize_item(&raw)
}

#[test]
fn test_fixture_links() {
    assert_eq!(site_item("Pricing").link_dest, "/pricing");
    assert_eq!(site_item("Documentation").link_search_value, "Developer docs /docs");

    let status = site_item("Status");
    assert_eq!(status.link_dest, "https://status.example.com");
    assert_eq!(status.link_target, "_blank");
    assert_eq!(status.link_rel, "noopener noreferrer");

    let careers = site_item("Careers");
    assert_eq!(careers.link_dest, "/jobs");
    assert_eq!(careers.link_target, "_blank");

    assert_eq!(site_item("Blog").link_dest, "#");

    let press = site_item("Press kit");
    assert_eq!(press.link_dest, "/press");
    assert_eq!(press.link_target, "_self");
    assert_eq!(press.link_rel, "external");
}

#[test]
fn test_non_object_entry_becomes_empty_item() {
    let junk = &super::common::SITE_ITEMS[6];
    assert_eq!(junk.title_name, "");
    assert_eq!(junk.link_dest, "#");
}

#[test]
fn test_missing_fields_default_to_empty() {
    let normalized = item("{}");
    assert_eq!(normalized.title_name, "");
    assert_eq!(normalized.desc_text, "");
    assert_eq!(normalized.link_dest, "#");
    assert_eq!(normalized.link_search_value, "#");
}

#[test]
fn test_non_string_fields_are_ignored() {
    let normalized = item(r#"{"titleName": 5, "descText": ["x"], "linkDest": "/a"}"#);
    assert_eq!(normalized.title_name, "");
    assert_eq!(normalized.desc_text, "");
    assert_eq!(normalized.link_dest, "/a");
}

#[test]
fn test_item_target_and_rel_fill_gaps() {
    let normalized = item(r#"{"linkDest": "/a", "linkTarget": "_blank", "linkRel": "me"}"#);
    assert_eq!(normalized.link_target, "_blank");
    assert_eq!(normalized.link_rel, "me");
}

#[test]
fn test_link_target_beats_item_target() {
    let normalized = item(r#"{"linkDest": {"href": "/a", "target": "_self"}, "linkTarget": "_blank"}"#);
    assert_eq!(normalized.link_target, "_self");
}

#[test]
fn test_search_item_serializes_with_host_names() {
    let normalized = item(r#"{"titleName": "A", "linkDest": "/a"}"#);
    let value = serde_json::to_value(&normalized).unwrap();
    assert_eq!(value["titleName"], "A");
    assert_eq!(value["linkDest"], "/a");
    assert_eq!(value["linkSearchValue"], "/a");
}
