//! Inputs at the edges: empty queries, empty fields, huge offsets.

use super::common::{make_item, make_titled, titles, SITE_ITEMS};
use search_widget::{filter_items, FilterOptions};

#[test]
fn test_empty_query_returns_all_in_order() {
    let results = filter_items(&SITE_ITEMS, "", &FilterOptions::default());
    assert_eq!(results.len(), SITE_ITEMS.len());
    for (result, item) in results.iter().zip(SITE_ITEMS.iter()) {
        assert!(std::ptr::eq(*result, item));
    }
}

#[test]
fn test_whitespace_query_is_empty() {
    let results = filter_items(&SITE_ITEMS, " \t\n ", &FilterOptions::default());
    assert_eq!(results.len(), SITE_ITEMS.len());
}

#[test]
fn test_empty_item_list() {
    let results = filter_items(&[], "anything", &FilterOptions::default());
    assert!(results.is_empty());
}

#[test]
fn test_placeholder_link_matches_hash() {
    // Items without a link resolve to "#", which is searchable like any href.
    let items = vec![make_titled("Nowhere"), make_item("Somewhere", "", "/here")];
    let results = filter_items(&items, "#", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["Nowhere"]);
}

#[test]
fn test_long_offset_spills_into_next_band() {
    // A title match past 1000 characters ranks behind a description match at 0.
    let long_title = format!("{}needle", "x".repeat(1200));
    let items = vec![
        make_item(&long_title, "", "/long"),
        make_item("Short", "needle", "/short"),
    ];
    let results = filter_items(&items, "needle", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["Short", long_title.as_str()]);
}

#[test]
fn test_query_with_regex_metacharacters() {
    let items = vec![make_item("C++ (advanced)", "", "/cpp")];
    let results = filter_items(&items, "c++ (", &FilterOptions::default());
    assert_eq!(results.len(), 1);
}
