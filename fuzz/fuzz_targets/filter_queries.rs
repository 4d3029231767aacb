// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query filtering.
//!
//! Arbitrary titles, descriptions and queries. The filter must never panic,
//! never invent items, and always return results in rank order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use search_widget::{filter_items, match_fields, normalize_value, FilterOptions, SearchItem};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    include_description: bool,
    items: Vec<(String, String, String)>,
}

fuzz_target!(|input: Input| {
    let items: Vec<SearchItem> = input
        .items
        .into_iter()
        .take(64)
        .map(|(title, description, href)| SearchItem {
            title_name: title,
            desc_text: description,
            link_search_value: href.clone(),
            link_dest: href,
            ..SearchItem::default()
        })
        .collect();
    let options = FilterOptions {
        include_description: input.include_description,
    };

    let results = filter_items(&items, &input.query, &options);

    // INVARIANT 1: never more results than items
    assert!(results.len() <= items.len());

    let query = normalize_value(&input.query);
    if query.is_empty() {
        // INVARIANT 2: empty query is the identity
        assert_eq!(results.len(), items.len());
        return;
    }

    // INVARIANT 3: ranks are non-decreasing
    let ranks: Vec<f64> = results
        .iter()
        .map(|item| match_fields(item, &query, &options).rank().expect("result matched"))
        .collect();
    assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
});
