// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filtering: the query-time half of the widget.
//!
//! Every keystroke re-runs [`filter_items`] from scratch over the immutable item
//! list. There is no index to maintain; the lists are page-sized, and a linear
//! scan with substring search keeps the results trivially consistent with what
//! the user typed.
//!
//! # Algorithm
//!
//! ```text
//! query ─trim+lowercase─▶ q
//!   q empty      → every item, original order
//!   otherwise    → for each item:
//!                    title / description* / link field ─trim+lowercase─▶ find(q)
//!                    no field matched → dropped
//!                    else rank = band(best field) + offset / 1000
//!                  sort by (rank, original index)
//!
//! * only when FilterOptions::include_description is set
//! ```

use tracing::debug;

use crate::scoring::ranking::compare_entries;
use crate::scoring::FieldMatches;
use crate::types::{FilterOptions, RankedEntry, SearchItem};
use crate::utils::{normalize_value, utf16_offset_of};

/// Filter and rank `items` against a free-text query.
///
/// Returns references into `items`, best match first. Items matching nothing are
/// left out; an empty (or whitespace-only) query returns all items in order.
pub fn filter_items<'a>(
    items: &'a [SearchItem],
    query: &str,
    options: &FilterOptions,
) -> Vec<&'a SearchItem> {
    let query = normalize_value(query);
    if query.is_empty() {
        return items.iter().collect();
    }

    let mut ranked: Vec<RankedEntry<'a>> = items
        .iter()
        .enumerate()
        .filter_map(|(original_index, item)| {
            let rank = match_fields(item, &query, options).rank()?;
            Some(RankedEntry {
                item,
                rank,
                original_index,
            })
        })
        .collect();

    ranked.sort_by(compare_entries);

    debug!(
        query = %query,
        total = items.len(),
        matched = ranked.len(),
        "filtered items"
    );

    ranked.into_iter().map(|entry| entry.item).collect()
}

/// Locate the (already normalized) query in each field of one item.
pub fn match_fields(item: &SearchItem, query: &str, options: &FilterOptions) -> FieldMatches {
    let title = normalize_value(&item.title_name);

    let description = if options.include_description {
        utf16_offset_of(&normalize_value(&item.desc_text), query)
    } else {
        None
    };

    // The precomputed search value covers labels and slugs; the bare href is
    // only consulted when there is none.
    let search_value = normalize_value(&item.link_search_value);
    let link_field = if search_value.is_empty() {
        normalize_value(&item.link_dest)
    } else {
        search_value
    };

    FieldMatches {
        title: utf16_offset_of(&title, query),
        description,
        link: utf16_offset_of(&link_field, query),
    }
}
