// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parser for link objects that were flattened into `key=value` text.
//!
//! Some CMS exports stringify a link object instead of serializing it, which
//! leaves us with text like `{href=/pricing, target=_blank}`. This module turns
//! that back into a key/value mapping.
//!
//! The heuristic that decides whether a string *is* such a blob is separate from
//! the parser: plenty of ordinary URLs contain `=` (query strings), so a string
//! only counts as encoded when one of the link keys appears as a whole word
//! directly followed by `=`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// `href=`, `raw_url=` or `url=` at an ASCII word boundary.
///
/// `(?-u:\b)` keeps the boundary ASCII-only, matching how browsers evaluate `\b`.
static ENCODED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(href|raw_url|url)=").expect("static pattern compiles")
});

/// Does this text look like a flattened link object?
///
/// ```ignore
/// assert!(looks_encoded("{href=/a, target=_blank}"));
/// assert!(!looks_encoded("/search?q=href"));
/// assert!(!looks_encoded("/a?xhref=1"));
/// ```
pub fn looks_encoded(text: &str) -> bool {
    text.contains('=') && ENCODED_KEY.is_match(text)
}

/// Parse `{key=value, key=value}` text into a mapping.
///
/// - surrounding whitespace is ignored, one `{`…`}` layer is stripped
/// - pairs are split on commas, then on the *first* `=`
/// - pairs without `=` or with an empty key are dropped
/// - duplicate keys: last write wins
///
/// Returns `None` when nothing usable remains.
pub fn parse_encoded_link(text: &str) -> Option<HashMap<String, String>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let body = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);

    if body.is_empty() {
        return None;
    }

    let mut fields = HashMap::new();
    for pair in body.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.trim().to_string());
    }

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}
