// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for link resolution.
//!
//! Feeds arbitrary text to the resolver both as a bare string and, when it
//! parses, as JSON. Stringified objects nested inside hrefs are exactly the
//! kind of input that used to recurse without bound, so the depth cap gets
//! exercised here too.

#![no_main]

use libfuzzer_sys::fuzz_target;
use search_widget::{parse_encoded_link, resolve_link_details, RawLinkValue};

fuzz_target!(|data: &[u8]| {
    let text: String = String::from_utf8_lossy(data).chars().take(512).collect();
    let text = text.as_str();

    let mut candidates = vec![RawLinkValue::from(text)];
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        candidates.push(RawLinkValue::from(value));
    }

    for raw in &candidates {
        let link = resolve_link_details(raw);

        // INVARIANT 1: href is never empty
        assert!(!link.href.is_empty());

        // INVARIANT 2: the search value always contains the href
        assert!(link.search_value.contains(&link.href));

        // INVARIANT 3: a _blank target always carries a rel
        if link.target == "_blank" {
            assert!(!link.rel.is_empty());
        }
    }

    // INVARIANT 4: decoded blobs never contain empty keys
    if let Some(fields) = parse_encoded_link(text) {
        assert!(fields.keys().all(|key| !key.is_empty()));
    }
});
