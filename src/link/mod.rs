// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Link normalization: turning whatever the host sends into canonical links.
//!
//! Link data arrives in three shapes: a URL string, a stringified object
//! (`{href=/a, target=_blank}`), or a real object with any of `href`, `raw_url`,
//! `url`, `target`, `rel`, `openInNewTab`, `value`, `label`, `slug`. The shape is
//! classified once ([`classify_text`] / [`RawLinkValue`]'s `From` impls) and then
//! resolved by [`resolve_link_details`].

mod encoded;
mod item;
mod resolve;

pub use encoded::{looks_encoded, parse_encoded_link};
pub use item::normalize_item;
pub use resolve::{
    resolve_link_details, BLANK_TARGET, BLANK_TARGET_REL, DEFAULT_HREF, MAX_RESOLVE_DEPTH,
};

use crate::types::{LinkFields, RawLinkValue};

/// What `String(object)` produces in a browser; carries no link.
const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// Classify link text as plain or encoded.
///
/// The text is trimmed. It is treated as encoded only when it passes
/// [`looks_encoded`] *and* decodes to at least one pair; anything else stays a
/// plain string, even if it contains `=`.
pub fn classify_text(text: &str) -> RawLinkValue {
    let trimmed = match text.trim() {
        OBJECT_PLACEHOLDER => "",
        other => other,
    };

    if looks_encoded(trimmed) {
        if let Some(fields) = parse_encoded_link(trimmed) {
            return RawLinkValue::EncodedString(LinkFields::from_encoded(fields));
        }
    }

    RawLinkValue::PlainString(trimmed.to_string())
}
