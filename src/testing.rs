//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{RawItem, RawLinkValue, SearchItem};
use crate::widget::{AnchorAttrs, MarkupItem};

/// Create an already-normalized item whose search value is its href.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(title: &str, description: &str, href: &str) -> SearchItem {
    SearchItem {
        title_name: title.to_string(),
        desc_text: description.to_string(),
        link_dest: href.to_string(),
        link_target: String::new(),
        link_rel: String::new(),
        link_search_value: href.to_string(),
    }
}

/// Create an item with only a title.
pub fn make_titled(title: &str) -> SearchItem {
    make_item(title, "", "#")
}

/// Create a raw payload item with a plain-string link.
pub fn make_raw_item(title: &str, link: &str) -> RawItem {
    RawItem {
        title_name: Some(title.to_string()),
        link_dest: RawLinkValue::from(link),
        ..RawItem::default()
    }
}

/// Create a markup record with an anchor.
pub fn make_markup_item(text: &str, href: &str) -> MarkupItem {
    MarkupItem {
        text_content: text.to_string(),
        anchor: Some(AnchorAttrs {
            href: Some(href.to_string()),
            ..AnchorAttrs::default()
        }),
        ..MarkupItem::default()
    }
}
