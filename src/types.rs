// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the widget.
//!
//! Raw host data comes in loosely shaped (a link can be a URL, a stringified
//! object or a real object), and leaves as flat, render-ready [`SearchItem`]s.
//!
//! | Type            | Role                                             |
//! |-----------------|--------------------------------------------------|
//! | `RawLinkValue`  | Classified link input, decided once at parse time|
//! | `LinkFields`    | The object shape shared by structured and encoded links |
//! | `CanonicalLink` | Normalized `{href, target, rel, searchValue}`     |
//! | `RawItem`       | One entry of the host `pageList`                  |
//! | `SearchItem`    | Immutable, flattened item used for filtering      |
//! | `RankedEntry`   | Transient sort record of one filter pass          |
//!
//! # Invariants
//!
//! - **CanonicalLink**: `href` is never empty (`"#"` at worst); a `_blank` target
//!   always carries a rel; `search_value` contains `href` as one of its parts.
//! - **SearchItem**: never mutated after construction. Filtering hands out
//!   references, it does not rebuild items.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::link::classify_text;

// =============================================================================
// RAW LINK INPUT
// =============================================================================

/// The object shape of a link, whether it arrived as JSON or as an encoded blob.
///
/// String fields are kept untrimmed; the resolver decides what counts as a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFields {
    pub href: Option<String>,
    pub raw_url: Option<String>,
    pub url: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub value: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    /// `openInNewTab === true` or `open_in_new_tab === true` on the source object.
    pub open_in_new_tab: bool,
}

impl LinkFields {
    /// Read the link keys out of a JSON object. Non-string values are ignored.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        let flag = |key: &str| matches!(object.get(key), Some(Value::Bool(true)));

        Self {
            href: text("href"),
            raw_url: text("raw_url"),
            url: text("url"),
            target: text("target"),
            rel: text("rel"),
            value: text("value"),
            label: text("label"),
            slug: text("slug"),
            open_in_new_tab: flag("openInNewTab") || flag("open_in_new_tab"),
        }
    }

    /// Build from a decoded `key=value` mapping.
    ///
    /// Every decoded value is text, so the new-tab flag can never be set here;
    /// an encoded `openInNewTab=true` is the string `"true"`, not a boolean.
    pub fn from_encoded(mut fields: HashMap<String, String>) -> Self {
        Self {
            href: fields.remove("href"),
            raw_url: fields.remove("raw_url"),
            url: fields.remove("url"),
            target: fields.remove("target"),
            rel: fields.remove("rel"),
            value: fields.remove("value"),
            label: fields.remove("label"),
            slug: fields.remove("slug"),
            open_in_new_tab: false,
        }
    }
}

/// A link destination as the host handed it to us.
///
/// The shape is decided once, when the value is read, instead of being
/// re-inspected at every step of resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum RawLinkValue {
    /// `null`, missing, or a value that is neither text nor an object.
    #[default]
    Absent,
    /// Text that is not an encoded object. Stored trimmed; may be empty.
    PlainString(String),
    /// Text such as `{href=/a, target=_blank}`, already decoded.
    EncodedString(LinkFields),
    /// A real object with link keys.
    StructuredLink(LinkFields),
}

impl From<Value> for RawLinkValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => RawLinkValue::StructuredLink(LinkFields::from_json(&object)),
            Value::String(text) => classify_text(&text),
            _ => RawLinkValue::Absent,
        }
    }
}

impl From<&str> for RawLinkValue {
    fn from(text: &str) -> Self {
        classify_text(text)
    }
}

impl From<LinkFields> for RawLinkValue {
    fn from(fields: LinkFields) -> Self {
        RawLinkValue::StructuredLink(fields)
    }
}

// =============================================================================
// CANONICAL OUTPUT
// =============================================================================

/// Normalized link details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalLink {
    pub href: String,
    pub target: String,
    pub rel: String,
    pub search_value: String,
}

impl CanonicalLink {
    /// Feed this link back in as a structured raw value.
    ///
    /// Only `href`, `target` and `rel` are carried; the search value is
    /// derived, not an input.
    pub fn to_raw(&self) -> RawLinkValue {
        let keep = |value: &str| (!value.is_empty()).then(|| value.to_string());
        RawLinkValue::StructuredLink(LinkFields {
            href: Some(self.href.clone()),
            target: keep(&self.target),
            rel: keep(&self.rel),
            ..LinkFields::default()
        })
    }
}

/// Flattened, render-ready record. Field names follow the host payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub title_name: String,
    pub desc_text: String,
    pub link_dest: String,
    pub link_target: String,
    pub link_rel: String,
    pub link_search_value: String,
}

impl SearchItem {
    /// The link half of this item as a canonical record.
    pub fn link(&self) -> CanonicalLink {
        CanonicalLink {
            href: self.link_dest.clone(),
            target: self.link_target.clone(),
            rel: self.link_rel.clone(),
            search_value: self.link_search_value.clone(),
        }
    }
}

// =============================================================================
// HOST INPUT
// =============================================================================

/// One `pageList` entry before normalization.
///
/// Every field is optional and non-string values are dropped instead of failing
/// the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub desc_text: Option<String>,
    #[serde(default)]
    pub link_dest: RawLinkValue,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link_target: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link_rel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link_search_value: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

// =============================================================================
// RANKING
// =============================================================================

/// Filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    /// Match against `descText` as well as title and link (default: true)
    pub include_description: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            include_description: true,
        }
    }
}

/// One item's position in a filter pass. Lower rank sorts first.
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub item: &'a SearchItem,
    pub rank: f64,
    pub original_index: usize,
}
