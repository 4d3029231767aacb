//! Where a widget's items come from.
//!
//! The host normally hands over a data payload with a `pageList`. Older embeds
//! only have server-rendered markup, so when the list is missing the items are
//! rebuilt from the attributes of the existing list entries instead.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, WidgetError};
use crate::link::normalize_item;
use crate::types::{FilterOptions, LinkFields, RawItem, RawLinkValue, SearchItem};

/// Host data payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetPayload {
    /// `None` unless the payload carried a JSON array under `pageList`.
    #[serde(deserialize_with = "page_list")]
    pub page_list: Option<Vec<RawItem>>,
    pub options: FilterOptions,
}

impl WidgetPayload {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WidgetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Accept only arrays; entries that are not objects become empty items.
fn page_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<RawItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(entries)) = value else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|entry| match entry {
                Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
                _ => RawItem::default(),
            })
            .collect(),
    ))
}

/// Attributes of the `<a>` inside a pre-rendered list entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnchorAttrs {
    pub href: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
}

/// One pre-rendered `.search-widget__item` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkupItem {
    /// `data-title`
    pub data_title: Option<String>,
    /// `data-description`
    pub data_description: Option<String>,
    /// `data-link`
    pub data_link: Option<String>,
    /// Text content of the element, used when there is no `data-title`.
    pub text_content: String,
    pub anchor: Option<AnchorAttrs>,
}

impl MarkupItem {
    /// Rebuild the raw item this markup was rendered from.
    pub fn to_raw_item(&self) -> RawItem {
        let filled = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        let anchor_href = match &self.anchor {
            Some(anchor) => filled(&anchor.href),
            None => Some("#".to_string()),
        };
        let href = filled(&self.data_link)
            .or(anchor_href)
            .unwrap_or_else(|| "#".to_string());

        let anchor = self.anchor.clone().unwrap_or_default();

        RawItem {
            title_name: Some(filled(&self.data_title).unwrap_or_else(|| self.text_content.clone())),
            desc_text: Some(filled(&self.data_description).unwrap_or_default()),
            link_dest: RawLinkValue::StructuredLink(LinkFields {
                href: Some(href),
                target: anchor.target,
                rel: anchor.rel,
                ..LinkFields::default()
            }),
            ..RawItem::default()
        }
    }
}

/// The one data source of a widget instance.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSource {
    Payload(Vec<RawItem>),
    Markup(Vec<MarkupItem>),
}

impl WidgetSource {
    /// Prefer the payload's `pageList`; fall back to markup when it has none.
    pub fn select(payload: Option<&WidgetPayload>, markup: Vec<MarkupItem>) -> Self {
        match payload.and_then(|payload| payload.page_list.clone()) {
            Some(page_list) => WidgetSource::Payload(page_list),
            None => {
                debug!(entries = markup.len(), "no pageList in payload, reading markup");
                WidgetSource::Markup(markup)
            }
        }
    }

    /// Normalize every entry into a search item, keeping source order.
    pub fn into_items(self) -> Vec<SearchItem> {
        match self {
            WidgetSource::Payload(raw) => items_from_payload(&raw),
            WidgetSource::Markup(markup) => items_from_markup(&markup),
        }
    }
}

pub fn items_from_payload(page_list: &[RawItem]) -> Vec<SearchItem> {
    page_list.iter().map(normalize_item).collect()
}

pub fn items_from_markup(markup: &[MarkupItem]) -> Vec<SearchItem> {
    markup
        .iter()
        .map(|entry| normalize_item(&entry.to_raw_item()))
        .collect()
}
