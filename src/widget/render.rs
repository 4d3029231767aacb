//! List view model: what the host should show for a set of items.
//!
//! The host owns the DOM; this module only decides the entries and the
//! empty-state toggle. [`ListView::to_html`] renders the same structure as
//! static markup for the CLI and for server-side fallbacks.

use serde::Serialize;

use super::WidgetLayout;
use crate::types::SearchItem;

pub const ITEM_CLASS: &str = "search-widget__item";
pub const LINK_CLASS: &str = "search-widget__link";
pub const TITLE_CLASS: &str = "search-widget__item-title";
pub const DESCRIPTION_CLASS: &str = "search-widget__item-description";
/// Toggled on the empty-state element and on the dialog.
pub const VISIBLE_CLASS: &str = "is-visible";

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub title: String,
    pub description: String,
    pub href: String,
    /// Only set when the item has a target.
    pub target: Option<String>,
    /// Only set when the item has a rel.
    pub rel: Option<String>,
}

impl From<&SearchItem> for ListEntry {
    fn from(item: &SearchItem) -> Self {
        let present = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            title: item.title_name.clone(),
            description: item.desc_text.clone(),
            href: if item.link_dest.is_empty() {
                "#".to_string()
            } else {
                item.link_dest.clone()
            },
            target: present(&item.link_target),
            rel: present(&item.link_rel),
        }
    }
}

/// State of the "no results" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub visible: bool,
}

impl EmptyState {
    /// Value for the element's `aria-hidden` attribute.
    pub fn aria_hidden(self) -> &'static str {
        if self.visible {
            "false"
        } else {
            "true"
        }
    }
}

/// Full replacement content for the list container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub entries: Vec<ListEntry>,
    /// `None` when the layout has no empty-state element.
    pub empty_state: Option<EmptyState>,
}

impl ListView {
    /// Static markup for the list body (`<li>` elements only).
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            html.push_str(&format!(
                "<li class=\"{}\"><a class=\"{}\" href=\"{}\"",
                ITEM_CLASS,
                LINK_CLASS,
                escape_html(&entry.href)
            ));
            if let Some(target) = &entry.target {
                html.push_str(&format!(" target=\"{}\"", escape_html(target)));
            }
            if let Some(rel) = &entry.rel {
                html.push_str(&format!(" rel=\"{}\"", escape_html(rel)));
            }
            html.push_str(&format!(
                "><span class=\"{}\">{}</span><span class=\"{}\">{}</span></a></li>\n",
                TITLE_CLASS,
                escape_html(&entry.title),
                DESCRIPTION_CLASS,
                escape_html(&entry.description)
            ));
        }
        html
    }
}

/// Render `items` for a layout. Returns `None` when there is no list container.
pub fn render_list(items: &[&SearchItem], layout: &WidgetLayout) -> Option<ListView> {
    if !layout.list {
        return None;
    }

    let entries: Vec<ListEntry> = items.iter().map(|item| ListEntry::from(*item)).collect();
    let empty_state = layout.empty_state.then_some(EmptyState {
        visible: entries.is_empty(),
    });

    Some(ListView {
        entries,
        empty_state,
    })
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
