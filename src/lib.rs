//! Link normalization and relevance filtering for embedded site-search widgets.
//!
//! A site-search widget gets a list of pages from its host: a title, a
//! description and a link destination each. The link part is messy. CMS exports
//! send plain URLs, objects with `href`/`raw_url`/`url`, or objects that were
//! stringified into `{href=/a, target=_blank}` on the way. This crate turns all
//! of that into canonical links, then filters and ranks the items as the user
//! types.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   types.rs   │────▶│    link/     │────▶│   search/    │
//! │ (RawLinkValue│     │ (resolve,    │     │ (filter_items│
//! │  SearchItem) │     │  normalize)  │     │  + scoring/) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      widget/                        │
//! │  (item sourcing, list view, dialog state machine)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use search_widget::{filter_items, items_from_payload, FilterOptions, WidgetPayload};
//!
//! let payload = WidgetPayload::from_json_str(json)?;
//! let items = items_from_payload(payload.page_list.as_deref().unwrap_or_default());
//!
//! let results = filter_items(&items, "pricing", &FilterOptions::default());
//! ```

// Module declarations
pub mod error;
pub mod link;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{Result, WidgetError};
pub use link::{
    classify_text, looks_encoded, normalize_item, parse_encoded_link, resolve_link_details,
};
pub use scoring::{rank_value, RankBand};
pub use search::{filter_items, match_fields};
pub use types::{
    CanonicalLink, FilterOptions, LinkFields, RankedEntry, RawItem, RawLinkValue, SearchItem,
};
pub use utils::normalize_value;
pub use widget::{
    items_from_markup, items_from_payload, MarkupItem, SearchWidget, WidgetLayout, WidgetPayload,
    WidgetSource,
};
