//! Item normalization: raw `pageList` entries to [`SearchItem`]s.

use tracing::trace;

use super::resolve::{resolve_link_details, DEFAULT_HREF};
use crate::types::{RawItem, SearchItem};
use crate::utils::non_blank;

/// Flatten one raw item, resolving its link.
///
/// Item-level `linkTarget` / `linkRel` only fill gaps the link itself left
/// open. The search value falls back to `linkSearchValue`, then to the href.
pub fn normalize_item(item: &RawItem) -> SearchItem {
    let link = resolve_link_details(&item.link_dest);

    let link_target = if link.target.is_empty() {
        non_blank(item.link_target.as_deref())
            .map(str::to_string)
            .unwrap_or_default()
    } else {
        link.target
    };

    let link_rel = if link.rel.is_empty() {
        non_blank(item.link_rel.as_deref())
            .map(str::to_string)
            .unwrap_or_default()
    } else {
        link.rel
    };

    let link_search_value = if !link.search_value.is_empty() {
        link.search_value
    } else {
        item.link_search_value
            .clone()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| link.href.clone())
    };

    if link.href == DEFAULT_HREF {
        trace!(title = ?item.title_name, "item has no usable link destination");
    }

    SearchItem {
        title_name: item.title_name.clone().unwrap_or_default(),
        desc_text: item.desc_text.clone().unwrap_or_default(),
        link_dest: link.href,
        link_target,
        link_rel,
        link_search_value,
    }
}
