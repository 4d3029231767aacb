// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Link resolution: any [`RawLinkValue`] in, one [`CanonicalLink`] out.
//!
//! # Resolution order (structured links)
//!
//! 1. `href`, unless it is itself an encoded object, in which case the decoded
//!    object is resolved instead (inheriting the outer target/rel)
//! 2. `raw_url`, then `url`, while no href has been found
//! 3. `target`, else `_blank` when the object asks for a new tab
//! 4. `rel`
//!
//! The object's own `target` and `rel` are only dropped when they are exactly
//! `"null"`; a padded `" null "` trims to the literal `null`. Every other field
//! (and the target/rel inherited into a decoded href) is checked after trimming.
//!
//! Search parts come from the raw `value`, `label`, `href`, `raw_url`, `url`
//! and `slug` fields, in that order.
//!
//! # Post-processing (all shapes)
//!
//! ```text
//! href empty               → "#"
//! target=_blank, rel empty → rel = "noopener noreferrer"
//! href not in parts        → append href
//! search_value             = parts joined by single spaces
//! ```
//!
//! # Recursion bound
//!
//! An encoded href can decode to an object whose href is encoded again. Each
//! decode costs one level; at [`MAX_RESOLVE_DEPTH`] the href is taken literally.

use tracing::{debug, trace};

use super::encoded::{looks_encoded, parse_encoded_link};
use crate::types::{CanonicalLink, LinkFields, RawLinkValue};
use crate::utils::{meaningful, meaningful_exact, meaningful_opt};

/// Placeholder href for links that resolve to nothing.
pub const DEFAULT_HREF: &str = "#";

/// Target that opens a new browsing context.
pub const BLANK_TARGET: &str = "_blank";

/// Rel applied to `_blank` links that did not specify one.
pub const BLANK_TARGET_REL: &str = "noopener noreferrer";

/// CMS spelling of "open in new tab" in the `target` field.
const NEW_TAB_MARKER: &str = "NEW_TAB";

/// How many nested encoded objects are followed before hrefs are taken literally.
pub const MAX_RESOLVE_DEPTH: usize = 2;

/// Resolve a raw link into canonical form.
///
/// Never fails: missing or malformed input resolves to `href = "#"` with empty
/// target and rel.
pub fn resolve_link_details(raw: &RawLinkValue) -> CanonicalLink {
    resolve_at(raw, 0)
}

fn resolve_at(raw: &RawLinkValue, depth: usize) -> CanonicalLink {
    match raw {
        RawLinkValue::Absent => LinkDraft::default().finish(),
        RawLinkValue::PlainString(text) => {
            let mut draft = LinkDraft::default();
            if let Some(href) = meaningful(text) {
                draft.href = href.to_string();
                draft.parts.push(href.to_string());
            }
            draft.finish()
        }
        // Decoding the text already was one level of nesting.
        RawLinkValue::EncodedString(fields) => resolve_fields(fields, depth + 1),
        RawLinkValue::StructuredLink(fields) => resolve_fields(fields, depth),
    }
}

fn resolve_fields(fields: &LinkFields, depth: usize) -> CanonicalLink {
    let mut draft = LinkDraft::default();

    if let Some(href) = meaningful_opt(fields.href.as_deref()) {
        if looks_encoded(href) {
            if depth < MAX_RESOLVE_DEPTH {
                if let Some(decoded) = parse_encoded_link(href) {
                    let mut nested = LinkFields::from_encoded(decoded);
                    inherit(&mut nested.target, fields.target.as_deref());
                    inherit(&mut nested.rel, fields.rel.as_deref());
                    trace!(depth, "href holds an encoded link, resolving it");
                    return resolve_fields(&nested, depth + 1);
                }
            } else {
                debug!(depth, href, "encoded href nested too deep, using it literally");
            }
        }
        draft.href = href.to_string();
    }

    for fallback in [&fields.raw_url, &fields.url] {
        if draft.href != DEFAULT_HREF {
            break;
        }
        if let Some(candidate) = meaningful_opt(fallback.as_deref()) {
            draft.href = candidate.to_string();
        }
    }

    if let Some(target) = meaningful_exact(fields.target.as_deref()) {
        draft.target = target.to_string();
    }
    if draft.target.is_empty()
        && (fields.open_in_new_tab || fields.target.as_deref() == Some(NEW_TAB_MARKER))
    {
        draft.target = BLANK_TARGET.to_string();
    }

    if let Some(rel) = meaningful_exact(fields.rel.as_deref()) {
        draft.rel = rel.to_string();
    }

    let searchable = [
        &fields.value,
        &fields.label,
        &fields.href,
        &fields.raw_url,
        &fields.url,
        &fields.slug,
    ];
    draft.parts.extend(
        searchable
            .into_iter()
            .filter_map(|field| meaningful_opt(field.as_deref()))
            .map(str::to_string),
    );

    draft.finish()
}

/// Copy the outer object's value into a decoded field the blob left unset.
fn inherit(slot: &mut Option<String>, outer: Option<&str>) {
    let unset = slot.as_deref().map_or(true, str::is_empty);
    if unset {
        if let Some(value) = meaningful_opt(outer) {
            *slot = Some(value.to_string());
        }
    }
}

/// Link under construction, before the canonical invariants are applied.
struct LinkDraft {
    href: String,
    target: String,
    rel: String,
    parts: Vec<String>,
}

impl Default for LinkDraft {
    fn default() -> Self {
        Self {
            href: DEFAULT_HREF.to_string(),
            target: String::new(),
            rel: String::new(),
            parts: Vec::new(),
        }
    }
}

impl LinkDraft {
    fn finish(mut self) -> CanonicalLink {
        if self.href.is_empty() {
            self.href = DEFAULT_HREF.to_string();
        }

        if self.rel.is_empty() && self.target == BLANK_TARGET {
            self.rel = BLANK_TARGET_REL.to_string();
        }

        if !self.parts.contains(&self.href) {
            self.parts.push(self.href.clone());
        }

        CanonicalLink {
            search_value: self.parts.join(" ").trim().to_string(),
            href: self.href,
            target: self.target,
            rel: self.rel,
        }
    }
}
