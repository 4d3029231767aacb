//! Utility functions for string processing.

/// Literal that stands in for "no value" in upstream CMS exports.
pub const NULL_LITERAL: &str = "null";

/// Normalize a string for matching: trim and lowercase.
///
/// Inner whitespace is kept, so match offsets line up with the displayed text.
///
/// - "  Alpha Page " → "alpha page"
/// - "/Docs/API" → "/docs/api"
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Trimmed view of `value` when it carries real content.
///
/// Returns `None` for empty or whitespace-only text and for the literal `"null"`.
pub fn meaningful(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NULL_LITERAL {
        None
    } else {
        Some(trimmed)
    }
}

/// Same as [`meaningful`], for optional fields.
pub fn meaningful_opt(value: Option<&str>) -> Option<&str> {
    value.and_then(meaningful)
}

/// Trimmed, non-empty text unless the *untrimmed* value is exactly `"null"`.
///
/// A link's own `target` and `rel` follow this rule, so `" null "` survives as
/// `"null"` there while `"null"` alone is dropped.
pub fn meaningful_exact(value: Option<&str>) -> Option<&str> {
    value
        .filter(|raw| *raw != NULL_LITERAL)
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}

/// Trimmed, non-empty text. Unlike [`meaningful`], `"null"` is accepted.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First occurrence of `needle` in `haystack`, counted in UTF-16 code units.
///
/// This is the unit JavaScript's `indexOf` reports: characters outside the
/// Basic Multilingual Plane (emoji, for one) count as two.
pub fn utf16_offset_of(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].encode_utf16().count())
}
