// ABOUTME: DOM cleaning module for table fragments lifted out of the standard.
// ABOUTME: Provides attribute sanitization and relative URL rewriting over scraper fragments.

//! DOM utilities for cleaning extracted HTML fragments.
//!
//! Cleaning happens in two passes over a parsed fragment: `sanitize` strips
//! attributes down to an allow-list and drops empty anchors, `rewrite`
//! resolves every remaining relative reference to an absolute URL.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

pub mod rewrite;
pub mod sanitize;

pub use rewrite::{clean_fragment, resolve_fragment_urls};
pub use sanitize::sanitize_fragment;

// Elements the HTML5 parser only accepts inside a table. A fragment rooted at
// one of these would be dropped by a body-context parse, so it is parsed with
// a table wrapper and unwrapped during serialization.
pub(crate) const TABLE_SCOPED_TAGS: &[&str] = &[
    "caption", "col", "colgroup", "tbody", "td", "tfoot", "th", "thead", "tr",
];

static LEADING_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*<([a-zA-Z][a-zA-Z0-9]*)").unwrap());

/// Parse a fragment, wrapping table-scoped roots so the parser keeps them.
///
/// Returns the parsed tree plus the root tag name when a wrapper was added;
/// callers locate their top-level element through that tag instead of the
/// fragment root's children.
pub(crate) fn parse_fragment_scoped(html: &str) -> (Html, Option<&'static str>) {
    let leading = LEADING_TAG_RE
        .captures(html)
        .map(|caps| caps[1].to_lowercase());
    let scoped = leading
        .as_deref()
        .and_then(|tag| TABLE_SCOPED_TAGS.iter().copied().find(|t| *t == tag));
    match scoped {
        Some(tag) => (
            Html::parse_fragment(&format!("<table>{}</table>", html)),
            Some(tag),
        ),
        None => (Html::parse_fragment(html), None),
    }
}

/// Escape attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is void element.
pub(crate) fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
