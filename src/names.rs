// ABOUTME: Table heading cleanup, parent section computation, and slug generation.
// ABOUTME: Turns raw DocBook table titles into display names and URL-safe identifiers.

use dom_query::Selection;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

// Trailing boilerplate on table titles; the first occurrence and everything
// after it is dropped.
static TITLE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(IOD Modules)|(Module Attributes)|(Macro Attributes)|(Module Table)").unwrap()
});

static SLUG_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s/]+").unwrap());
static SLUG_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(),']+").unwrap());

/// Extract the human-readable title from a raw table heading.
///
/// Headings render as `Table<nbsp>A.2-1.<nbsp>CR Image IOD Modules`; the
/// third non-breaking-space-separated part carries the title. Anything else
/// is a malformed heading.
pub fn clean_table_name(name: &str) -> Result<String, ExtractError> {
    let parts: Vec<&str> = name.split('\u{a0}').collect();
    let [_, _, title] = parts[..] else {
        return Err(ExtractError::table_name(name, "clean_table_name"));
    };
    let title = match TITLE_SUFFIX_RE.find(title) {
        Some(m) => &title[..m.start()],
        None => title,
    };
    Ok(title.trim().to_string())
}

/// Convert a title into a URL-safe slug: lowercase, whitespace and slash runs
/// become single hyphens, parentheses, commas, and apostrophes are dropped.
pub fn create_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = SLUG_SEPARATOR_RE.replace_all(&lowered, "-");
    SLUG_STRIP_RE.replace_all(&hyphenated, "").into_owned()
}

/// Compute the standard page token of the section containing a table.
///
/// Reads the parent section's titlepage heading anchor and truncates its
/// dotted id before the first literal `1` component; an id with no `1`
/// component is returned verbatim.
pub fn table_parent_page(table_div: &Selection) -> Result<String, ExtractError> {
    let anchor = table_div.parent().select("div > div > div a").first();
    let section_id = anchor
        .attr("id")
        .ok_or_else(|| ExtractError::structure("parent section has no anchor id", "parent_page"))?;

    let components: Vec<&str> = section_id.split('.').collect();
    match components.iter().position(|c| *c == "1") {
        Some(cutoff) => Ok(components[..cutoff].join(".")),
        None => Ok(section_id.to_string()),
    }
}
