// ABOUTME: Attribute allow-list sanitization and empty-anchor removal for HTML fragments.
// ABOUTME: Marks nodes to drop, then re-serializes the fragment with filtered attributes.

use std::collections::HashSet;

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{escape_attr, is_void_element, parse_fragment_scoped};
use crate::error::ExtractError;

/// Attributes that survive sanitization; everything else is discarded.
pub const ALLOWED_ATTRS: &[&str] = &["href", "src", "type", "data", "colspan", "rowspan"];

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Sanitize an HTML fragment.
///
/// Takes the first element under the fragment root as the top-level tag,
/// filters every element's attributes down to [`ALLOWED_ATTRS`], removes
/// anchor descendants whose text content is empty, and returns the top-level
/// tag serialized back to a string. Fragments rooted at table-internal
/// elements such as `<td>` or `<tr>` are accepted. Applying this to its own
/// output is a no-op.
pub fn sanitize_fragment(html: &str) -> Result<String, ExtractError> {
    let (fragment, scope) = parse_fragment_scoped(html);
    let top = match scope {
        Some(tag) => Selector::parse(tag)
            .ok()
            .and_then(|sel| fragment.select(&sel).next()),
        None => fragment.root_element().children().find_map(ElementRef::wrap),
    }
    .ok_or_else(|| ExtractError::structure("fragment has no element", "sanitize"))?;

    let skip = mark_empty_anchors(&top);

    let mut out = String::new();
    serialize_sanitized(*top, &skip, &mut out);
    Ok(out)
}

/// Anchors with no text content carry nothing worth keeping once their
/// attributes are gone.
fn mark_empty_anchors(top: &ElementRef) -> HashSet<NodeId> {
    let mut skip = HashSet::new();
    for anchor in top.select(&ANCHOR_SELECTOR) {
        if anchor.text().collect::<String>().is_empty() {
            skip.insert(anchor.id());
        }
    }
    skip
}

fn serialize_sanitized(
    node: ego_tree::NodeRef<scraper::Node>,
    skip: &HashSet<NodeId>,
    out: &mut String,
) {
    if skip.contains(&node.id()) {
        return;
    }
    match node.value() {
        scraper::Node::Text(t) => out.push_str(&**t),
        scraper::Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);

            for (k, v) in el.attrs() {
                if !ALLOWED_ATTRS.contains(&k) {
                    continue;
                }
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in node.children() {
                serialize_sanitized(child, skip, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        scraper::Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(&**c);
            out.push_str("-->");
        }
        _ => {}
    }
}
