// ABOUTME: URL rewriting pass that resolves relative hrefs, image srcs, and object data paths.
// ABOUTME: Composes with sanitization to form the full fragment cleaner.

use std::collections::HashMap;

use ego_tree::NodeId;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::sanitize::sanitize_fragment;
use super::{escape_attr, is_void_element, parse_fragment_scoped};
use crate::error::ExtractError;
use crate::urls::{has_protocol_prefix, UrlResolver};

static HREF_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());
static OBJECT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("object[data]").unwrap());

/// A pending attribute rewrite for one element.
struct Rewrite {
    attr: &'static str,
    value: String,
    // Anchors opened from the cleaned fragment leave the current page.
    add_target_blank: bool,
}

/// Clean an HTML fragment: sanitize it, then resolve every relative
/// reference and resource URL to its absolute form.
pub fn clean_fragment(html: &str, resolver: &UrlResolver) -> Result<String, ExtractError> {
    let sanitized = sanitize_fragment(html)?;
    resolve_fragment_urls(&sanitized, resolver)
}

/// Rewrite relative `a[href]`, `img[src]`, and `object[data]` values in a
/// fragment to absolute URLs. Values with a protocol prefix are untouched;
/// rewritten anchors additionally gain `target="_blank"`. Fragments rooted
/// at table-internal elements such as `<td>` or `<tr>` are accepted.
pub fn resolve_fragment_urls(html: &str, resolver: &UrlResolver) -> Result<String, ExtractError> {
    let (fragment, scope) = parse_fragment_scoped(html);
    let rewrites = mark_rewrites(&fragment, resolver)?;

    let mut out = String::new();
    match scope {
        Some(tag) => {
            // Skip past the table wrapper and serialize from the fragment's
            // own root element onward.
            if let Some(first) = Selector::parse(tag)
                .ok()
                .and_then(|sel| fragment.select(&sel).next())
            {
                serialize_rewritten(*first, &rewrites, &mut out);
                let mut next = first.next_sibling();
                while let Some(node) = next {
                    serialize_rewritten(node, &rewrites, &mut out);
                    next = node.next_sibling();
                }
            }
        }
        None => {
            for child in fragment.root_element().children() {
                serialize_rewritten(child, &rewrites, &mut out);
            }
        }
    }
    Ok(out)
}

fn mark_rewrites(
    fragment: &Html,
    resolver: &UrlResolver,
) -> Result<HashMap<NodeId, Rewrite>, ExtractError> {
    let mut rewrites = HashMap::new();

    for anchor in fragment.select(&HREF_SELECTOR) {
        let href = anchor.value().attr("href").unwrap_or_default();
        if !has_protocol_prefix(href) {
            rewrites.insert(
                anchor.id(),
                Rewrite {
                    attr: "href",
                    value: resolver.resolve_href(href)?,
                    add_target_blank: true,
                },
            );
        }
    }

    for img in fragment.select(&IMG_SELECTOR) {
        let src = img.value().attr("src").unwrap_or_default();
        if !has_protocol_prefix(src) {
            rewrites.insert(
                img.id(),
                Rewrite {
                    attr: "src",
                    value: resolver.resolve_resource(src),
                    add_target_blank: false,
                },
            );
        }
    }

    for object in fragment.select(&OBJECT_SELECTOR) {
        let data = object.value().attr("data").unwrap_or_default();
        if !has_protocol_prefix(data) {
            rewrites.insert(
                object.id(),
                Rewrite {
                    attr: "data",
                    value: resolver.resolve_resource(data),
                    add_target_blank: false,
                },
            );
        }
    }

    Ok(rewrites)
}

fn serialize_rewritten(
    node: ego_tree::NodeRef<scraper::Node>,
    rewrites: &HashMap<NodeId, Rewrite>,
    out: &mut String,
) {
    match node.value() {
        scraper::Node::Text(t) => out.push_str(&**t),
        scraper::Node::Element(el) => {
            let name = el.name();
            let rewrite = rewrites.get(&node.id());

            out.push('<');
            out.push_str(name);

            for (k, v) in el.attrs() {
                let value = match rewrite {
                    Some(r) if r.attr == k => r.value.as_str(),
                    _ => v,
                };
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            if let Some(r) = rewrite {
                if r.add_target_blank {
                    out.push_str(" target=\"_blank\"");
                }
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in node.children() {
                serialize_rewritten(child, rewrites, out);
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
