// ABOUTME: URL resolution for cross-references and resources found in the standard's HTML.
// ABOUTME: Classifies reference links as short-form or long-form and rewrites them to absolute URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;
use crate::options::Config;

// References already carrying a protocol are left alone.
static PROTOCOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(http|ftp)").unwrap());

// Section and chapter references resolve against the chapter-partitioned rendering.
static SHORT_FORM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(sect_)|(chapter)").unwrap());

/// Returns true if the reference already carries a recognized protocol prefix.
pub fn has_protocol_prefix(reference: &str) -> bool {
    PROTOCOL_RE.is_match(reference)
}

/// A classified in-document reference link.
///
/// Short-form references point into the chapter-partitioned rendering (one
/// file per section page); long-form references point into the single-file
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    ShortForm { chapter: String, section: String },
    LongForm { page: String, section: String },
}

impl RefTarget {
    /// Classify a reference link of the form `<page>#<section_id>` or
    /// `#<section_id>`. An empty page part means `default_page`.
    pub fn classify(reference: &str, default_page: &str) -> Result<Self, ExtractError> {
        let (page, section) = reference
            .split_once('#')
            .ok_or_else(|| ExtractError::reference(reference, "classify"))?;
        let page = if page.is_empty() { default_page } else { page };

        if SHORT_FORM_RE.is_match(reference) {
            let chapter = page
                .strip_suffix(".html")
                .ok_or_else(|| ExtractError::reference(reference, "classify"))?;
            Ok(RefTarget::ShortForm {
                chapter: chapter.to_string(),
                section: section.to_string(),
            })
        } else {
            Ok(RefTarget::LongForm {
                page: page.to_string(),
                section: section.to_string(),
            })
        }
    }
}

/// Computes the standard page token a section id lives on.
///
/// The components before the first literal `1` name the page; when exactly one
/// component remains the link is chapter-level and the `sect_` prefix becomes
/// `chapter_`. A section id with no `1` component is used verbatim.
pub fn standard_page(section_id: &str) -> String {
    let components: Vec<&str> = section_id.split('.').collect();
    match components.iter().position(|c| *c == "1") {
        Some(cutoff) => {
            let page = components[..cutoff].join(".");
            if cutoff == 1 {
                page.replace("sect_", "chapter_")
            } else {
                page
            }
        }
        None => section_id.to_string(),
    }
}

/// Resolves relative reference links and resource paths against the two base
/// URLs from [`Config`].
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base_long_url: String,
    base_short_url: String,
    default_page: String,
}

impl UrlResolver {
    pub fn new(config: &Config) -> Self {
        Self {
            base_long_url: config.base_long_url.clone(),
            base_short_url: config.base_short_url.clone(),
            default_page: config.default_page.clone(),
        }
    }

    /// Resolve an anchor href to an absolute URL.
    ///
    /// References already carrying a protocol prefix are returned unchanged.
    pub fn resolve_href(&self, href: &str) -> Result<String, ExtractError> {
        if has_protocol_prefix(href) {
            return Ok(href.to_string());
        }
        match RefTarget::classify(href, &self.default_page)? {
            RefTarget::ShortForm { chapter, section } => Ok(format!(
                "{}{}/{}.html#{}",
                self.base_short_url,
                chapter,
                standard_page(&section),
                section
            )),
            RefTarget::LongForm { page, section } => {
                Ok(format!("{}{}#{}", self.base_long_url, page, section))
            }
        }
    }

    /// Resolve an image `src` or object `data` path to an absolute URL.
    ///
    /// Resources are never fragment-addressed; protocol-prefixed values are
    /// returned unchanged, everything else is joined onto the long-form base.
    pub fn resolve_resource(&self, value: &str) -> String {
        if has_protocol_prefix(value) {
            value.to_string()
        } else {
            format!("{}{}", self.base_long_url, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BASE_LONG_URL, BASE_SHORT_URL};
    use pretty_assertions::assert_eq;

    fn resolver() -> UrlResolver {
        UrlResolver::new(&Config::default())
    }

    #[test]
    fn protocol_prefixed_reference_is_untouched() {
        let href = "http://dicom.nema.org/medical/dicom/current/output/html/part03.html#sect_A.1";
        assert_eq!(resolver().resolve_href(href).unwrap(), href);

        let ftp = "ftp://medical.nema.org/medical/dicom/somefile";
        assert_eq!(resolver().resolve_href(ftp).unwrap(), ftp);
    }

    #[test]
    fn same_page_section_resolves_to_chapter_page() {
        // sect_10.1.2 truncates at the "1" component leaving a single
        // component, so the link is chapter-level.
        let resolved = resolver().resolve_href("#sect_10.1.2").unwrap();
        assert_eq!(
            resolved,
            format!("{}part03/chapter_10.html#sect_10.1.2", BASE_SHORT_URL)
        );
    }

    #[test]
    fn nested_section_keeps_sect_prefix() {
        let resolved = resolver().resolve_href("#sect_10.2.1.3").unwrap();
        assert_eq!(
            resolved,
            format!("{}part03/sect_10.2.html#sect_10.2.1.3", BASE_SHORT_URL)
        );
    }

    #[test]
    fn explicit_page_short_form() {
        let resolved = resolver().resolve_href("part04.html#sect_B.1.2").unwrap();
        assert_eq!(
            resolved,
            format!("{}part04/chapter_B.html#sect_B.1.2", BASE_SHORT_URL)
        );
    }

    #[test]
    fn chapter_reference_is_short_form() {
        let target = RefTarget::classify("#chapter_C", "part03.html").unwrap();
        assert_eq!(
            target,
            RefTarget::ShortForm {
                chapter: "part03".to_string(),
                section: "chapter_C".to_string(),
            }
        );
    }

    #[test]
    fn table_reference_is_long_form() {
        let resolved = resolver().resolve_href("#table_A.2-1").unwrap();
        assert_eq!(
            resolved,
            format!("{}part03.html#table_A.2-1", BASE_LONG_URL)
        );
    }

    #[test]
    fn long_form_keeps_explicit_page() {
        let resolved = resolver().resolve_href("part06.html#table_6-1").unwrap();
        assert_eq!(
            resolved,
            format!("{}part06.html#table_6-1", BASE_LONG_URL)
        );
    }

    #[test]
    fn reference_without_fragment_is_an_error() {
        let err = resolver().resolve_href("part03.html").unwrap_err();
        assert!(err.is_reference());
    }

    #[test]
    fn short_form_page_without_html_suffix_is_an_error() {
        let err = resolver().resolve_href("part03#sect_A.1").unwrap_err();
        assert!(err.is_reference());
    }

    #[test]
    fn standard_page_without_one_component_is_verbatim() {
        // No "1" component anywhere: the fallback keeps the id unchanged.
        assert_eq!(standard_page("sect_7.5.2"), "sect_7.5.2");
    }

    #[test]
    fn standard_page_truncates_before_first_one() {
        assert_eq!(standard_page("sect_C.7.1.4"), "sect_C.7");
        assert_eq!(standard_page("sect_10.1.2"), "chapter_10");
    }

    #[test]
    fn resource_resolves_against_long_base() {
        assert_eq!(
            resolver().resolve_resource("figures/PS3.3_A.2-1.svg"),
            format!("{}figures/PS3.3_A.2-1.svg", BASE_LONG_URL)
        );
    }

    #[test]
    fn absolute_resource_is_untouched() {
        let src = "http://example.com/image.png";
        assert_eq!(resolver().resolve_resource(src), src);
    }

    #[test]
    fn protocol_prefix_only_matches_at_the_start() {
        assert!(has_protocol_prefix("http://example.com/page"));
        assert!(has_protocol_prefix("ftp://example.com/file"));
        assert!(!has_protocol_prefix("figures/ftp_diagram.svg"));
        assert!(!has_protocol_prefix("notes/http_headers.html"));
        assert_eq!(
            resolver().resolve_resource("figures/ftp_diagram.svg"),
            format!("{}figures/ftp_diagram.svg", BASE_LONG_URL)
        );
    }
}
