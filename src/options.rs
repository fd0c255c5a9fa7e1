// ABOUTME: Configuration for the extractor including base URLs and the default standard page.
// ABOUTME: ExtractorBuilder provides a fluent API for constructing Extractor instances.

use crate::extractor::Extractor;

/// Base URL of the single-file ("long form") HTML rendering of the standard.
pub const BASE_LONG_URL: &str = "http://dicom.nema.org/medical/dicom/current/output/html/";

/// Base URL of the chapter-partitioned ("short form") HTML rendering.
pub const BASE_SHORT_URL: &str = "http://dicom.nema.org/medical/dicom/current/output/chtml/";

/// Page assumed for same-page references (`#sect_...` with no path).
pub const DEFAULT_PAGE: &str = "part03.html";

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_long_url: String,
    pub base_short_url: String,
    pub default_page: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_long_url: BASE_LONG_URL.to_string(),
            base_short_url: BASE_SHORT_URL.to_string(),
            default_page: DEFAULT_PAGE.to_string(),
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractorBuilder {
    config: Config,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for long-form (single-file) references.
    pub fn base_long_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_long_url = url.into();
        self
    }

    /// Set the base URL for short-form (chapter-partitioned) references.
    pub fn base_short_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_short_url = url.into();
        self
    }

    /// Set the page assumed for same-page references.
    pub fn default_page(mut self, page: impl Into<String>) -> Self {
        self.config.default_page = page.into();
        self
    }

    /// Build the Extractor with the configured options.
    pub fn build(self) -> Extractor {
        Extractor::new(self.config)
    }
}
