// ABOUTME: High-level Extractor composing the locator, name cleaner, URL resolver, and DOM cleaner.
// ABOUTME: Produces TableRecord values from a parsed standard document.

use dom_query::{Document, Selection};

use crate::dom::clean_fragment;
use crate::error::ExtractError;
use crate::locate::{all_tdivs_in_chapter, find_tdiv_by_id, TableIdSource};
use crate::names::{clean_table_name, create_slug, table_parent_page};
use crate::options::{Config, ExtractorBuilder};
use crate::result::TableRecord;
use crate::urls::UrlResolver;

/// Extracts table records from a parsed rendering of the standard.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: Config,
    resolver: UrlResolver,
}

impl Extractor {
    /// Create an Extractor from explicit configuration.
    pub fn new(config: Config) -> Self {
        let resolver = UrlResolver::new(&config);
        Self { config, resolver }
    }

    /// Create an ExtractorBuilder for fluent configuration.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// The configuration this Extractor was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The URL resolver derived from this Extractor's configuration.
    pub fn resolver(&self) -> &UrlResolver {
        &self.resolver
    }

    /// Sanitize a fragment and resolve its relative URLs to absolute form.
    pub fn clean_html(&self, fragment: &str) -> Result<String, ExtractError> {
        clean_fragment(fragment, &self.resolver)
    }

    /// All table containers in the named chapter.
    pub fn chapter_tables<'a>(
        &self,
        standard: &'a Document,
        chapter_name: &str,
    ) -> Result<Vec<Selection<'a>>, ExtractError> {
        all_tdivs_in_chapter(standard, chapter_name)
    }

    /// Build the record for one table container: identifier, cleaned name and
    /// slug, parent section, long-form link into the standard, and the
    /// cleaned HTML fragment.
    pub fn table_record(
        &self,
        table_div: &Selection,
        ids: &impl TableIdSource,
    ) -> Result<TableRecord, ExtractError> {
        let id = ids
            .table_id(table_div)
            .ok_or_else(|| ExtractError::structure("table has no identifier", "table_record"))?;

        let heading = table_div.select("p.title strong").first().text();
        let name = clean_table_name(&heading)?;
        let slug = create_slug(&name);
        let section = table_parent_page(table_div)?;
        let link_to_standard = self.resolver.resolve_href(&format!("#{}", id))?;
        let html = self.clean_html(&table_div.html())?;

        Ok(TableRecord {
            id,
            name,
            slug,
            section,
            link_to_standard,
            html,
        })
    }

    /// Records for every table in the named chapter, in document order.
    pub fn chapter_table_records(
        &self,
        standard: &Document,
        chapter_name: &str,
        ids: &impl TableIdSource,
    ) -> Result<Vec<TableRecord>, ExtractError> {
        self.chapter_tables(standard, chapter_name)?
            .iter()
            .map(|table| self.table_record(table, ids))
            .collect()
    }

    /// Record for the single table matching `table_id` within the chapter.
    pub fn table_record_by_id(
        &self,
        standard: &Document,
        chapter_name: &str,
        table_id: &str,
        ids: &impl TableIdSource,
    ) -> Result<TableRecord, ExtractError> {
        let tables = self.chapter_tables(standard, chapter_name)?;
        let table = find_tdiv_by_id(&tables, table_id, ids)?;
        self.table_record(&table, ids)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
