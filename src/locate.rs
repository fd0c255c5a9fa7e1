// ABOUTME: Locates table containers within chapters of the parsed standard document.
// ABOUTME: Defines the TableIdSource collaborator seam for canonical table identifiers.

use dom_query::{Document, Selection};

use crate::error::ExtractError;

/// Computes the canonical identifier of a table container.
///
/// Table identity lives with the relation-extraction side of the pipeline;
/// this trait keeps the locator independent of how identifiers are derived.
pub trait TableIdSource {
    fn table_id(&self, table_div: &Selection) -> Option<String>;
}

/// Default identifier source: the `id` of the first anchor inside the table
/// container, which DocBook renders ahead of the table title.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorTableId;

impl TableIdSource for AnchorTableId {
    fn table_id(&self, table_div: &Selection) -> Option<String> {
        table_div
            .select("a")
            .first()
            .attr("id")
            .map(|id| id.to_string())
    }
}

/// Return every table container in the chapter whose titlepage heading anchor
/// carries `chapter_name` as its id.
///
/// The first matching chapter wins; a document without a matching chapter is
/// a `ChapterNotFound` error.
pub fn all_tdivs_in_chapter<'a>(
    standard: &'a Document,
    chapter_name: &str,
) -> Result<Vec<Selection<'a>>, ExtractError> {
    for chapter in standard.select("div.chapter").iter() {
        let heading_id = chapter.select("div > div > div > h1 > a").first().attr("id");
        if heading_id.as_deref() == Some(chapter_name) {
            return Ok(chapter.select("div.table").iter().collect());
        }
    }
    Err(ExtractError::chapter_not_found(
        chapter_name,
        "all_tdivs_in_chapter",
    ))
}

/// Linear scan for the table whose identifier matches `table_id`.
pub fn find_tdiv_by_id<'a>(
    all_tables: &[Selection<'a>],
    table_id: &str,
    ids: &impl TableIdSource,
) -> Result<Selection<'a>, ExtractError> {
    all_tables
        .iter()
        .find(|table| ids.table_id(table).as_deref() == Some(table_id))
        .cloned()
        .ok_or_else(|| ExtractError::table_not_found(table_id, "find_tdiv_by_id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CHAPTERS: &str = r#"
    <html><body>
      <div class="chapter">
        <div class="titlepage"><div><div>
          <h1 class="title"><a id="chapter_A"></a>A&#160;IODs</h1>
        </div></div></div>
        <div class="table"><a id="table_A.2-1"></a><p class="title"><strong>Table&#160;A.2-1.&#160;CR Image IOD Modules</strong></p></div>
        <div class="table"><a id="table_A.3-1"></a><p class="title"><strong>Table&#160;A.3-1.&#160;CT Image IOD Modules</strong></p></div>
      </div>
      <div class="chapter">
        <div class="titlepage"><div><div>
          <h1 class="title"><a id="chapter_C"></a>C&#160;Modules</h1>
        </div></div></div>
        <div class="table"><a id="table_C.2-1"></a><p class="title"><strong>Table&#160;C.2-1.&#160;Patient Relationship Module Attributes</strong></p></div>
      </div>
    </body></html>
    "#;

    #[test]
    fn finds_tables_in_the_named_chapter() {
        let doc = Document::from(TWO_CHAPTERS);
        let tables = all_tdivs_in_chapter(&doc, "chapter_A").unwrap();
        assert_eq!(tables.len(), 2);

        let tables = all_tdivs_in_chapter(&doc, "chapter_C").unwrap();
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn missing_chapter_is_a_typed_error() {
        let doc = Document::from(TWO_CHAPTERS);
        let err = all_tdivs_in_chapter(&doc, "chapter_Z").unwrap_err();
        assert!(err.is_chapter_not_found());
    }

    #[test]
    fn anchor_id_source_reads_the_first_anchor() {
        let doc = Document::from(TWO_CHAPTERS);
        let tables = all_tdivs_in_chapter(&doc, "chapter_A").unwrap();
        assert_eq!(
            AnchorTableId.table_id(&tables[0]).as_deref(),
            Some("table_A.2-1")
        );
    }

    #[test]
    fn finds_table_by_id() {
        let doc = Document::from(TWO_CHAPTERS);
        let tables = all_tdivs_in_chapter(&doc, "chapter_A").unwrap();
        let table = find_tdiv_by_id(&tables, "table_A.3-1", &AnchorTableId).unwrap();
        assert_eq!(
            AnchorTableId.table_id(&table).as_deref(),
            Some("table_A.3-1")
        );
    }

    #[test]
    fn missing_table_is_a_typed_error() {
        let doc = Document::from(TWO_CHAPTERS);
        let tables = all_tdivs_in_chapter(&doc, "chapter_A").unwrap();
        let err = find_tdiv_by_id(&tables, "table_Z.9-9", &AnchorTableId).unwrap_err();
        assert!(err.is_table_not_found());
    }
}
