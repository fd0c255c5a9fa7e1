// ABOUTME: TableRecord struct holding the extracted metadata and cleaned HTML for one table.
// ABOUTME: Serializes with the camelCase field names used by the downstream JSON corpus.

use serde::{Deserialize, Serialize};

/// One extracted table: identity, display metadata, and its cleaned,
/// embeddable HTML fragment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub section: String,
    pub link_to_standard: String,
    pub html: String,
}

impl TableRecord {
    /// Returns true if the record carries no table content.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.html.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = TableRecord {
            id: "table_A.2-1".to_string(),
            name: "CR Image".to_string(),
            slug: "cr-image".to_string(),
            section: "sect_A.2".to_string(),
            link_to_standard:
                "http://dicom.nema.org/medical/dicom/current/output/html/part03.html#table_A.2-1"
                    .to_string(),
            html: "<div></div>".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["linkToStandard"], record.link_to_standard);
        assert_eq!(json["slug"], "cr-image");
        assert!(json.get("link_to_standard").is_none());
    }

    #[test]
    fn is_empty_only_for_blank_records() {
        assert!(TableRecord::default().is_empty());

        let record = TableRecord {
            id: "table_A.2-1".to_string(),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }
}
