// ABOUTME: File and stream helpers around the extraction core.
// ABOUTME: Parses HTML files into documents and reads/writes JSON with 4-space pretty printing.

use std::fs;
use std::io::Write;
use std::path::Path;

use dom_query::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ExtractError;

/// Read an HTML file and parse it into a queryable document.
pub fn parse_html_file(path: impl AsRef<Path>) -> Result<Document, ExtractError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| ExtractError::io(path.display().to_string(), "parse_html_file", e.into()))?;
    Ok(Document::from(contents))
}

/// Read a JSON file into any deserializable value.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ExtractError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| ExtractError::io(path.display().to_string(), "read_json_file", e.into()))?;
    serde_json::from_str(&contents)
        .map_err(|e| ExtractError::json(path.display().to_string(), "read_json_file", e.into()))
}

/// Write a value as pretty-printed JSON with 4-space indentation, keys in
/// insertion order.
pub fn write_pretty_json<W: Write, T: Serialize>(
    writer: W,
    value: &T,
) -> Result<(), ExtractError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ExtractError::json("serialize", "write_pretty_json", e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let value = json!({"name": "CR Image", "slug": "cr-image"});
        let mut out = Vec::new();
        write_pretty_json(&mut out, &value).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\n    \"name\": \"CR Image\",\n    \"slug\": \"cr-image\"\n}");
    }

    #[test]
    fn missing_html_file_is_an_io_error() {
        let Err(err) = parse_html_file("/nonexistent/standard.html") else {
            panic!("expected a missing file to fail");
        };
        assert!(err.is_io());
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_json_file::<serde_json::Value>(&path).unwrap_err();
        assert!(err.is_json());
    }

    #[test]
    fn reads_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[{"id": "cr-image"}]"#).unwrap();
        let value: serde_json::Value = read_json_file(&path).unwrap();
        assert_eq!(value[0]["id"], "cr-image");
    }
}
