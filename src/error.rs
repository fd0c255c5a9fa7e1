// ABOUTME: Error types for the DICOM table extractor including ErrorCode enum and ExtractError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Reference,
    TableName,
    Structure,
    ChapterNotFound,
    TableNotFound,
    Io,
    Json,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::Reference => "malformed reference link",
            ErrorCode::TableName => "malformed table name",
            ErrorCode::Structure => "unexpected markup structure",
            ErrorCode::ChapterNotFound => "chapter not found",
            ErrorCode::TableNotFound => "table not found",
            ErrorCode::Io => "I/O error",
            ErrorCode::Json => "JSON error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub what: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dicom-tables: {} {}: {}", self.op, self.what, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    /// Create a Reference error for a malformed reference link.
    pub fn reference(what: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Reference,
            what: what.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a TableName error for a heading that does not split cleanly.
    pub fn table_name(what: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TableName,
            what: what.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a Structure error for missing or misshapen markup.
    pub fn structure(what: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Structure,
            what: what.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a ChapterNotFound error.
    pub fn chapter_not_found(what: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ChapterNotFound,
            what: what.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a TableNotFound error.
    pub fn table_not_found(what: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TableNotFound,
            what: what.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create an Io error wrapping an underlying cause.
    pub fn io(what: impl Into<String>, op: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            code: ErrorCode::Io,
            what: what.into(),
            op: op.into(),
            source: Some(source),
        }
    }

    /// Create a Json error wrapping an underlying cause.
    pub fn json(what: impl Into<String>, op: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            code: ErrorCode::Json,
            what: what.into(),
            op: op.into(),
            source: Some(source),
        }
    }

    /// Returns true if this is a Reference error.
    pub fn is_reference(&self) -> bool {
        self.code == ErrorCode::Reference
    }

    /// Returns true if this is a TableName error.
    pub fn is_table_name(&self) -> bool {
        self.code == ErrorCode::TableName
    }

    /// Returns true if this is a Structure error.
    pub fn is_structure(&self) -> bool {
        self.code == ErrorCode::Structure
    }

    /// Returns true if this is a ChapterNotFound error.
    pub fn is_chapter_not_found(&self) -> bool {
        self.code == ErrorCode::ChapterNotFound
    }

    /// Returns true if this is a TableNotFound error.
    pub fn is_table_not_found(&self) -> bool {
        self.code == ErrorCode::TableNotFound
    }

    /// Returns true if this is an Io error.
    pub fn is_io(&self) -> bool {
        self.code == ErrorCode::Io
    }

    /// Returns true if this is a Json error.
    pub fn is_json(&self) -> bool {
        self.code == ErrorCode::Json
    }
}
