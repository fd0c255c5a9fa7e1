// ABOUTME: Main library entry point for the DICOM standard table extractor.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, Config, TableRecord, ExtractError.

//! dicom-tables - Extracts structured table data from the HTML rendering of
//! the DICOM standard.
//!
//! This crate locates table containers within chapters of the rendered
//! standard, cleans their HTML down to an embeddable fragment with absolute
//! URLs, and emits serializable records for downstream consumption.
//!
//! # Example
//!
//! ```no_run
//! use dicom_tables::{io, AnchorTableId, Extractor, ExtractError};
//!
//! fn main() -> Result<(), ExtractError> {
//!     let standard = io::parse_html_file("part03.html")?;
//!     let extractor = Extractor::default();
//!     let records = extractor.chapter_table_records(&standard, "chapter_A", &AnchorTableId)?;
//!     io::write_pretty_json(std::io::stdout(), &records)?;
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extractor;
pub mod io;
pub mod locate;
pub mod names;
pub mod options;
pub mod result;
pub mod urls;

pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractor::Extractor;
pub use crate::locate::{all_tdivs_in_chapter, find_tdiv_by_id, AnchorTableId, TableIdSource};
pub use crate::names::{clean_table_name, create_slug, table_parent_page};
pub use crate::options::{Config, ExtractorBuilder};
pub use crate::result::TableRecord;
pub use crate::urls::{RefTarget, UrlResolver};
