//! Report export.
//!
//! Serializes a (typically pre-filtered) record sequence for download:
//! - `csv` - delimited text, one row per record
//! - `document` - paginated plain-text table
//!
//! Both formats share the same fixed column order and export exactly the
//! sequence they are given: no further filtering, no store mutation.

pub mod csv;
pub mod document;

use thiserror::Error;

pub use self::csv::to_csv;
pub use document::to_document;

/// Deterministic download names for the two export formats.
pub const CSV_FILENAME: &str = "reports.csv";
pub const DOCUMENT_FILENAME: &str = "reports.txt";

/// Shared column order for every export format.
pub const EXPORT_COLUMNS: [&str; 7] = [
    "Title",
    "Description",
    "Category",
    "Location",
    "Status",
    "Date",
    "Image",
];

/// Timestamp layout used in export rows.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors while building an export document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
