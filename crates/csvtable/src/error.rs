//! Error types for the csvtable library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for table operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// Error opening, reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV reported by the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row has a field count the row mode does not accept.
    #[error("Field count error at line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Row or column index outside the table.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Tables with different headers cannot be appended.
    #[error("Header mismatch: {0}")]
    HeaderMismatch(String),

    /// Invalid argument passed to a constructor.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No header record in the input.
    #[error("Empty data: {0}")]
    EmptyData(String),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
