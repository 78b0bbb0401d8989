//! CLI command implementations.

pub mod concat;
pub mod find;
pub mod get;
pub mod info;
pub mod set;

use std::path::Path;

use csvtable::{Parser, Table};

use crate::cli::FormatArgs;

/// Load a table with the format options given on the command line.
pub(crate) fn load(file: &Path, format: &FormatArgs) -> Result<Table, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(Parser::with_config(format.parser_config()).parse_file(file)?)
}

/// Resolve a column name to its position.
pub(crate) fn column_index(table: &Table, column: &str) -> Result<usize, Box<dyn std::error::Error>> {
    table.header_index(column).ok_or_else(|| {
        format!(
            "Unknown column '{}'. Available: {}",
            column,
            table.headers().join(", ")
        )
        .into()
    })
}
