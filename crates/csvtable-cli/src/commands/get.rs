//! Get command - print a single cell.

use std::path::PathBuf;

use crate::cli::FormatArgs;

pub fn run(
    file: PathBuf,
    row: usize,
    column: String,
    format: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load(&file, format)?;
    let col = super::column_index(&table, &column)?;

    // Plain output so the value can be piped.
    println!("{}", table.value_at(row, col)?);
    Ok(())
}
