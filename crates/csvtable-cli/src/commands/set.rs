//! Set command - overwrite one cell and save the table.

use std::path::PathBuf;

use colored::Colorize;
use csvtable::Writer;
use tracing::debug;

use crate::cli::FormatArgs;

pub fn run(
    file: PathBuf,
    row: usize,
    column: String,
    value: String,
    output: Option<PathBuf>,
    format: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut table = super::load(&file, format)?;
    let col = super::column_index(&table, &column)?;

    let previous = table.value_at(row, col)?.to_string();
    table.set_value_at(row, col, value.clone())?;
    debug!(row, col, %previous, new = %value, "updated cell");

    let output_path = output.unwrap_or_else(|| file.clone());
    Writer::with_config(format.writer_config()).write_file(&table, &output_path)?;

    println!(
        "{} row {} {}: '{}' -> '{}'",
        "Updated".green().bold(),
        row,
        column.cyan(),
        previous,
        value.white().bold()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
