//! Concat command - append tables with identical headers.

use std::path::PathBuf;

use colored::Colorize;
use csvtable::Writer;

use crate::cli::FormatArgs;

pub fn run(
    files: Vec<PathBuf>,
    output: PathBuf,
    format: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (first, rest) = files
        .split_first()
        .ok_or("At least one input file is required")?;

    let mut combined = super::load(first, format)?;
    for file in rest {
        let table = super::load(file, format)?;
        combined
            .append(&table)
            .map_err(|e| format!("{}: {}", file.display(), e))?;
    }

    Writer::with_config(format.writer_config()).write_file(&combined, &output)?;

    println!(
        "{} {} files ({} rows)",
        "Combined".cyan().bold(),
        files.len().to_string().white().bold(),
        combined.row_count()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
