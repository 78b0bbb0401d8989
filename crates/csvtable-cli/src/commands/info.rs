//! Info command - show headers and row count.

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::FormatArgs;

pub fn run(file: PathBuf, json_output: bool, format: &FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load(&file, format)?;

    if json_output {
        let info = serde_json::json!({
            "file": file.display().to_string(),
            "headers": table.headers(),
            "header_count": table.header_count(),
            "row_count": table.row_count(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Table".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!("{}", "Headers:".yellow().bold());
    for (i, header) in table.headers().iter().enumerate() {
        println!("  {:>3}  {}", i, header);
    }
    println!();
    println!(
        "{} rows, {} columns",
        table.row_count().to_string().white().bold(),
        table.header_count().to_string().white().bold()
    );

    Ok(())
}
