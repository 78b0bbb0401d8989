//! Find command - locate the first row matching a value.

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::FormatArgs;

pub fn run(
    file: PathBuf,
    column: String,
    value: String,
    json_output: bool,
    format: &FormatArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load(&file, format)?;
    // Fail on a bad column name instead of reporting "no match".
    super::column_index(&table, &column)?;

    let found = table.find_by_header(&column, &value);

    if json_output {
        let result = match found {
            Some((row, index)) => {
                let record: serde_json::Map<String, serde_json::Value> = table
                    .headers()
                    .iter()
                    .zip(row)
                    .map(|(h, v)| (h.clone(), serde_json::Value::String(v.clone())))
                    .collect();
                serde_json::json!({ "found": true, "row_index": index, "row": record })
            }
            None => serde_json::json!({ "found": false }),
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match found {
        Some((row, index)) => {
            println!(
                "{} row {}",
                "Match at".green().bold(),
                index.to_string().white().bold()
            );
            for (header, cell) in table.headers().iter().zip(row) {
                println!("  {:20} {}", header.yellow(), cell);
            }
        }
        None => {
            println!(
                "{} '{}' in column {}",
                "No match for".yellow().bold(),
                value,
                column.cyan()
            );
        }
    }

    Ok(())
}
