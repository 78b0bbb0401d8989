//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use csvtable::{ParserConfig, RowMode, WriterConfig};

/// csvtable: inspect and edit CSV tables
#[derive(Parser)]
#[command(name = "csvtable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options controlling how tables are read and written.
#[derive(Args, Clone, Debug)]
pub struct FormatArgs {
    /// Reject rows shorter than the header row instead of padding them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Field delimiter
    #[arg(short, long, global = true, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl FormatArgs {
    pub fn parser_config(&self) -> ParserConfig {
        let mode = if self.strict {
            RowMode::Strict
        } else {
            RowMode::Permissive
        };
        ParserConfig::default()
            .with_delimiter(self.delimiter)
            .with_mode(mode)
    }

    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::default().with_delimiter(self.delimiter)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the headers and row count of a table
    Info {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single cell
    Get {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based data row index
        #[arg(short, long)]
        row: usize,

        /// Column name (case-insensitive)
        #[arg(short, long)]
        column: String,
    },

    /// Find the first row whose column matches a value (case-insensitive)
    Find {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column name to search
        #[arg(short, long)]
        column: String,

        /// Value to look for
        #[arg(long)]
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Overwrite a single cell and save the table
    Set {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based data row index
        #[arg(short, long)]
        row: usize,

        /// Column name (case-insensitive)
        #[arg(short, long)]
        column: String,

        /// New cell value
        #[arg(long)]
        value: String,

        /// Output path (default: overwrite FILE)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Concatenate tables with identical headers
    Concat {
        /// Input CSV files, in order
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Output path for the combined table
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Parse a single-byte delimiter, accepting `\t` and `tab` for tabs.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("Delimiter must be a single ASCII character, got '{}'", s)),
    }
}
