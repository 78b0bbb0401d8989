//! CSV writer for [`Table`]s.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableError};
use crate::table::Table;

/// When to quote fields on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Quote only fields containing the delimiter, quotes or line breaks.
    #[default]
    Necessary,
    /// Quote every field.
    Always,
}

impl From<QuoteStyle> for csv::QuoteStyle {
    fn from(style: QuoteStyle) -> Self {
        match style {
            QuoteStyle::Necessary => csv::QuoteStyle::Necessary,
            QuoteStyle::Always => csv::QuoteStyle::Always,
        }
    }
}

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quoting rule.
    pub quote_style: QuoteStyle,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: QuoteStyle::Necessary,
        }
    }
}

impl WriterConfig {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quoting rule.
    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }
}

/// Serializes tables as delimited text: the header row, then every data row.
pub struct Writer {
    config: WriterConfig,
}

impl Writer {
    /// Create a writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with custom configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write `table` to `path`, creating or truncating the file.
    ///
    /// The file is written in place; a failure part way leaves whatever was
    /// already written.
    pub fn write_file(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.write_to(table, file).map_err(|e| match e {
            TableError::Csv(err) => io_error(path, err),
            other => other,
        })?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            "wrote table"
        );
        Ok(())
    }

    /// Write `table` to any writer.
    pub fn write_to<W: Write>(&self, table: &Table, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .quote_style(self.config.quote_style.into())
            .from_writer(writer);

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach the output path to I/O failures reported by the CSV writer.
fn io_error(path: &Path, err: csv::Error) -> TableError {
    if !err.is_io_error() {
        return TableError::Csv(err);
    }
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => io::Error::other(format!("{:?}", kind)),
    };
    TableError::Io {
        path: path.to_path_buf(),
        source,
    }
}
