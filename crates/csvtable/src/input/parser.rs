//! CSV parser producing [`Table`]s.

use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, TableError};
use crate::table::Table;

/// How to treat data rows whose field count differs from the header count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    /// Every row must have exactly as many fields as there are headers.
    Strict,
    /// Short rows are padded with empty fields; long rows are still rejected.
    #[default]
    Permissive,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
    /// Row length handling.
    pub mode: RowMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            mode: RowMode::Permissive,
        }
    }
}

impl ParserConfig {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the row mode.
    pub fn with_mode(mut self, mode: RowMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Parses delimited text into tables.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file into a table.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = self.parse_reader(file)?;
        debug!(
            path = %path.display(),
            headers = table.header_count(),
            rows = table.row_count(),
            "parsed file"
        );
        Ok(table)
    }

    /// Parse CSV text from any reader.
    ///
    /// The first record becomes the headers; every following record is a row.
    /// One leading UTF-8 BOM is dropped by the CSV reader; any further BOM
    /// stays part of the first header.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|s| s.to_string()).collect(),
            None => return Err(TableError::EmptyData("no header record found".to_string())),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row = record.iter().map(|s| s.to_string()).collect();
            rows.push(self.fit_row(row, headers.len(), line)?);
        }

        Ok(Table::from_parts(headers, rows))
    }

    /// Check a row against the header count, padding it in permissive mode.
    fn fit_row(&self, mut row: Vec<String>, expected: usize, line: u64) -> Result<Vec<String>> {
        let found = row.len();
        match (found.cmp(&expected), self.config.mode) {
            (Ordering::Equal, _) => Ok(row),
            (Ordering::Less, RowMode::Permissive) => {
                trace!(line, found, expected, "padding short row");
                row.resize(expected, String::new());
                Ok(row)
            }
            _ => Err(TableError::FieldCount {
                line,
                expected,
                found,
            }),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Parser {
        Parser::with_config(ParserConfig::default().with_mode(RowMode::Strict))
    }

    #[test]
    fn test_parse_csv() {
        let data = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = Parser::new().parse_reader(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), ["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value_at(0, 0).unwrap(), "Alice");
        assert_eq!(table.value_at(1, 1).unwrap(), "25");
    }

    #[test]
    fn test_parse_headers_only() {
        let table = Parser::new().parse_reader("a,b\n".as_bytes()).unwrap();
        assert_eq!(table.header_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_empty_input() {
        let result = Parser::new().parse_reader("".as_bytes());
        assert!(matches!(result, Err(TableError::EmptyData(_))));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let data = "id,note\n1,\"hello, world\"\n2,\"say \"\"hi\"\"\"\n3,\"two\nlines\"\n";
        let table = Parser::new().parse_reader(data.as_bytes()).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.value_at(0, 1).unwrap(), "hello, world");
        assert_eq!(table.value_at(1, 1).unwrap(), "say \"hi\"");
        assert_eq!(table.value_at(2, 1).unwrap(), "two\nlines");
    }

    #[test]
    fn test_permissive_pads_short_rows() {
        let data = "a,b,c\n1\n2,3\n";
        let table = Parser::new().parse_reader(data.as_bytes()).unwrap();

        assert_eq!(table.row_at(0).unwrap(), ["1", "", ""]);
        assert_eq!(table.row_at(1).unwrap(), ["2", "3", ""]);
    }

    #[test]
    fn test_permissive_rejects_long_rows() {
        let data = "a,b\n1,2\n3,4,5\n";
        let err = Parser::new().parse_reader(data.as_bytes()).unwrap_err();

        match err {
            TableError::FieldCount {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_rejects_short_rows() {
        let err = strict().parse_reader("a,b\n1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::FieldCount { found: 1, .. }));
    }

    #[test]
    fn test_strict_accepts_exact_rows() {
        let table = strict().parse_reader("a,b\n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_tab_delimiter() {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter(b'\t'));
        let table = parser.parse_reader("a\tb\n1\t2\n".as_bytes()).unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
        assert_eq!(table.row_at(0).unwrap(), ["1", "2"]);
    }

    #[test]
    fn test_invalid_utf8_is_csv_error() {
        let data: &[u8] = b"a,b\n1,\xff\n";
        let err = Parser::new().parse_reader(data).unwrap_err();
        assert!(matches!(err, TableError::Csv(_)));
    }

    #[test]
    fn test_leading_bom_dropped() {
        let data: &[u8] = b"\xEF\xBB\xBFa,b\n1,2\n";
        let table = Parser::new().parse_reader(data).unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
    }

    #[test]
    fn test_only_first_bom_dropped() {
        let data: &[u8] = b"\xEF\xBB\xBF\xEF\xBB\xBFa,b\n1,2\n";
        let table = Parser::new().parse_reader(data).unwrap();
        assert_eq!(table.header_at(0).unwrap(), "\u{feff}a");
        assert_eq!(table.header_at(1).unwrap(), "b");
    }
}
