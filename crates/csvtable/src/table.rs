//! The in-memory table: a header row plus ordered data rows.

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use icu_casemap::{CaseMapper, CaseMapperBorrowed};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TableError};
use crate::input::Parser;
use crate::output::Writer;

/// Header-indexed rows of text cells.
///
/// Every row holds exactly [`header_count`](Table::header_count) cells.
/// Accessors hand out borrowed views; the only way to change a table is
/// through its `&mut self` methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers.
    ///
    /// Duplicate header names are accepted; lookups resolve to the first one.
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(TableError::InvalidArgument(
                "a table needs at least one header".to_string(),
            ));
        }

        Ok(Self {
            headers,
            rows: Vec::new(),
        })
    }

    /// Build a table from parts the caller has already validated.
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse CSV from a reader with the default parser configuration.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Parser::new().parse_reader(reader)
    }

    /// Parse a CSV file with the default parser configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Parser::new().parse_file(path)
    }

    /// Write the table to `path` as comma-separated text.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        Writer::new().write_file(self, path)
    }

    /// Render the table as comma-separated text.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        Writer::new().write_to(self, &mut buf)?;
        String::from_utf8(buf).map_err(|e| {
            TableError::InvalidArgument(format!("rendered table is not UTF-8: {}", e))
        })
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate over the data rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get row `index`, or `None` when it does not exist.
    ///
    /// Unlike the other indexed accessors this never errors.
    pub fn row_at(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get the header at position `index`.
    pub fn header_at(&self, index: usize) -> Result<&str> {
        self.headers.get(index).map(String::as_str).ok_or_else(|| {
            TableError::IndexOutOfRange(format!(
                "header index {} with {} headers",
                index,
                self.headers.len()
            ))
        })
    }

    /// Find the position of a header, ignoring case.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| eq_ignore_case(h, name))
    }

    /// Collect the values of the column named `name` (case-insensitive).
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.header_index(name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Get the cell at (`row`, `col`).
    pub fn value_at(&self, row: usize, col: usize) -> Result<&str> {
        self.check_bounds(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Overwrite the cell at (`row`, `col`).
    pub fn set_value_at(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<()> {
        self.check_bounds(row, col)?;
        self.rows[row][col] = value.into();
        Ok(())
    }

    /// Append copies of all rows of `other`.
    ///
    /// Headers must match position for position, compared case-sensitively.
    /// On mismatch nothing is appended.
    pub fn append(&mut self, other: &Table) -> Result<()> {
        if self.headers.len() != other.headers.len() {
            return Err(TableError::HeaderMismatch(format!(
                "expected {} headers, found {}",
                self.headers.len(),
                other.headers.len()
            )));
        }

        if let Some((position, (ours, theirs))) = self
            .headers
            .iter()
            .zip(&other.headers)
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return Err(TableError::HeaderMismatch(format!(
                "header {} is '{}', found '{}'",
                position, ours, theirs
            )));
        }

        self.rows.extend(other.rows.iter().cloned());
        debug!(
            appended = other.rows.len(),
            total = self.rows.len(),
            "appended rows"
        );
        Ok(())
    }

    /// Find the first row whose `name` column equals `value`, ignoring case.
    ///
    /// Returns the row and its index.
    pub fn find_by_header(&self, name: &str, value: &str) -> Option<(&[String], usize)> {
        let col = self.header_index(name)?;
        self.find_by_index(col, value)
    }

    /// Find the first row whose cell at `col` equals `value`, ignoring case.
    ///
    /// A column past the last header matches nothing.
    pub fn find_by_index(&self, col: usize, value: &str) -> Option<(&[String], usize)> {
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.get(col).is_some_and(|cell| eq_ignore_case(cell, value)))
            .map(|(i, row)| (row.as_slice(), i))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows.len() || col >= self.headers.len() {
            return Err(TableError::IndexOutOfRange(format!(
                "cell ({}, {}) with {} rows and {} headers",
                row,
                col,
                self.rows.len(),
                self.headers.len()
            )));
        }
        Ok(())
    }
}

fn case_mapper() -> &'static CaseMapperBorrowed<'static> {
    static MAPPER: OnceLock<CaseMapperBorrowed<'static>> = OnceLock::new();
    MAPPER.get_or_init(CaseMapper::new)
}

/// Equality under Unicode default case folding.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    let mapper = case_mapper();
    mapper.fold_string(a) == mapper.fold_string(b)
}
