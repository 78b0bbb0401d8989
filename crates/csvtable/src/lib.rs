//! csvtable: in-memory CSV tables.
//!
//! A [`Table`] is a header row plus data rows of text cells. Tables are
//! loaded from CSV, queried by header name or position, searched by cell
//! value, edited in place, concatenated with compatible tables and written
//! back out.
//!
//! # Example
//!
//! ```no_run
//! use csvtable::Table;
//!
//! let mut table = Table::from_path("people.csv").unwrap();
//! if let Some((_, row)) = table.find_by_header("name", "alice") {
//!     let col = table.header_index("email").unwrap();
//!     table.set_value_at(row, col, "alice@example.com").unwrap();
//! }
//! table.write_file("people.csv").unwrap();
//! ```

pub mod error;
pub mod input;
pub mod output;

mod table;

pub use error::{Result, TableError};
pub use input::{Parser, ParserConfig, RowMode};
pub use output::{QuoteStyle, Writer, WriterConfig};
pub use table::Table;
