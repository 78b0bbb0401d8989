//! Input parsing.

mod parser;

pub use parser::{Parser, ParserConfig, RowMode};
