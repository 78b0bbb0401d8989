//! Serializing tables back to delimited text.

mod writer;

pub use writer::{QuoteStyle, Writer, WriterConfig};
