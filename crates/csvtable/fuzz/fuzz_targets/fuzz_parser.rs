//! Fuzz target for the table parser.
//!
//! Checks that loading:
//! 1. Never panics on malformed input
//! 2. Always yields rows exactly as wide as the headers
//! 3. Survives a write/reload cycle unchanged

#![no_main]

use libfuzzer_sys::fuzz_target;
use csvtable::Table;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(mut temp_file) = tempfile::NamedTempFile::new() else {
        return;
    };
    if temp_file.write_all(data).is_err() {
        return;
    }

    let Ok(table) = Table::from_path(temp_file.path()) else {
        return;
    };

    for row in table.rows() {
        assert_eq!(row.len(), table.header_count());
    }

    if let Ok(text) = table.to_csv_string() {
        let reloaded = Table::from_reader(text.as_bytes()).expect("written table must reload");
        assert_eq!(reloaded, table);
    }
});
