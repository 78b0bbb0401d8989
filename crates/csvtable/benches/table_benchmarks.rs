//! Table performance benchmarks.
//!
//! Measures loading, searching and writing across table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use csvtable::Table;
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate synthetic CSV data with the specified number of rows and columns.
fn generate_csv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for i in 0..cols {
        if i > 0 {
            data.push(',');
        }
        data.push_str(&format!("column_{}", i + 1));
    }
    data.push('\n');

    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push(',');
            }
            match col % 4 {
                0 => data.push_str(&format!("ID_{:06}", row)),
                1 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                2 => data.push_str(&format!("\"Name, {}\"", row % 97)),
                3 => data.push_str(&format!("Category_{}", row % 10)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark loading files of various sizes.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 8);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Table::from_path(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

/// Benchmark a worst-case search that matches the last row.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_header");

    for rows in [1_000, 10_000].iter() {
        let table = Table::from_reader(generate_csv_data(*rows, 8).as_bytes()).unwrap();
        let needle = format!("id_{:06}", rows - 1);

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(table.find_by_header("COLUMN_1", &needle)))
        });
    }

    group.finish();
}

/// Benchmark serializing tables to memory.
fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for rows in [1_000, 10_000].iter() {
        let table = Table::from_reader(generate_csv_data(*rows, 8).as_bytes()).unwrap();

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| black_box(table.to_csv_string().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_find, bench_write);
criterion_main!(benches);
