//! csvtable CLI - inspect and edit CSV tables.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { file, json } => commands::info::run(file, json, &cli.format),

        Commands::Get { file, row, column } => commands::get::run(file, row, column, &cli.format),

        Commands::Find {
            file,
            column,
            value,
            json,
        } => commands::find::run(file, column, value, json, &cli.format),

        Commands::Set {
            file,
            row,
            column,
            value,
            output,
        } => commands::set::run(file, row, column, value, output, &cli.format),

        Commands::Concat { files, output } => commands::concat::run(files, output, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
