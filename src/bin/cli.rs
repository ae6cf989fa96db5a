//! Supplier Scout CLI
//!
//! One-shot lookup of shoe material suppliers and warehouses in
//! Bucharest from OpenStreetMap data.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use supplier_scout::{error::Result, models::Config, pipeline, services::OverpassClient};

/// supplier-scout - Bucharest shoe material supplier lookup
#[derive(Parser, Debug)]
#[command(
    name = "supplier-scout",
    version,
    about = "Find shoe material suppliers in Bucharest via OpenStreetMap"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "supplier-scout.toml")]
    config: PathBuf,

    /// Override the output CSV path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress the console report (diagnostic logging is unaffected)
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, classify, display, and save suppliers (default)
    Run,

    /// Validate the configuration file
    Validate,

    /// Print the embedded Overpass QL query
    Query,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    if let Some(path) = cli.output {
        config.output.csv_path = path;
    }
    if cli.quiet {
        config.output.console_enabled = false;
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            pipeline::run(&config)?;
        }
        Command::Validate => pipeline::run_validate(&config)?,
        Command::Query => println!("{}", OverpassClient::query()),
    }

    Ok(())
}
