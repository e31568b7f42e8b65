//! toscrape main entry point
//!
//! This is the command-line interface for the toscrape page scraper.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use toscrape::config::{load_config, validate, Config};
use toscrape::output::print_report;
use tracing_subscriber::EnvFilter;

/// toscrape: concurrent paginated page scraper
///
/// Fetches pages 1..=N of a configured site in parallel, extracts quote or
/// book records with CSS selectors, and prints them with the total run time.
#[derive(Parser, Debug)]
#[command(name = "toscrape")]
#[command(version)]
#[command(about = "Concurrent paginated page scraper", long_about = None)]
struct Cli {
    /// Site to scrape (built-in: books, quotes)
    #[arg(short, long, default_value = "books")]
    site: String,

    /// Number of pages to fetch, starting at page 1
    #[arg(short, long)]
    pages: Option<u32>,

    /// Maximum number of pages fetched at once
    #[arg(short, long)]
    workers: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let start_time = Instant::now();
    let records = toscrape::scrape(&config, &cli.site)
        .await
        .with_context(|| format!("Failed to start scraping site '{}'", cli.site))?;

    print_report(&records, start_time.elapsed()).context("Failed to write report")?;

    Ok(())
}

/// Loads the configuration file if given, then applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.scraper.pages = pages;
    }
    if let Some(workers) = cli.workers {
        config.scraper.workers = workers;
    }

    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("toscrape=warn,warn"),
            1 => EnvFilter::new("toscrape=info,warn"),
            2 => EnvFilter::new("toscrape=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
