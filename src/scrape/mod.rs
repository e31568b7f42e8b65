//! Scrape module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of individual pages
//! - Selector-driven record extraction
//! - Concurrent dispatch of page tasks across a bounded worker pool

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_all, scrape_page, Coordinator};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{extract_record, parse_page};

use crate::config::Config;
use crate::output::Record;
use crate::ScrapeError;

/// Scrapes the named site using the pages, workers and HTTP settings in `config`
///
/// This is the main entry point for a run. Only setup can fail (unknown
/// site, bad selectors, client construction); page-level failures degrade
/// to fewer records.
///
/// # Returns
///
/// * `Ok(Vec<Record>)` - Records from every page, in completion order
/// * `Err(ScrapeError)` - The run could not be set up
pub async fn scrape(config: &Config, site_name: &str) -> Result<Vec<Record>, ScrapeError> {
    let site = config.site(site_name)?;
    let client = build_http_client(&config.http)?;

    tracing::info!(
        "Scraping {} pages of '{}' with {} workers",
        config.scraper.pages,
        site_name,
        config.scraper.workers
    );

    Ok(run_all(client, config.scraper.pages, config.scraper.workers, site).await)
}
