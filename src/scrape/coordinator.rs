//! Scrape coordinator - concurrent page dispatch
//!
//! This module contains the dispatch loop that:
//! - Spawns one task per page number `1..=pages`
//! - Bounds concurrency to a fixed number of workers
//! - Collects page results in completion order
//! - Absorbs failed fetches and panicked tasks as empty pages

use crate::config::SiteConfig;
use crate::output::Record;
use crate::scrape::fetcher::fetch_page;
use crate::scrape::parser::parse_page;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fetches and parses a single page
///
/// A fetch failure is logged and yields an empty list; it is never returned
/// to the caller.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `page` - 1-based page number substituted into the site's base URL
/// * `site` - The compiled site configuration
pub async fn scrape_page(client: &Client, page: u32, site: &SiteConfig) -> Vec<Record> {
    let url = site.page_url(page);
    tracing::debug!("Fetching page {}: {}", page, url);

    match fetch_page(client, &url).await {
        Ok(body) => {
            let records = parse_page(&body, site);
            tracing::debug!("Page {} yielded {} records", page, records.len());
            records
        }
        Err(e) => {
            tracing::error!("{}", e);
            Vec::new()
        }
    }
}

/// Main dispatch structure
///
/// Owns the shared HTTP client and the read-only site configuration that
/// every page task borrows.
pub struct Coordinator {
    client: Client,
    site: Arc<SiteConfig>,
    workers: usize,
}

impl Coordinator {
    /// Creates a new coordinator
    ///
    /// A worker count of zero is treated as one.
    pub fn new(client: Client, site: SiteConfig, workers: usize) -> Self {
        Self {
            client,
            site: Arc::new(site),
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scrapes pages `1..=pages` and returns every record collected
    ///
    /// Records within a page keep document order; pages are appended in the
    /// order their tasks finish. Returns only after every task has finished.
    pub async fn run(&self, pages: u32) -> Vec<Record> {
        dispatch(pages, self.workers, |page| {
            let client = self.client.clone();
            let site = Arc::clone(&self.site);
            async move { scrape_page(&client, page, &site).await }
        })
        .await
    }
}

/// Spawns `scrape(page)` for every page in `1..=pages`, at most `workers`
/// at a time, and drains results in completion order
///
/// A task that panics is logged and counted; its page contributes nothing
/// and the remaining tasks keep running.
pub(crate) async fn dispatch<F, Fut>(pages: u32, workers: usize, scrape: F) -> Vec<Record>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Vec<Record>> + Send + 'static,
{
    let start_time = Instant::now();
    let permits = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = JoinSet::new();

    for page in 1..=pages {
        let permits = Arc::clone(&permits);
        let page_task = scrape(page);

        tasks.spawn(async move {
            // acquire fails only on a closed semaphore
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (page, Vec::new()),
            };
            (page, page_task.await)
        });
    }

    let mut records = Vec::new();
    let mut empty_pages = 0usize;
    let mut failed_tasks = 0usize;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((page, page_records)) => {
                if page_records.is_empty() {
                    empty_pages += 1;
                    tracing::debug!("Page {} contributed no records", page);
                }
                records.extend(page_records);
            }
            Err(e) => {
                failed_tasks += 1;
                tracing::error!("Page task failed: {}", e);
            }
        }
    }

    tracing::info!(
        "Collected {} records from {} pages ({} empty, {} failed tasks) in {:.2}s",
        records.len(),
        pages,
        empty_pages,
        failed_tasks,
        start_time.elapsed().as_secs_f64()
    );

    records
}

/// Runs a complete scrape with the given worker count
///
/// Convenience wrapper over [`Coordinator`].
///
/// # Arguments
///
/// * `client` - The HTTP client shared by all page tasks
/// * `pages` - Number of pages to fetch, starting at 1
/// * `workers` - Maximum number of pages fetched at once
/// * `site` - The compiled site configuration
pub async fn run_all(client: Client, pages: u32, workers: usize, site: SiteConfig) -> Vec<Record> {
    Coordinator::new(client, site, workers).run(pages).await
}
