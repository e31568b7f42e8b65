//! toscrape: a concurrent paginated page scraper
//!
//! This crate fetches a fixed range of paginated pages from a site, extracts
//! structured records (quotes or books) using a declarative selector table,
//! and prints them. Failed fetches and unparseable items are logged and
//! skipped; they never abort a run.

pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for toscrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A page could not be fetched
///
/// Covers network failures, timeouts and 4xx/5xx responses alike.
#[derive(Debug, Error)]
#[error("Error fetching {url}: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// A single item container could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no {field} element matched selector '{selector}'")]
    MissingElement {
        field: &'static str,
        selector: String,
    },

    #[error("rating element has no second class token (class list: '{class_list}')")]
    MissingRatingClass { class_list: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector for {field}: '{selector}'")]
    InvalidSelector { field: String, selector: String },

    #[error("Unknown site '{name}' (available: {available})")]
    UnknownSite { name: String, available: String },
}

/// Result type alias for toscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, SiteConfig};
pub use output::{BookRecord, QuoteRecord, Record};
pub use scrape::{run_all, scrape, Coordinator};
