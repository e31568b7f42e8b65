//! Configuration module for toscrape
//!
//! This module holds the built-in site selector tables and handles loading,
//! parsing, and validating optional TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use toscrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("toscrape.toml")).unwrap();
//! let site = config.site("quotes").unwrap();
//! println!("First page: {}", site.page_url(1));
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    builtin_sites, default_workers, BooksDefinition, BooksSite, Config, FieldSelector, HttpConfig,
    QuotesDefinition, QuotesSite, ScraperConfig, SiteConfig, SiteDefinition, DEFAULT_PAGES,
    PAGE_PLACEHOLDER,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
