use scraper::Selector;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Placeholder in a base URL template replaced by the page number
pub const PAGE_PLACEHOLDER: &str = "{}";

/// Default number of pages fetched per run
pub const DEFAULT_PAGES: u32 = 5;

/// Main configuration structure for toscrape
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub sites: BTreeMap<String, SiteDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            http: HttpConfig::default(),
            sites: builtin_sites(),
        }
    }
}

/// Dispatch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Number of pages to fetch, starting at page 1
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Maximum number of pages fetched at the same time
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            workers: default_workers(),
        }
    }
}

fn default_pages() -> u32 {
    DEFAULT_PAGES
}

/// Default worker count: `min(32, cpus + 4)`
pub fn default_workers() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cpus + 4).min(32)
}

/// HTTP transport configuration
///
/// Both fields are unset by default, leaving the client's stock behavior
/// (no user agent header, no request timeout).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

/// Raw selector table for one site, as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SiteDefinition {
    Quotes(QuotesDefinition),
    Books(BooksDefinition),
}

impl SiteDefinition {
    pub fn base_url(&self) -> &str {
        match self {
            SiteDefinition::Quotes(q) => &q.base_url,
            SiteDefinition::Books(b) => &b.base_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuotesDefinition {
    pub base_url: String,
    pub item: String,
    pub title: String,
    pub author: String,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BooksDefinition {
    pub base_url: String,
    pub item: String,
    pub title: String,
    pub price: String,
    pub rating: String,
}

/// The two sites known without any config file
pub fn builtin_sites() -> BTreeMap<String, SiteDefinition> {
    let mut sites = BTreeMap::new();
    sites.insert(
        "quotes".to_string(),
        SiteDefinition::Quotes(QuotesDefinition {
            base_url: "http://quotes.toscrape.com/page/{}".to_string(),
            item: "div.quote".to_string(),
            title: "span.text".to_string(),
            author: "small.author".to_string(),
            tags: "a.tag".to_string(),
        }),
    );
    sites.insert(
        "books".to_string(),
        SiteDefinition::Books(BooksDefinition {
            base_url: "https://books.toscrape.com/catalogue/page-{}.html".to_string(),
            item: "article.product_pod".to_string(),
            title: "h3 a".to_string(),
            price: "p.price_color".to_string(),
            rating: "p.star-rating".to_string(),
        }),
    );
    sites
}

/// A compiled, immutable site configuration
///
/// The variant decides which record shape the parser produces. Instances
/// are built once by [`SiteConfig::compile`] and shared read-only between
/// all page tasks.
#[derive(Debug, Clone)]
pub enum SiteConfig {
    Quotes(QuotesSite),
    Books(BooksSite),
}

#[derive(Debug, Clone)]
pub struct QuotesSite {
    pub base_url: String,
    pub item: FieldSelector,
    pub title: FieldSelector,
    pub author: FieldSelector,
    pub tags: FieldSelector,
}

#[derive(Debug, Clone)]
pub struct BooksSite {
    pub base_url: String,
    pub item: FieldSelector,
    pub title: FieldSelector,
    pub price: FieldSelector,
    pub rating: FieldSelector,
}

/// A compiled selector together with the text it was parsed from
#[derive(Debug, Clone)]
pub struct FieldSelector {
    css: String,
    selector: Selector,
}

impl FieldSelector {
    pub(crate) fn new(css: &str, selector: Selector) -> Self {
        Self {
            css: css.to_string(),
            selector,
        }
    }

    /// The selector as written in the site definition
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl SiteConfig {
    pub fn base_url(&self) -> &str {
        match self {
            SiteConfig::Quotes(q) => &q.base_url,
            SiteConfig::Books(b) => &b.base_url,
        }
    }

    /// Selector matching each repeated item container
    pub fn item_selector(&self) -> &Selector {
        match self {
            SiteConfig::Quotes(q) => q.item.selector(),
            SiteConfig::Books(b) => b.item.selector(),
        }
    }

    /// Builds the URL of a 1-based page number
    pub fn page_url(&self, page: u32) -> String {
        self.base_url().replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
    }
}
