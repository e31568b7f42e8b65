use crate::config::types::{
    BooksDefinition, BooksSite, Config, FieldSelector, QuotesDefinition, QuotesSite,
    ScraperConfig, SiteConfig, SiteDefinition, PAGE_PLACEHOLDER,
};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;

    if config.sites.is_empty() {
        return Err(ConfigError::Validation(
            "at least one site must be configured".to_string(),
        ));
    }

    for (name, site) in &config.sites {
        SiteConfig::compile(site).map_err(|e| match e {
            ConfigError::Validation(msg) => {
                ConfigError::Validation(format!("site '{}': {}", name, msg))
            }
            other => other,
        })?;
    }

    Ok(())
}

/// Validates dispatch configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    if config.workers < 1 {
        return Err(ConfigError::Validation(format!(
            "workers must be >= 1, got {}",
            config.workers
        )));
    }

    Ok(())
}

impl SiteConfig {
    /// Compiles a raw site definition, checking its URL template and selectors
    pub fn compile(definition: &SiteDefinition) -> Result<Self, ConfigError> {
        validate_base_url(definition.base_url())?;

        match definition {
            SiteDefinition::Quotes(QuotesDefinition {
                base_url,
                item,
                title,
                author,
                tags,
            }) => Ok(SiteConfig::Quotes(QuotesSite {
                base_url: base_url.clone(),
                item: compile_selector("item", item)?,
                title: compile_selector("title", title)?,
                author: compile_selector("author", author)?,
                tags: compile_selector("tags", tags)?,
            })),
            SiteDefinition::Books(BooksDefinition {
                base_url,
                item,
                title,
                price,
                rating,
            }) => Ok(SiteConfig::Books(BooksSite {
                base_url: base_url.clone(),
                item: compile_selector("item", item)?,
                title: compile_selector("title", title)?,
                price: compile_selector("price", price)?,
                rating: compile_selector("rating", rating)?,
            })),
        }
    }
}

fn compile_selector(field: &str, selector: &str) -> Result<FieldSelector, ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector {
            field: field.to_string(),
            selector: selector.to_string(),
        });
    }

    Selector::parse(selector)
        .map(|compiled| FieldSelector::new(selector, compiled))
        .map_err(|_| ConfigError::InvalidSelector {
            field: field.to_string(),
            selector: selector.to_string(),
        })
}

/// Validates a base URL template: it must carry the page placeholder and
/// resolve to an absolute http(s) URL once a page number is substituted
fn validate_base_url(template: &str) -> Result<(), ConfigError> {
    if !template.contains(PAGE_PLACEHOLDER) {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must contain the page placeholder '{}'",
            template, PAGE_PLACEHOLDER
        )));
    }

    let sample = template.replacen(PAGE_PLACEHOLDER, "1", 1);
    let url = Url::parse(&sample)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", template, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            template
        )));
    }

    Ok(())
}
