use crate::config::types::{builtin_sites, Config, SiteConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Sites declared in the file are merged over the built-in `quotes` and
/// `books` tables; a file entry with the same name replaces the built-in.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use toscrape::config::load_config;
///
/// let config = load_config(Path::new("toscrape.toml")).unwrap();
/// println!("Pages: {}", config.scraper.pages);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses configuration from TOML text, merging built-in sites and validating
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)?;

    for (name, site) in builtin_sites() {
        config.sites.entry(name).or_insert(site);
    }

    validate(&config)?;

    Ok(config)
}

impl Config {
    /// Looks up a site by name and compiles its selectors
    pub fn site(&self, name: &str) -> Result<SiteConfig, ConfigError> {
        let definition = self
            .sites
            .get(name)
            .ok_or_else(|| ConfigError::UnknownSite {
                name: name.to_string(),
                available: self.sites.keys().cloned().collect::<Vec<_>>().join(", "),
            })?;

        SiteConfig::compile(definition)
    }
}
