//! HTTP fetcher implementation
//!
//! One GET per page. Any transport error or 4xx/5xx status becomes a
//! [`FetchError`]; there is no retry.

use crate::config::HttpConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by every page task
///
/// With a default [`HttpConfig`] the client keeps reqwest's stock transport
/// settings: no user agent override and no request timeout.
///
/// # Example
///
/// ```no_run
/// use toscrape::config::HttpConfig;
/// use toscrape::scrape::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - Absolute URL of the page
///
/// # Returns
///
/// * `Ok(String)` - Body of a successful (2xx after redirects) response
/// * `Err(FetchError)` - Network failure, timeout, or error status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let wrap = |source: reqwest::Error| FetchError {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(wrap)?;
    let response = response.error_for_status().map_err(wrap)?;
    response.text().await.map_err(wrap)
}
