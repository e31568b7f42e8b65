//! Integration tests for the scraper
//!
//! These tests use wiremock to serve listing pages and exercise the full
//! fetch, parse and dispatch cycle end-to-end.

use std::time::Duration;
use toscrape::config::{
    BooksDefinition, Config, HttpConfig, QuotesDefinition, SiteConfig, SiteDefinition,
};
use toscrape::scrape::{build_http_client, fetch_page, run_all, scrape_page};
use toscrape::{BookRecord, ConfigError, Record, ScrapeError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn books_definition(base: &str) -> SiteDefinition {
    SiteDefinition::Books(BooksDefinition {
        base_url: format!("{}/catalogue/page-{{}}.html", base),
        item: "article.product_pod".to_string(),
        title: "h3 a".to_string(),
        price: "p.price_color".to_string(),
        rating: "p.star-rating".to_string(),
    })
}

fn books_site(base: &str) -> SiteConfig {
    SiteConfig::compile(&books_definition(base)).expect("Failed to compile books site")
}

fn client() -> reqwest::Client {
    build_http_client(&HttpConfig::default()).expect("Failed to build client")
}

/// Renders a listing page with one article per (title, price, rating)
fn books_page(books: &[(&str, &str, &str)]) -> String {
    let articles: String = books
        .iter()
        .map(|(title, price, rating)| {
            format!(
                r#"<li><article class="product_pod">
                    <h3><a href="{title}.html" title="{title}">{title}</a></h3>
                    <div class="product_price"><p class="price_color">{price}</p></div>
                    <p class="star-rating {rating}"><i class="icon-star"></i></p>
                </article></li>"#
            )
        })
        .collect();

    format!("<html><body><ol class=\"row\">{}</ol></body></html>", articles)
}

async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/catalogue/page-{}.html", page)))
        .respond_with(response)
        .mount(server)
        .await;
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html")
}

fn sorted_lines(records: &[Record]) -> Vec<String> {
    let mut lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    lines.sort();
    lines
}

fn book(title: &str, price: &str, rating: &str) -> Record {
    Record::Book(BookRecord {
        title: title.to_string(),
        price: price.to_string(),
        rating: rating.to_string(),
    })
}

#[tokio::test]
async fn test_run_all_collects_every_page() {
    let mock_server = MockServer::start().await;

    for page in 1..=3u32 {
        let first = format!("P{}A", page);
        let second = format!("P{}B", page);
        mount_page(
            &mock_server,
            page,
            html(books_page(&[
                (first.as_str(), "£10.00", "One"),
                (second.as_str(), "£20.00", "Two"),
            ])),
        )
        .await;
    }

    let records = run_all(client(), 3, 2, books_site(&mock_server.uri())).await;

    assert_eq!(records.len(), 6);

    let mut expected = Vec::new();
    for page in 1..=3 {
        expected.push(book(&format!("P{}A", page), "£10.00", "One"));
        expected.push(book(&format!("P{}B", page), "£20.00", "Two"));
    }
    assert_eq!(sorted_lines(&records), sorted_lines(&expected));
}

#[tokio::test]
async fn test_records_within_page_keep_document_order() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        1,
        html(books_page(&[
            ("A", "£10.00", "Three"),
            ("B", "£20.00", "Five"),
        ])),
    )
    .await;

    let records = scrape_page(&client(), 1, &books_site(&mock_server.uri())).await;

    assert_eq!(
        records,
        vec![book("A", "£10.00", "Three"), book("B", "£20.00", "Five")]
    );
}

#[tokio::test]
async fn test_http_error_pages_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, html(books_page(&[("Kept", "£1.00", "One")]))).await;
    mount_page(&mock_server, 2, ResponseTemplate::new(404)).await;
    mount_page(&mock_server, 3, ResponseTemplate::new(500)).await;
    mount_page(&mock_server, 4, html(books_page(&[("Also", "£4.00", "Four")]))).await;

    let records = run_all(client(), 4, 4, books_site(&mock_server.uri())).await;

    assert_eq!(
        sorted_lines(&records),
        sorted_lines(&[book("Also", "£4.00", "Four"), book("Kept", "£1.00", "One")])
    );
}

#[tokio::test]
async fn test_malformed_page_contributes_nothing() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, 1, html(books_page(&[("Good", "£5.00", "Two")]))).await;
    mount_page(
        &mock_server,
        2,
        html("<html><body><div>maintenance</div>".to_string()),
    )
    .await;

    let records = run_all(client(), 2, 2, books_site(&mock_server.uri())).await;

    assert_eq!(records, vec![book("Good", "£5.00", "Two")]);
}

#[tokio::test]
async fn test_results_arrive_in_completion_order() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        1,
        html(books_page(&[("Slow", "£1.00", "One")])).set_delay(Duration::from_millis(500)),
    )
    .await;
    mount_page(&mock_server, 2, html(books_page(&[("Fast", "£2.00", "Two")]))).await;

    let records = run_all(client(), 2, 2, books_site(&mock_server.uri())).await;

    assert_eq!(
        records,
        vec![book("Fast", "£2.00", "Two"), book("Slow", "£1.00", "One")]
    );
}

#[tokio::test]
async fn test_single_worker_still_fetches_all_pages() {
    let mock_server = MockServer::start().await;

    for page in 1..=5u32 {
        let title = format!("Book {}", page);
        mount_page(&mock_server, page, html(books_page(&[(title.as_str(), "£9.99", "Four")]))).await;
    }

    let records = run_all(client(), 5, 1, books_site(&mock_server.uri())).await;

    assert_eq!(records.len(), 5);
}

#[tokio::test]
async fn test_quotes_site_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page/1"))
        .respond_with(html(
            r#"<html><body>
              <div class="quote">
                <span class="text">Hello</span>
                <span>by <small class="author">Jane</small></span>
                <div class="tags"><a class="tag">life</a><a class="tag">wisdom</a></div>
              </div>
            </body></html>"#
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.scraper.pages = 2;
    config.scraper.workers = 2;
    config.sites.insert(
        "local-quotes".to_string(),
        SiteDefinition::Quotes(QuotesDefinition {
            base_url: format!("{}/page/{{}}", mock_server.uri()),
            item: "div.quote".to_string(),
            title: "span.text".to_string(),
            author: "small.author".to_string(),
            tags: "a.tag".to_string(),
        }),
    );

    let records = toscrape::scrape(&config, "local-quotes").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].to_string(),
        "Quote: Hello\nAuthor: Jane\nTags: life, wisdom"
    );
}

#[tokio::test]
async fn test_scrape_unknown_site_is_setup_error() {
    let result = toscrape::scrape(&Config::default(), "movies").await;

    assert!(matches!(
        result,
        Err(ScrapeError::Config(ConfigError::UnknownSite { .. }))
    ));
}

#[tokio::test]
async fn test_fetch_page_reports_status_failure() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 7, ResponseTemplate::new(503)).await;

    let url = format!("{}/catalogue/page-7.html", mock_server.uri());
    let err = fetch_page(&client(), &url).await.unwrap_err();

    assert_eq!(err.url, url);
    assert!(err.to_string().starts_with(&format!("Error fetching {}: ", url)));
    assert!(err.to_string().contains("503"));
}
