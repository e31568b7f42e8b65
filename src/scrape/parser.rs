//! HTML parser for extracting records from a listing page
//!
//! Each element matching the site's item selector is one candidate record.
//! Candidates are extracted independently: a candidate missing a field is
//! logged and skipped without affecting the rest of the page.

use crate::config::{BooksSite, FieldSelector, QuotesSite, SiteConfig};
use crate::output::{BookRecord, QuoteRecord, Record};
use crate::ExtractionError;
use scraper::{ElementRef, Html};

/// Parses a page and returns its records in document order
///
/// Zero matching containers is not an error; the result is simply empty.
///
/// # Example
///
/// ```
/// use toscrape::config::Config;
/// use toscrape::scrape::parse_page;
///
/// let site = Config::default().site("quotes").unwrap();
/// let html = r#"<div class="quote"><span class="text">Hi</span>
///     <small class="author">Ann</small><a class="tag">x</a></div>"#;
/// assert_eq!(parse_page(html, &site).len(), 1);
/// ```
pub fn parse_page(html: &str, site: &SiteConfig) -> Vec<Record> {
    let document = Html::parse_document(html);

    document
        .select(site.item_selector())
        .filter_map(|item| match extract_record(item, site) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Error parsing item: {}", e);
                None
            }
        })
        .collect()
}

/// Extracts one record from an item container
pub fn extract_record(item: ElementRef<'_>, site: &SiteConfig) -> Result<Record, ExtractionError> {
    match site {
        SiteConfig::Quotes(quotes) => extract_quote(item, quotes).map(Record::from),
        SiteConfig::Books(books) => extract_book(item, books).map(Record::from),
    }
}

fn extract_quote(item: ElementRef<'_>, site: &QuotesSite) -> Result<QuoteRecord, ExtractionError> {
    let text = element_text(select_one(item, &site.title, "title")?);
    let author = element_text(select_one(item, &site.author, "author")?);
    let tags = item.select(site.tags.selector()).map(element_text).collect();

    Ok(QuoteRecord { text, author, tags })
}

fn extract_book(item: ElementRef<'_>, site: &BooksSite) -> Result<BookRecord, ExtractionError> {
    let title = element_text(select_one(item, &site.title, "title")?);
    let price = element_text(select_one(item, &site.price, "price")?);
    let rating = rating_word(select_one(item, &site.rating, "rating")?)?;

    Ok(BookRecord {
        title,
        price,
        rating,
    })
}

/// Takes the second class token of the rating element
///
/// Listing pages mark ratings as `class="star-rating Three"`. This reads the
/// token by position, so a reordered class list yields the wrong word.
fn rating_word(element: ElementRef<'_>) -> Result<String, ExtractionError> {
    let class_list = element.value().attr("class").unwrap_or("");

    class_list
        .split_ascii_whitespace()
        .nth(1)
        .map(ToString::to_string)
        .ok_or_else(|| ExtractionError::MissingRatingClass {
            class_list: class_list.to_string(),
        })
}

fn select_one<'a>(
    item: ElementRef<'a>,
    selector: &FieldSelector,
    field: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    item.select(selector.selector())
        .next()
        .ok_or_else(|| ExtractionError::MissingElement {
            field,
            selector: selector.css().to_string(),
        })
}

// All descendant text joined as-is, trimmed only at the ends. Whitespace
// between nested nodes is kept, so `Hello <b>world</b>` reads "Hello world".
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
