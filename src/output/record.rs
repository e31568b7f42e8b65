//! Record types produced by the page parser
//!
//! Records are immutable once built and carry exactly one of the two
//! supported shapes.

use std::fmt;

/// A quote with its author and tags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteRecord {
    pub text: String,
    pub author: String,
    /// Tags in page order
    pub tags: Vec<String>,
}

/// A book listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookRecord {
    pub title: String,
    /// Price text with its currency symbol, e.g. `£51.77`
    pub price: String,
    /// Rating word taken from the rating element's class list, e.g. `Three`
    pub rating: String,
}

/// One extracted record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
    Quote(QuoteRecord),
    Book(BookRecord),
}

impl From<QuoteRecord> for Record {
    fn from(record: QuoteRecord) -> Self {
        Record::Quote(record)
    }
}

impl From<BookRecord> for Record {
    fn from(record: BookRecord) -> Self {
        Record::Book(record)
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quote: {}", self.text)?;
        writeln!(f, "Author: {}", self.author)?;
        write!(f, "Tags: {}", self.tags.join(", "))
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Price: {}", self.price)?;
        write!(f, "Rating: {}", self.rating)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Quote(quote) => quote.fmt(f),
            Record::Book(book) => book.fmt(f),
        }
    }
}
