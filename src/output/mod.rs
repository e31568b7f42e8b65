//! Output module for scraped records
//!
//! This module handles:
//! - The record types produced by the page parser
//! - Printing records and run timing in a human-readable form

mod record;
mod report;

pub use record::{BookRecord, QuoteRecord, Record};
pub use report::{format_elapsed, print_report, write_report};
