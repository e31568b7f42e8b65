//! Plain-text report of scraped records
//!
//! Records go to standard output, one field per line with a blank line
//! between records, followed by the total elapsed time.

use crate::output::Record;
use std::io::{self, Write};
use std::time::Duration;

/// Formats a duration as seconds with exactly two decimal places
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// Writes every record and the closing timing line to `out`
///
/// # Arguments
///
/// * `out` - Destination for the report
/// * `records` - Records in the order they should be printed
/// * `elapsed` - Wall-clock time of the whole run
pub fn write_report<W: Write>(out: &mut W, records: &[Record], elapsed: Duration) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Scraping completed in {} seconds.",
        format_elapsed(elapsed)
    )?;
    out.flush()
}

/// Prints the report to standard output
pub fn print_report(records: &[Record], elapsed: Duration) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, records, elapsed)
}
