//! HTML parsing and data extraction.
//!
//! This module turns a WHOIS history search page into domain records:
//! - Locating the results table by its class marker
//! - Walking its rows and mapping cells onto record fields by position
//! - Cell text and row-number helpers
//!
//! Parsing is done with the `scraper` crate. Every walk is iterator-based,
//! so deeply nested documents cannot exhaust the call stack.

mod table;
mod text;

use scraper::Html;

use crate::models::DomainRecord;

// Re-export public API
pub use table::{extract_table_records, find_results_table};
pub use text::{cell_text, parse_leading_int};

/// Parses a search results page and returns its domain records.
///
/// A page without the results table yields an empty list; this is how the
/// site reports "no matches" and is not treated as an error.
pub fn extract_domain_records(html: &str) -> Vec<DomainRecord> {
    let document = Html::parse_document(html);
    match find_results_table(&document) {
        Some(table) => {
            let records = extract_table_records(table);
            log::debug!("Extracted {} records from results table", records.len());
            records
        }
        None => {
            log::debug!("No results table found in page");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
