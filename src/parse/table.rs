//! Results table location and row extraction.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{MAX_RECORD_CELLS, RESULTS_TABLE_MARKER};
use crate::models::DomainRecord;
use crate::parse::text::{cell_text, parse_leading_int};
use crate::utils::parse_selector_with_fallback;

const ROW_SELECTOR_STR: &str = "tr";

// `*=` is a raw substring test on the attribute value, not a class-list match
static RESULTS_TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(
        &format!("table[class*=\"{}\"]", RESULTS_TABLE_MARKER),
        "results table",
    )
});

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ROW_SELECTOR_STR, "table rows"));

/// Finds the results table in a parsed page.
///
/// Returns the first `<table>`, in document order, whose `class` attribute
/// contains the results marker. Later matching tables are ignored.
pub fn find_results_table(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&RESULTS_TABLE_SELECTOR).next()
}

/// Extracts domain records from the rows of a results table.
///
/// Every `<tr>` below the table is visited in document order, whether it is
/// a direct child or sits inside `thead`/`tbody`/`tfoot` (html5ever always
/// inserts a `tbody`). Rows whose domain cell ends up empty, such as header
/// rows made of `<th>` cells, are skipped.
pub fn extract_table_records(table: ElementRef<'_>) -> Vec<DomainRecord> {
    table.select(&ROW_SELECTOR).filter_map(parse_row).collect()
}

/// Maps the direct `<td>` children of a row onto record fields by position.
fn parse_row(row: ElementRef<'_>) -> Option<DomainRecord> {
    let mut record = DomainRecord::default();

    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "td")
        .take(MAX_RECORD_CELLS);

    for (idx, cell) in cells.enumerate() {
        let text = cell_text(cell);
        match idx + 1 {
            1 => record.num = parse_leading_int(&text),
            2 => record.domain_name = text,
            3 => record.registrar = text,
            4 => record.created = text,
            5 => record.updated = text,
            6 => record.expiry = text,
            _ => {}
        }
    }

    if record.domain_name.is_empty() {
        log::trace!("Skipping row without a domain name");
        None
    } else {
        Some(record)
    }
}
