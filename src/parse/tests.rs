// Parse module tests.

use super::*;
use scraper::{Html, Selector};

fn results_page(rows: &str) -> String {
    format!(
        r#"<html><body>
        <table class="grid first_col_center">
            <thead><tr><th>#</th><th>Domain</th><th>Registrar</th><th>Created</th><th>Updated</th><th>Expiry</th></tr></thead>
            <tbody>{}</tbody>
        </table>
        </body></html>"#,
        rows
    )
}

fn first_cell(html: &str) -> String {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse("td").unwrap();
    let cell = document.select(&selector).next().expect("fragment has a cell");
    cell_text(cell)
}

#[test]
fn test_extract_single_row() {
    let html = results_page(
        "<tr><td>1</td><td>example.com</td><td>RegistrarX</td><td>2020-01-01</td><td>2021-01-01</td><td>2022-01-01</td></tr>",
    );
    let records = extract_domain_records(&html);
    assert_eq!(
        records,
        vec![DomainRecord {
            num: 1,
            domain_name: "example.com".to_string(),
            registrar: "RegistrarX".to_string(),
            created: "2020-01-01".to_string(),
            updated: "2021-01-01".to_string(),
            expiry: "2022-01-01".to_string(),
        }]
    );
}

#[test]
fn test_extract_rows_in_document_order() {
    let rows: String = (1..=5)
        .map(|i| {
            format!(
                "<tr><td>{i}</td><td>site{i}.com</td><td>Reg</td><td>a</td><td>b</td><td>c</td></tr>"
            )
        })
        .collect();
    let records = extract_domain_records(&results_page(&rows));
    assert_eq!(records.len(), 5);
    let names: Vec<&str> = records.iter().map(|r| r.domain_name.as_str()).collect();
    assert_eq!(
        names,
        ["site1.com", "site2.com", "site3.com", "site4.com", "site5.com"]
    );
    assert_eq!(records[4].num, 5);
}

#[test]
fn test_row_with_empty_domain_is_dropped() {
    let html = results_page(
        "<tr><td>1</td><td>  </td><td>Reg</td><td>a</td><td>b</td><td>c</td></tr>\
         <tr><td>2</td><td>kept.com</td><td>Reg</td><td>a</td><td>b</td><td>c</td></tr>",
    );
    let records = extract_domain_records(&html);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].domain_name, "kept.com");
}

#[test]
fn test_row_with_single_cell_is_dropped() {
    let html = results_page("<tr><td colspan=\"6\">No more results</td></tr>");
    assert!(extract_domain_records(&html).is_empty());
}

#[test]
fn test_header_row_is_not_a_record() {
    // The <th> header row in results_page must never produce a record
    let html = results_page("");
    assert!(extract_domain_records(&html).is_empty());
}

#[test]
fn test_table_without_marker_yields_nothing() {
    let html = r#"<table class="grid"><tr><td>1</td><td>example.com</td></tr></table>"#;
    assert!(extract_domain_records(html).is_empty());
}

#[test]
fn test_page_without_table_yields_nothing() {
    assert!(extract_domain_records("<html><body><p>No results</p></body></html>").is_empty());
    assert!(extract_domain_records("").is_empty());
}

#[test]
fn test_marker_matches_as_substring() {
    let html = r#"<table class="wide grid first_col_center striped">
        <tr><td>3</td><td>extra.org</td></tr>
    </table>"#;
    let records = extract_domain_records(html);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].num, 3);
    assert_eq!(records[0].domain_name, "extra.org");
    assert_eq!(records[0].registrar, "");
}

#[test]
fn test_first_matching_table_wins() {
    let html = r#"
        <table class="grid first_col_center"><tr><td>1</td><td>first.com</td></tr></table>
        <table class="grid first_col_center"><tr><td>1</td><td>second.com</td></tr></table>"#;
    let records = extract_domain_records(html);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].domain_name, "first.com");
}

#[test]
fn test_marker_table_found_when_nested() {
    let html = r#"<div><section><div>
        <table class="layout"><tr><td>
            <table class="grid first_col_center"><tr><td>9</td><td>deep.net</td></tr></table>
        </td></tr></table>
    </div></section></div>"#;
    let document = Html::parse_document(html);
    let table = find_results_table(&document).expect("nested marker table");
    let records = extract_table_records(table);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].domain_name, "deep.net");
}

#[test]
fn test_cells_past_sixth_are_ignored() {
    let html = results_page(
        "<tr><td>1</td><td>a.com</td><td>R</td><td>c</td><td>u</td><td>e</td><td>extra</td><td>more</td></tr>",
    );
    let records = extract_domain_records(&html);
    assert_eq!(records[0].expiry, "e");
}

#[test]
fn test_only_direct_td_children_are_cells() {
    // The nested table's cells must not shift the outer row's positions
    let html = results_page(
        "<tr><td>1</td><td>outer.com<table><tr><td>x</td><td>y</td></tr></table></td><td>Reg</td></tr>",
    );
    let records = extract_domain_records(&html);
    assert_eq!(records[0].domain_name, "outer.comxy");
    assert_eq!(records[0].registrar, "Reg");
    // The nested row is itself a descendant <tr> and is collected after its parent
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].domain_name, "y");
}

#[test]
fn test_th_cells_do_not_count_as_positions() {
    let html = results_page("<tr><th>1</th><td>7</td><td>shifted.com</td></tr>");
    let records = extract_domain_records(&html);
    assert_eq!(records[0].num, 7);
    assert_eq!(records[0].domain_name, "shifted.com");
}

#[test]
fn test_non_numeric_num_defaults_to_zero() {
    let html = results_page("<tr><td>n/a</td><td>zero.com</td></tr>");
    let records = extract_domain_records(&html);
    assert_eq!(records[0].num, 0);
    assert_eq!(records[0].domain_name, "zero.com");
}

#[test]
fn test_cell_text_literal_space_survives() {
    assert_eq!(first_cell("<table><tr><td><b>Acme</b> Inc</td></tr></table>"), "Acme Inc");
}

#[test]
fn test_cell_text_no_separator_inserted() {
    assert_eq!(first_cell("<table><tr><td><b>Acme</b>Inc</td></tr></table>"), "AcmeInc");
}

#[test]
fn test_cell_text_trims_outer_whitespace() {
    assert_eq!(
        first_cell("<table><tr><td>\n   <a href=\"/x\">example.com</a>\n  </td></tr></table>"),
        "example.com"
    );
}

#[test]
fn test_cell_text_decodes_entities() {
    assert_eq!(
        first_cell("<table><tr><td>Smith &amp; Sons</td></tr></table>"),
        "Smith & Sons"
    );
}

#[test]
fn test_cell_text_empty_cell() {
    assert_eq!(first_cell("<table><tr><td></td></tr></table>"), "");
}

#[test]
fn test_parse_leading_int() {
    assert_eq!(parse_leading_int("42"), 42);
    assert_eq!(parse_leading_int("  17"), 17);
    assert_eq!(parse_leading_int("12abc"), 12);
    assert_eq!(parse_leading_int("-3"), -3);
    assert_eq!(parse_leading_int("+8"), 8);
    assert_eq!(parse_leading_int("1,234"), 1);
}

#[test]
fn test_parse_leading_int_defaults_to_zero() {
    assert_eq!(parse_leading_int(""), 0);
    assert_eq!(parse_leading_int("abc"), 0);
    assert_eq!(parse_leading_int("-"), 0);
    assert_eq!(parse_leading_int("x12"), 0);
    assert_eq!(parse_leading_int("99999999999999999999999"), 0);
}
