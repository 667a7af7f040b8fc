//! Cell text and number helpers.

use scraper::ElementRef;

/// Returns the text content of a table cell.
///
/// All descendant text nodes are concatenated in document order with no
/// separator, then the result is trimmed. Whitespace survives between
/// fragments only where the markup literally contains it:
/// `<b>Acme</b> Inc` gives `"Acme Inc"`, `<b>Acme</b>Inc` gives `"AcmeInc"`.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Best-effort parse of a leading integer.
///
/// Skips leading whitespace, accepts an optional sign, then reads ASCII
/// digits up to the first non-digit. Text without a leading integer, or one
/// that overflows `i64`, yields 0.
pub fn parse_leading_int(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    let parsed = if negative {
        format!("-{}", digits).parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}
