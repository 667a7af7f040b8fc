//! Search URL construction.

use url::form_urlencoded;

use crate::config::SearchType;

/// Escapes a query term for use as a query-string value.
///
/// Uses `application/x-www-form-urlencoded` rules: spaces become `+` and
/// every byte outside the unreserved set is percent-encoded.
pub fn escape_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Builds the search URL for one query line.
///
/// The line is trimmed and escaped, then appended to `base_url` as
/// `<search type>=<query>`. An empty line still yields a URL (with an empty
/// value), exactly as it is sent.
///
/// # Examples
///
/// ```
/// use whoxysubs::{build_search_url, SearchType};
///
/// let url = build_search_url("https://www.whoxy.com/search.php", SearchType::Company, " Acme Corp ");
/// assert_eq!(url, "https://www.whoxy.com/search.php?company=Acme+Corp");
/// ```
pub fn build_search_url(base_url: &str, search: SearchType, query: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        base_url,
        separator,
        search.as_str(),
        escape_query(query.trim())
    )
}
