//! HTTP request building.

use reqwest::header::{HeaderName, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, UPGRADE_INSECURE_REQUESTS};

/// Browser-like request headers sent with every search request.
///
/// The search site serves its results page to browsers; these headers match
/// what a desktop browser sends on top-level navigation. `Accept-Encoding` is
/// left to reqwest so the body is always decodable.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    const ACCEPT_HTML: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(ACCEPT, Self::ACCEPT_HTML)
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(HeaderName::from_static("sec-fetch-dest"), "document")
            .header(HeaderName::from_static("sec-fetch-mode"), "navigate")
            .header(HeaderName::from_static("sec-fetch-site"), "none")
            .header(UPGRADE_INSECURE_REQUESTS, "1")
            .header(CACHE_CONTROL, "max-age=0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_applied() {
        let client = reqwest::Client::new();
        let request =
            RequestHeaders::apply_to_request_builder(client.get("http://localhost/search.php"))
                .build()
                .unwrap();
        let headers = request.headers();
        assert!(headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
        assert_eq!(headers.get("sec-fetch-mode").unwrap(), "navigate");
        assert!(headers.get(reqwest::header::ACCEPT_ENCODING).is_none());
    }
}
