//! Search page fetching.

mod request;

use log::{debug, warn};

use crate::error_handling::LookupError;
use request::RequestHeaders;

/// Fetches a search results page and returns its body as text.
///
/// A non-success status is logged but not treated as an error: the body is
/// still returned so the caller can look for a results table in it.
///
/// # Errors
///
/// Returns `LookupError::Fetch` if the request fails in transit, and
/// `LookupError::Body` if the body cannot be read or decoded.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, LookupError> {
    debug!("GET {}", url);
    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
        .map_err(|source| LookupError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("Search request returned HTTP {} for {}", status, url);
    }

    let body = response.text().await.map_err(|source| LookupError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!("Received {} bytes from {}", body.len(), url);
    Ok(body)
}
