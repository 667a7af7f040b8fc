//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for search requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - A request timeout, only when `timeout_seconds` is set; otherwise the
///   client's own defaults apply
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_without_timeout() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout() {
        let config = Config {
            timeout_seconds: Some(3),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
