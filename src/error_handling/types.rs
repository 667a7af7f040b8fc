//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that abort a lookup run.
///
/// Every variant is fatal: the runner stops at the first one and the
/// remaining input lines are not read. A page without a results table is
/// not an error; it produces an empty result list.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The HTTP request could not be sent or no response arrived.
    #[error("Failed to fetch data from {url}: {source}")]
    Fetch {
        /// Search URL that was requested
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The response body could not be read or decoded as text.
    #[error("Failed to parse HTML from {url}: {source}")]
    Body {
        /// Search URL that was requested
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The extracted records could not be rendered as JSON.
    #[error("Failed to convert data to JSON for query '{query}': {source}")]
    Serialize {
        /// Query term whose records were being rendered
        query: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the next query line failed.
    #[error("Error reading input: {0}")]
    Input(#[source] std::io::Error),

    /// Writing results to the output stream failed.
    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),
}

/// Errors that end a run before or during lookups.
#[derive(Error, Debug)]
pub enum RunError {
    /// Shared resources could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// A lookup failed; no further lines are processed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
