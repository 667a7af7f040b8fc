//! Error handling.
//!
//! This module provides:
//! - Initialization errors (logger, HTTP client)
//! - Lookup errors, all of which end the run
//!
//! Missing or malformed result tables are deliberately absent from these
//! types: they are reported as an empty record list.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, RunError};
