//! Main application modules.
//!
//! This module provides the banner, search URL construction, and run summary
//! logging used by the binary and the runner.

pub mod banner;
pub mod logging;
pub mod url;

// Re-export public API
pub use banner::{print_banner, version_line, write_banner};
pub use logging::log_summary;
pub use url::{build_search_url, escape_query};
