//! whoxysubs library: WHOIS history lookups against whoxy.com
//!
//! This library builds whoxy.com search URLs from query terms (company, email,
//! keyword, or registrant name), fetches the results page, and extracts the
//! listed domains from its results table.
//!
//! # Example
//!
//! ```no_run
//! use whoxysubs::{run_lookups, Config, SearchType};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     search: SearchType::Company,
//!     ..Default::default()
//! };
//!
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! let report = run_lookups(&config, stdin, &mut std::io::stdout()).await?;
//! eprintln!("Looked up {} terms", report.total_queries);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod run;
mod utils;

// Re-export public API
pub use app::build_search_url;
pub use config::{Config, LogFormat, LogLevel, Opt, SearchType};
pub use error_handling::{InitializationError, LookupError, RunError};
pub use models::DomainRecord;
pub use parse::extract_domain_records;
pub use run::{lookup, render_records, run_lookups, LookupReport};
