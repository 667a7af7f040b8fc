//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which registrant attribute a query term is matched against.
///
/// The variant name doubles as the query-parameter name of the search URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchType {
    /// Registrant company / organization
    Company,
    /// Registrant email address
    Email,
    /// Keyword contained in the domain name
    Keyword,
    /// Registrant personal name
    Name,
}

impl SearchType {
    /// Query-parameter name used by the search endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Company => "company",
            SearchType::Email => "email",
            SearchType::Keyword => "keyword",
            SearchType::Name => "name",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Look up every domain registered with a given email
/// echo "admin@example.com" | whoxysubs --search email
///
/// # Keyword search without the banner
/// cat keywords.txt | whoxysubs -s keyword --silent
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "whoxysubs",
    about = "Looks up domains in whoxy.com WHOIS history and prints them as JSON.",
    disable_version_flag = true
)]
pub struct Opt {
    /// Search type: company, email, keyword, or name
    #[arg(short = 's', long, value_enum)]
    pub search: Option<SearchType>,

    /// Silent mode (no banner)
    #[arg(long)]
    pub silent: bool,

    /// Print the version of the tool and exit
    #[arg(long)]
    pub version: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (unset: no timeout)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Search endpoint; the search type and query are appended as a query string
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use whoxysubs::{Config, SearchType};
///
/// let config = Config {
///     search: SearchType::Email,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Attribute the query terms are matched against
    pub search: SearchType,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Optional per-request timeout in seconds
    pub timeout_seconds: Option<u64>,

    /// Search endpoint
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchType::Keyword,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Builds a library config from parsed CLI options and a validated search type.
    ///
    /// The search type is passed separately because `--search` is optional at
    /// parse time (`--version` must work without it).
    pub fn from_opt(opt: Opt, search: SearchType) -> Self {
        Self {
            search,
            log_level: opt.log_level,
            log_format: opt.log_format,
            user_agent: opt.user_agent,
            timeout_seconds: opt.timeout_seconds,
            base_url: opt.base_url,
        }
    }
}
