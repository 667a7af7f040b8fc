//! Lookup runner: reads query lines, fetches each search page, and writes the
//! extracted records as JSON.

use std::io::Write;
use std::time::Instant;

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::build_search_url;
use crate::config::Config;
use crate::error_handling::{LookupError, RunError};
use crate::fetch::fetch_page;
use crate::initialization::init_client;
use crate::models::DomainRecord;
use crate::parse::extract_domain_records;

/// Results of a lookup run.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReport {
    /// Number of input lines looked up
    pub total_queries: usize,
    /// Number of records written across all queries
    pub total_records: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Renders records the way they are printed: a 2-space indented JSON array.
///
/// An empty list renders as `[]`.
pub fn render_records(query: &str, records: &[DomainRecord]) -> Result<String, LookupError> {
    serde_json::to_string_pretty(records).map_err(|source| LookupError::Serialize {
        query: query.to_string(),
        source,
    })
}

/// Looks up a single query term and returns its records.
///
/// # Errors
///
/// Returns a `LookupError` if the page cannot be fetched or decoded. A page
/// without a results table is not an error and yields an empty list.
pub async fn lookup(
    client: &reqwest::Client,
    config: &Config,
    query: &str,
) -> Result<Vec<DomainRecord>, LookupError> {
    let url = build_search_url(&config.base_url, config.search, query);
    let body = fetch_page(client, &url).await?;
    Ok(extract_domain_records(&body))
}

/// Runs lookups for every line of `input`, writing one JSON array per line to `output`.
///
/// Lines are processed strictly one at a time. Output is flushed after each
/// line, so results already written survive a later failure.
///
/// # Errors
///
/// The first failure (stdin read, fetch, body decode, JSON encode, or output
/// write) stops the run; the remaining lines are not read.
///
/// # Example
///
/// ```no_run
/// use whoxysubs::{run_lookups, Config, SearchType};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     search: SearchType::Keyword,
///     ..Default::default()
/// };
/// let input: &[u8] = b"example\n";
/// let mut out = Vec::new();
/// let report = run_lookups(&config, input, &mut out).await?;
/// println!("{} queries", report.total_queries);
/// # Ok(())
/// # }
/// ```
pub async fn run_lookups<R, W>(
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<LookupReport, RunError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let client = init_client(config)?;
    let start_time = Instant::now();
    info!("Searching whoxy by {}", config.search);

    let mut lines = input.lines();
    let mut total_queries = 0usize;
    let mut total_records = 0usize;

    while let Some(line) = lines.next_line().await.map_err(LookupError::Input)? {
        let query = line.trim();
        debug!("Looking up '{}'", query);

        let records = lookup(&client, config, query).await?;
        info!("Query '{}' returned {} records", query, records.len());

        let rendered = render_records(query, &records)?;
        writeln!(output, "{}", rendered).map_err(LookupError::Output)?;
        output.flush().map_err(LookupError::Output)?;

        total_queries += 1;
        total_records += records.len();
    }

    Ok(LookupReport {
        total_queries,
        total_records,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
