//! Configuration constants.
//!
//! This module defines the fixed values the lookup pipeline depends on: the
//! search endpoint, the marker that identifies the results table, and HTTP
//! client defaults.

/// Search endpoint of the WHOIS history site.
///
/// The search type becomes the query-parameter name, e.g.
/// `https://www.whoxy.com/search.php?keyword=example`.
pub const DEFAULT_BASE_URL: &str = "https://www.whoxy.com/search.php";

/// Substring of the `class` attribute carried by the results table.
///
/// The site renders results as `<table class="grid first_col_center ...">`.
/// Matching is a plain substring test, so extra classes are tolerated.
pub const RESULTS_TABLE_MARKER: &str = "grid first_col_center";

/// Number of leading `<td>` cells mapped onto record fields.
/// Cells past this position are ignored.
pub const MAX_RECORD_CELLS: usize = 6;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Width the version line is right-aligned to under the banner.
pub const BANNER_VERSION_WIDTH: usize = 70;
