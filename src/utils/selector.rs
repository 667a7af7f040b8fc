//! CSS selector parsing utilities.

use scraper::Selector;

/// Selector that can never match, used when a selector string is rejected.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches
/// nothing, so extraction degrades to "no results" instead of panicking.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "results table")
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    match Selector::parse(selector_str) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' for {}: {}. Using fallback selector.",
                selector_str,
                context,
                e
            );
            match Selector::parse(MATCH_NOTHING) {
                Ok(selector) => selector,
                // `*:not(*)` is a fixed, valid selector
                Err(_) => unreachable!("fallback selector failed to parse"),
            }
        }
    }
}
