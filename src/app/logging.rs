//! Run summary logging.

use log::info;

use crate::run::LookupReport;

/// Logs a one-line summary of a finished lookup run.
pub fn log_summary(report: &LookupReport) {
    let rate = if report.elapsed_seconds > 0.0 {
        report.total_queries as f64 / report.elapsed_seconds
    } else {
        0.0
    };
    info!(
        "Processed {} quer{} ({} records) in {:.2} seconds (~{:.2} queries/sec)",
        report.total_queries,
        if report.total_queries == 1 { "y" } else { "ies" },
        report.total_records,
        report.elapsed_seconds,
        rate
    );
}
