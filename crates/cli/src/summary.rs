//! Terminal output.

use std::fmt::Write;

use truckload_core::{Error, PackingReport, Result};
use truckload_loader::RowPattern;

/// Serializes a report as JSON.
pub fn render_report(report: &PackingReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| Error::SerializationError(e.to_string()))
}

/// One-line description of a report.
pub fn summary_line(report: &PackingReport) -> String {
    let mut line = format!(
        "placed {}/{} boxes ({} floor, {} stacked), utilization {}",
        report.total_placed,
        report.total_requested,
        report.floor_count,
        report.stacked_count,
        report.utilization_percent()
    );
    if report.not_placed > 0 {
        let _ = write!(line, ", {} not placed", report.not_placed);
    }
    line
}

/// Table of the standard row patterns in filler priority order.
pub fn pattern_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:>8}{:>10}{:>10}{:>6}",
        "code", "depth", "american", "european", "full"
    );
    let _ = writeln!(out, "{:-<40}", "");
    for pattern in RowPattern::FILLER_PRIORITY {
        let _ = writeln!(
            out,
            "{:<6}{:>8.1}{:>10}{:>10}{:>6}",
            pattern.code(),
            pattern.depth(),
            pattern.american(),
            pattern.european(),
            if pattern.is_full() { "yes" } else { "no" }
        );
    }
    out
}
