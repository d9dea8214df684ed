//! Whole-text comparison: pair lines, diff the ones that differ, build a report.

pub mod report;

use crate::domain::{DiffOptions, DiffResult};
use crate::infra::diff::{compute_line_pairs, diff_pair};

pub use report::{IDENTICAL_MESSAGE, Report, ReportEntry, ReportRow, format_report, line_label};

/// Diffs every positional line pair whose two sides differ.
pub fn compare_texts(source: &str, target: &str, options: &DiffOptions) -> Vec<DiffResult> {
    let pairs = compute_line_pairs(source, target);
    let results: Vec<DiffResult> = pairs
        .iter()
        .filter_map(|pair| diff_pair(pair, options))
        .collect();

    log::debug!(
        "Compared {} line pairs ({}), {} differ",
        pairs.len(),
        options.mode,
        results.len()
    );
    results
}

/// [`compare_texts`] followed by [`format_report`].
pub fn compare_report(source: &str, target: &str, options: &DiffOptions) -> Report {
    format_report(compare_texts(source, target, options))
}
