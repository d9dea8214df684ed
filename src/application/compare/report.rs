use serde::Serialize;

use crate::domain::{DiffResult, Side, Span};

/// Notice shown in place of per-line output when no line pair differs.
pub const IDENTICAL_MESSAGE: &str = "No differences detected – the texts are identical.";

/// One labelled row of a report, e.g. `Line 3 (Target): ` followed by spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub side: Side,
    pub label: String,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub line_number: usize,
    pub source: ReportRow,
    pub target: ReportRow,
}

impl ReportEntry {
    pub fn rows(&self) -> [&ReportRow; 2] {
        [&self.source, &self.target]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum Report {
    Identical,
    Differences(Vec<ReportEntry>),
}

impl Report {
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }

    pub fn entries(&self) -> &[ReportEntry] {
        match self {
            Self::Identical => &[],
            Self::Differences(entries) => entries,
        }
    }
}

pub fn line_label(line_number: usize, side: Side) -> String {
    format!("Line {line_number} ({side}): ")
}

/// Turns per-line results into renderable rows, ordered by line number.
pub fn format_report(results: impl IntoIterator<Item = DiffResult>) -> Report {
    let mut entries: Vec<ReportEntry> = results
        .into_iter()
        .map(|result| ReportEntry {
            line_number: result.line_number,
            source: ReportRow {
                side: Side::Source,
                label: line_label(result.line_number, Side::Source),
                spans: result.source,
            },
            target: ReportRow {
                side: Side::Target,
                label: line_label(result.line_number, Side::Target),
                spans: result.target,
            },
        })
        .collect();

    if entries.is_empty() {
        return Report::Identical;
    }
    entries.sort_by_key(|entry| entry.line_number);
    Report::Differences(entries)
}
