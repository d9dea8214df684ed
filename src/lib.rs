pub mod application;
pub mod domain;
pub mod infra;
pub mod ui;

pub use application::compare::{Report, compare_report, compare_texts, format_report};
pub use domain::{DiffOptions, DiffResult, LinePair, Mode, Span, SpanTag};
pub use infra::diff::{compute_line_pairs, diff_line, diff_line_with};
