//! Paints a comparison report for a terminal.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};

use super::theme::AppTheme;
use crate::application::compare::{IDENTICAL_MESSAGE, Report, ReportRow};

/// Renders `report` as text, one row per line and a blank line between
/// entries. With `color` off no escape sequences are emitted.
pub fn render_report(report: &Report, theme: &AppTheme, color: bool) -> String {
    let mut out = String::new();
    match report {
        Report::Identical => {
            paint(&mut out, IDENTICAL_MESSAGE, theme.identical_style(), color);
            out.push('\n');
        }
        Report::Differences(entries) => {
            for (idx, entry) in entries.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                for row in entry.rows() {
                    render_row(&mut out, row, theme, color);
                }
            }
        }
    }
    out
}

pub fn render_row(out: &mut String, row: &ReportRow, theme: &AppTheme, color: bool) {
    paint(out, &row.label, theme.header_style(), color);
    for span in row.spans.iter().filter(|span| !span.text.is_empty()) {
        paint(out, &span.text, theme.span_style(row.side, span.tag), color);
    }
    out.push('\n');
}

fn paint(out: &mut String, text: &str, style: Style, color: bool) {
    if color {
        let _ = write!(out, "{}", text.style(style));
    } else {
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::compare::compare_report;
    use crate::domain::{DiffOptions, Mode};

    #[test]
    fn test_plain_rendering_of_differences() {
        let report = compare_report(
            "hello\nsame\nx",
            "hullo\nsame\ny",
            &DiffOptions::default(),
        );
        let text = render_report(&report, &AppTheme::dark(), false);
        assert_eq!(
            text,
            "Line 1 (Source): hello\nLine 1 (Target): hullo\n\n\
             Line 3 (Source): x\nLine 3 (Target): y\n"
        );
    }

    #[test]
    fn test_plain_rendering_of_identical() {
        let text = render_report(&Report::Identical, &AppTheme::light(), false);
        assert_eq!(text, format!("{IDENTICAL_MESSAGE}\n"));
    }

    #[test]
    fn test_colored_rendering_uses_escapes() {
        let report = compare_report("ab", "ac", &DiffOptions::with_mode(Mode::Positional));
        let text = render_report(&report, &AppTheme::dark(), true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("Line 1 (Source): "));
        // red for the replaced source char
        assert!(text.contains("255;77;79"));
    }
}
