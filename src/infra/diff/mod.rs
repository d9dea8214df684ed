//! Line and character level diff engine.
//!
//! Everything here is a pure function over the provided strings. Text is
//! handled as a sequence of `char`s so multi-byte characters are never split.

pub mod matcher;
pub mod opcodes;

use similar::DiffTag;

use crate::domain::{DiffOptions, DiffResult, LinePair, Mode, Span, SpanTag};
use opcodes::compute_opcodes;

pub use matcher::{Match, SequenceMatcher};
pub use opcodes::Opcode;

/// Splits on `\n` only. A trailing `\n` does not open an extra empty line and
/// `\r` is kept as part of the line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n').collect()
}

/// Zips the lines of both texts by position, padding the shorter side.
pub fn compute_line_pairs<'a>(source: &'a str, target: &'a str) -> Vec<LinePair<'a>> {
    let source_lines = split_lines(source);
    let target_lines = split_lines(target);
    let count = source_lines.len().max(target_lines.len());

    (0..count)
        .map(|idx| LinePair {
            number: idx + 1,
            source: source_lines.get(idx).copied(),
            target: target_lines.get(idx).copied(),
        })
        .collect()
}

/// Diffs two lines with the default algorithm for `mode`.
pub fn diff_line(line_a: &str, line_b: &str, mode: Mode) -> (Vec<Span>, Vec<Span>) {
    diff_line_with(line_a, line_b, &DiffOptions::with_mode(mode))
}

pub fn diff_line_with(line_a: &str, line_b: &str, options: &DiffOptions) -> (Vec<Span>, Vec<Span>) {
    match options.mode {
        Mode::Positional => positional_spans(line_a, line_b),
        Mode::LcsEqualPlain | Mode::LcsAllColored => opcode_spans(line_a, line_b, options),
    }
}

/// Runs the diff for a pair, or returns `None` when both lines are equal.
pub fn diff_pair(pair: &LinePair<'_>, options: &DiffOptions) -> Option<DiffResult> {
    if pair.is_equal() {
        return None;
    }
    let (source, target) = diff_line_with(pair.source_text(), pair.target_text(), options);
    Some(DiffResult::new(pair.number, source, target))
}

/// Similarity of two lines in `[0, 1]` as measured by the gestalt matcher.
pub fn similarity(line_a: &str, line_b: &str) -> f64 {
    let a: Vec<char> = line_a.chars().collect();
    let b: Vec<char> = line_b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// A line indexed by character, able to hand out `&str` slices of char ranges.
struct CharLine<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of every char, plus `text.len()` at the end.
    bounds: Vec<usize>,
}

impl<'a> CharLine<'a> {
    fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);
        for (offset, ch) in text.char_indices() {
            chars.push(ch);
            bounds.push(offset);
        }
        bounds.push(text.len());
        Self {
            text,
            chars,
            bounds,
        }
    }

    fn slice(&self, range: std::ops::Range<usize>) -> &'a str {
        &self.text[self.bounds[range.start]..self.bounds[range.end]]
    }
}

fn opcode_spans(line_a: &str, line_b: &str, options: &DiffOptions) -> (Vec<Span>, Vec<Span>) {
    let a = CharLine::new(line_a);
    let b = CharLine::new(line_b);
    let ops = compute_opcodes(options.algorithm, &a.chars, &b.chars);
    log::trace!(
        "{} opcodes for {} vs {} chars ({})",
        ops.len(),
        a.chars.len(),
        b.chars.len(),
        options.algorithm
    );

    let mut source = Vec::new();
    let mut target = Vec::new();
    for op in ops {
        match op.tag {
            DiffTag::Equal => {
                let tag = match options.mode {
                    Mode::LcsAllColored => SpanTag::Replace,
                    _ => SpanTag::Equal,
                };
                source.push(Span::new(tag, a.slice(op.old)));
                target.push(Span::new(tag, b.slice(op.new)));
            }
            DiffTag::Replace => {
                source.push(Span::new(SpanTag::Replace, a.slice(op.old)));
                target.push(Span::new(SpanTag::Replace, b.slice(op.new)));
            }
            DiffTag::Delete => source.push(Span::new(SpanTag::Delete, a.slice(op.old))),
            DiffTag::Insert => target.push(Span::new(SpanTag::Insert, b.slice(op.new))),
        }
    }

    (source, target)
}

fn positional_spans(line_a: &str, line_b: &str) -> (Vec<Span>, Vec<Span>) {
    let mut source = Vec::new();
    let mut target = Vec::new();
    let mut chars_a = line_a.chars();
    let mut chars_b = line_b.chars();

    loop {
        match (chars_a.next(), chars_b.next()) {
            (None, None) => break,
            (Some(c1), Some(c2)) if c1 == c2 => {
                source.push(Span::equal(c1));
                target.push(Span::equal(c2));
            }
            (Some(c1), Some(c2)) => {
                source.push(Span::new(SpanTag::Replace, c1));
                target.push(Span::new(SpanTag::Replace, c2));
            }
            (Some(c1), None) => source.push(Span::new(SpanTag::Delete, c1)),
            (None, Some(c2)) => target.push(Span::new(SpanTag::Insert, c2)),
        }
    }

    (source, target)
}
