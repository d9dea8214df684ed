use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic tag attached to a piece of a compared line.
///
/// Tags carry no styling. Mapping a tag to a color is the job of the
/// rendering layer (see `ui::theme`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanTag {
    /// Text present, unchanged, on both sides.
    Equal,
    /// Text replaced by something else on the other side.
    Replace,
    /// Text only present on the source side.
    Delete,
    /// Text only present on the target side.
    Insert,
}

impl SpanTag {
    pub fn is_changed(self) -> bool {
        !matches!(self, Self::Equal)
    }
}

impl fmt::Display for SpanTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Replace => write!(f, "replace"),
            Self::Delete => write!(f, "delete"),
            Self::Insert => write!(f, "insert"),
        }
    }
}

/// A tagged substring of one side of a line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub tag: SpanTag,
    pub text: String,
}

impl Span {
    pub fn new(tag: SpanTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(SpanTag::Equal, text)
    }
}

/// Concatenates span texts, ignoring tags.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Which of the two compared texts a line or span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Target => write!(f, "Target"),
        }
    }
}

/// Two lines sharing a 1-based line number.
///
/// A side is `None` when its text has fewer lines than the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePair<'a> {
    pub number: usize,
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
}

impl<'a> LinePair<'a> {
    /// Source line, or `""` when the source text ran out of lines.
    pub fn source_text(&self) -> &'a str {
        self.source.unwrap_or("")
    }

    /// Target line, or `""` when the target text ran out of lines.
    pub fn target_text(&self) -> &'a str {
        self.target.unwrap_or("")
    }

    pub fn is_equal(&self) -> bool {
        self.source_text() == self.target_text()
    }
}

/// Annotated rendering of one differing line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub line_number: usize,
    pub source: Vec<Span>,
    pub target: Vec<Span>,
    /// Every span on both sides is tagged [`SpanTag::Equal`].
    pub identical: bool,
}

impl DiffResult {
    pub fn new(line_number: usize, source: Vec<Span>, target: Vec<Span>) -> Self {
        let identical = source
            .iter()
            .chain(target.iter())
            .all(|span| !span.tag.is_changed());
        Self {
            line_number,
            source,
            target,
            identical,
        }
    }

    pub fn spans(&self, side: Side) -> &[Span] {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }
}
