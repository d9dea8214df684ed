//! Color palettes and the tag → style mapping used by the renderers.
use owo_colors::{Rgb, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Side, SpanTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn theme(self) -> AppTheme {
        match self {
            Self::Dark => AppTheme::dark(),
            Self::Light => AppTheme::light(),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("invalid theme: {other}")),
        }
    }
}

pub struct AppTheme {
    pub kind: ThemeKind,
    pub line_header: Rgb,
    pub diff_equal: Rgb,
    pub diff_removed_text: Rgb,
    pub diff_added_text: Rgb,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            line_header: Rgb(0x66, 0xe0, 0xff),
            diff_equal: Rgb(0xb9, 0xc2, 0xcd),
            diff_removed_text: Rgb(0xff, 0x4d, 0x4f),
            diff_added_text: Rgb(0x3c, 0xb3, 0x71),
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            line_header: Rgb(0x35, 0x66, 0xe0),
            diff_equal: Rgb(0x44, 0x44, 0x44),
            ..Self::dark()
        }
    }

    /// Changed source text is red, changed target text green, everything
    /// else uses the equal color.
    pub fn span_color(&self, side: Side, tag: SpanTag) -> Rgb {
        match (tag.is_changed(), side) {
            (false, _) => self.diff_equal,
            (true, Side::Source) => self.diff_removed_text,
            (true, Side::Target) => self.diff_added_text,
        }
    }

    pub fn span_style(&self, side: Side, tag: SpanTag) -> Style {
        let style = Style::new().color(self.span_color(side, tag));
        if tag.is_changed() {
            style.bold()
        } else {
            style
        }
    }

    pub fn header_style(&self) -> Style {
        Style::new().color(self.line_header).bold()
    }

    pub fn identical_style(&self) -> Style {
        Style::new().color(self.diff_equal).italic()
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        ThemeKind::default().theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(ThemeKind::Dark.toggled(), ThemeKind::Light);
        assert_eq!(ThemeKind::Dark.toggled().toggled(), ThemeKind::Dark);
    }

    #[test]
    fn test_light_keeps_change_colors() {
        let light = AppTheme::light();
        let dark = AppTheme::dark();
        assert_eq!(light.kind, ThemeKind::Light);
        assert_eq!(light.diff_removed_text.0, dark.diff_removed_text.0);
        assert_ne!(light.line_header.2, dark.line_header.2);
    }

    fn rgb(color: Rgb) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn test_changed_spans_are_colored_per_side() {
        let theme = AppTheme::dark();
        assert_eq!(
            rgb(theme.span_color(Side::Source, SpanTag::Delete)),
            (0xff, 0x4d, 0x4f)
        );
        assert_eq!(
            rgb(theme.span_color(Side::Source, SpanTag::Replace)),
            rgb(theme.span_color(Side::Source, SpanTag::Delete))
        );
        assert_eq!(
            rgb(theme.span_color(Side::Target, SpanTag::Replace)),
            (0x3c, 0xb3, 0x71)
        );
        assert_eq!(
            rgb(theme.span_color(Side::Target, SpanTag::Equal)),
            rgb(theme.diff_equal)
        );
    }
}
