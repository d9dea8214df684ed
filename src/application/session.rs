//! Explicit state for one side-by-side comparison: which files are loaded,
//! their editable buffers, diff settings and the active theme.

use std::path::{Path, PathBuf};

use crate::application::compare::{Report, compare_report};
use crate::domain::{DiffOptions, SessionError, Side};
use crate::infra::files;
use crate::ui::theme::ThemeKind;

#[derive(Debug, Clone, Default)]
pub struct CompareSession {
    loaded: bool,
    /// `None` for a side read from stdin.
    source_path: Option<PathBuf>,
    target_path: Option<PathBuf>,
    source_text: String,
    target_text: String,
    pub options: DiffOptions,
    pub theme: ThemeKind,
}

impl CompareSession {
    pub fn new(options: DiffOptions, theme: ThemeKind) -> Self {
        Self {
            options,
            theme,
            ..Self::default()
        }
    }

    /// Loads both files into the buffers. Both paths are required, and
    /// nothing changes unless both reads succeed. `-` reads from stdin.
    pub fn load(
        &mut self,
        source: Option<&Path>,
        target: Option<&Path>,
    ) -> Result<(), SessionError> {
        self.load_with(source, target, files::read_text_or_stdin)
    }

    pub(crate) fn load_with<F>(
        &mut self,
        source: Option<&Path>,
        target: Option<&Path>,
        read: F,
    ) -> Result<(), SessionError>
    where
        F: Fn(&Path) -> Result<String, SessionError>,
    {
        let (Some(source), Some(target)) = (source, target) else {
            return Err(SessionError::MissingPaths);
        };

        let source_text = read(source)?;
        let target_text = read(target)?;

        log::debug!(
            "Loaded {} ({} bytes) and {} ({} bytes)",
            source.display(),
            source_text.len(),
            target.display(),
            target_text.len()
        );
        self.loaded = true;
        self.source_path = save_path(source);
        self.target_path = save_path(target);
        self.source_text = source_text;
        self.target_text = target_text;
        Ok(())
    }

    /// Writes both buffers back to the paths they were loaded from, with
    /// trailing line feeds removed.
    pub fn save(&self) -> Result<(), SessionError> {
        if !self.loaded {
            return Err(SessionError::NotLoaded);
        }
        let source = self
            .source_path
            .as_deref()
            .ok_or(SessionError::NoSavePath(Side::Source))?;
        let target = self
            .target_path
            .as_deref()
            .ok_or(SessionError::NoSavePath(Side::Target))?;
        files::write_texts_atomically(&[
            (source, self.source_text.as_str()),
            (target, self.target_text.as_str()),
        ])
    }

    pub fn compare(&self) -> Report {
        compare_report(&self.source_text, &self.target_text, &self.options)
    }

    pub fn clear(&mut self) {
        let options = self.options;
        let theme = self.theme;
        *self = Self::new(options, theme);
    }

    pub fn toggle_theme(&mut self) -> ThemeKind {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_target_text(&mut self, text: impl Into<String>) {
        self.target_text = text.into();
    }
}

fn save_path(path: &Path) -> Option<PathBuf> {
    (!files::is_stdin_path(path)).then(|| path.to_path_buf())
}
