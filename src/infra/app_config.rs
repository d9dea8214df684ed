use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{Algorithm, DiffOptions, Mode};
use crate::ui::theme::ThemeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub theme: ThemeKind,
    /// Emit ANSI colors. Only honored when stdout is a terminal.
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            algorithm: Algorithm::default(),
            theme: ThemeKind::default(),
            color: true,
        }
    }
}

impl AppConfig {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions::new(self.mode, self.algorithm)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unreadable config at {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Effective configuration. Problems with the file are logged and the
/// defaults used instead.
pub fn load_config() -> AppConfig {
    match read_config(&config_path()) {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            log::warn!("Ignoring {err}");
            AppConfig::default()
        }
    }
}

/// Reads the config at `path`; a missing file is `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_config(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn save_config(config: &AppConfig) -> std::io::Result<PathBuf> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config).unwrap_or_default();
    std::fs::write(&path, contents)?;
    Ok(path)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("FILECOMPARE_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("FILECOMPARE_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("filecompare");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("filecompare");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("filecompare");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("filecompare");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".filecompare")
}
