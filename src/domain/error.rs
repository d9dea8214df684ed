//! Domain error types for filecompare.
//!
//! The diff engine is total over string input and has no error type. These
//! errors cover the session operations around it (loading and saving the two
//! compared files).

use std::path::PathBuf;
use thiserror::Error;

use super::Side;

/// Errors raised by [`crate::application::session::CompareSession`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Source and target files must both be selected")]
    MissingPaths,

    #[error("Files must be loaded before they can be saved")]
    NotLoaded,

    #[error("The {0} text was read from stdin and has no file to save to")]
    NoSavePath(Side),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
