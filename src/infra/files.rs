//! Whole-file UTF-8 reads and writes for the compared texts.

use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::SessionError;

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

pub fn read_text(path: &Path) -> Result<String, SessionError> {
    fs::read_to_string(path).map_err(|err| SessionError::read(path, err))
}

pub fn is_stdin_path(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Reads `path`, or stdin when `path` is `-`.
pub fn read_text_or_stdin(path: &Path) -> Result<String, SessionError> {
    if is_stdin_path(path) {
        return read_stdin_text().map_err(|err| SessionError::read(path, err));
    }
    read_text(path)
}

/// Reads all of stdin. Returns an empty string when stdin is a terminal.
pub fn read_stdin_text() -> std::io::Result<String> {
    if std::io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Buffer content as it is written to disk: trailing line feeds removed.
pub fn content_for_save(buffer: &str) -> &str {
    buffer.trim_end_matches('\n')
}

/// Writes every `(path, buffer)` pair or none of them.
///
/// All buffers are first staged in temporary files next to their targets;
/// originals are only replaced once every stage succeeded. Symlinks are
/// followed so the file they point at is updated, and an existing file keeps
/// its permissions.
pub fn write_texts_atomically(files: &[(&Path, &str)]) -> Result<(), SessionError> {
    let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::with_capacity(files.len());

    for (path, buffer) in files {
        let tmp = stage(path, buffer).map_err(|err| SessionError::write(*path, err))?;
        staged.push((tmp, path.to_path_buf()));
    }

    for (tmp, path) in staged {
        let resolved = resolve_save_path(&path);
        tmp.persist(&resolved)
            .map_err(|err| SessionError::write(&path, err.error))?;
        log::debug!("Saved {}", resolved.display());
    }

    Ok(())
}

/// Final destination for `path`: the symlink target when `path` exists,
/// `path` itself otherwise.
fn resolve_save_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn stage(path: &Path, buffer: &str) -> std::io::Result<NamedTempFile> {
    let resolved = resolve_save_path(path);
    let dir = resolved
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content_for_save(buffer).as_bytes())?;
    tmp.flush()?;

    match fs::metadata(&resolved) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    Ok(tmp)
}
