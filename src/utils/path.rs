//! Path and file utilities

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Read a text file, treating a missing file as empty
pub fn read_file_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Replace `path` with `content` atomically.
///
/// The data goes to a temporary file in the same directory, is synced, takes
/// over the permissions of the existing target and is then renamed over it.
/// Readers observe either the old file or the new one. Missing parent
/// directories are created.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let existing_perms = fs::metadata(path).map(|m| m.permissions()).ok();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Some(perms) = existing_perms {
        fs::set_permissions(tmp.path(), perms)?;
    }

    tmp.persist(path).map_err(|e| e.error)?;

    #[cfg(unix)]
    {
        if let Ok(parent_file) = fs::File::open(dir) {
            let _ = parent_file.sync_all();
        }
    }

    Ok(())
}
