//! Path utilities for the project directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::ScaffoldError;

/// Resolve the directory a project named `dir_name` will live in
pub fn project_path(base_dir: &Path, dir_name: &str) -> PathBuf {
    base_dir.join(dir_name)
}

/// Create a fresh project directory, refusing to reuse an existing path
pub fn create_project_dir(path: &Path) -> Result<()> {
    // symlink_metadata so a dangling symlink also counts as taken
    if path.symlink_metadata().is_ok() {
        return Err(ScaffoldError::directory_exists(path).into());
    }

    std::fs::create_dir(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => ScaffoldError::directory_exists(path),
        _ => ScaffoldError::filesystem(path, e),
    })?;
    Ok(())
}

/// Remove a directory tree if it is there
///
/// Returns whether anything was removed. A missing directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScaffoldError::filesystem(path, e).into()),
    }
}
