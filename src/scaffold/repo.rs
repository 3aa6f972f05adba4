//! Fresh repository for the new project

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::exec::Toolchain;
use crate::utils::paths::remove_dir_if_exists;

/// Message of the single commit a new project starts with
pub const INITIAL_COMMIT_MESSAGE: &str = "init";

/// Directories inherited from the template that must not survive: its git
/// history and its CI configuration
pub const TEMPLATE_METADATA_DIRS: [&str; 2] = [".git", ".github"];

/// Strip inherited metadata from `dest` and commit its contents as a new history
pub fn reinitialize(toolchain: &impl Toolchain, dest: &Path) -> Result<()> {
    for dir in TEMPLATE_METADATA_DIRS {
        if remove_dir_if_exists(&dest.join(dir))? {
            debug!("Removed template {} from {}", dir, dest.display());
        }
    }

    toolchain.init_and_commit(dest, INITIAL_COMMIT_MESSAGE)
}
