//! Template fetching: destination directory plus a clone of one template branch

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::exec::Toolchain;
use crate::template::TemplateVariant;
use crate::utils::paths::{create_project_dir, project_path, remove_dir_if_exists};
use crate::utils::terminal::create_spinner;

/// Resolve and create the project directory under `base_dir`
///
/// Fails without touching the filesystem when the path is already taken.
pub fn prepare_destination(base_dir: &Path, dir_name: &str) -> Result<PathBuf> {
    let path = project_path(base_dir, dir_name);
    create_project_dir(&path)?;
    debug!("Created {}", path.display());
    Ok(path)
}

/// Clone the branch for `variant` into `dest` and drop the template's history
///
/// On a failed clone `dest` stays on disk as it is.
pub fn fetch_template(
    toolchain: &impl Toolchain,
    repo: &str,
    variant: TemplateVariant,
    dest: &Path,
) -> Result<()> {
    let branch = variant.branch();
    let spinner = create_spinner(&format!(
        "Fetching the {} template (branch {})...",
        variant.label(),
        branch
    ));
    let cloned = toolchain.clone_branch(repo, branch, dest);
    spinner.finish_and_clear();
    cloned?;

    remove_dir_if_exists(&dest.join(".git"))?;
    Ok(())
}
