//! Optional dependency installation

use std::path::Path;

use anyhow::Result;

use crate::exec::Toolchain;
use crate::utils::terminal::print_info;

/// What the install step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Skipped,
}

/// Install the project's dependencies when `enabled` is set
pub fn install_dependencies(
    toolchain: &impl Toolchain,
    dest: &Path,
    package_manager: &str,
    enabled: bool,
) -> Result<InstallOutcome> {
    if !enabled {
        print_info("Skipping package installation.");
        return Ok(InstallOutcome::Skipped);
    }

    print_info(&format!("Installing packages with {}...", package_manager));
    toolchain.install(dest, package_manager)?;
    Ok(InstallOutcome::Installed)
}
