//! The scaffolding flow
//!
//! A run is strictly sequential: create the directory, fetch the template
//! branch, start a fresh repository, then optionally install dependencies.
//! The first failure stops the run and whatever is already on disk stays
//! there.

pub mod fetch;
pub mod install;
pub mod repo;

#[cfg(test)]
pub(crate) mod fake;

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use tracing::info;

use crate::exec::Toolchain;
use crate::request::ProjectRequest;
use crate::utils::terminal::{print_info, print_success};

use install::InstallOutcome;

/// Drives one project from request to finished directory
pub struct Scaffolder<T: Toolchain> {
    toolchain: T,
    template_repo: String,
    base_dir: PathBuf,
}

impl<T: Toolchain> Scaffolder<T> {
    /// Create a scaffolder that creates projects under `base_dir`
    pub fn new(toolchain: T, template_repo: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            toolchain,
            template_repo: template_repo.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Run every stage for `request`, returning the project directory
    pub fn run(&self, request: &ProjectRequest) -> Result<PathBuf> {
        info!(
            "Scaffolding '{}' from {} ({})",
            request.name,
            self.template_repo,
            request.variant.branch()
        );
        print_info(&format!("Creating project directory: {}", request.dir_name));
        let path = fetch::prepare_destination(&self.base_dir, &request.dir_name)?;

        fetch::fetch_template(&self.toolchain, &self.template_repo, request.variant, &path)?;
        info!("Fetched {} template into {}", request.variant.branch(), path.display());

        print_info("Initializing a fresh git repository...");
        repo::reinitialize(&self.toolchain, &path)?;

        let outcome = install::install_dependencies(
            &self.toolchain,
            &path,
            &request.package_manager,
            request.install,
        )?;

        print_success(&format!("Successfully created {}!", request.dir_name));
        print_next_steps(&path, request, outcome);
        Ok(path)
    }
}

fn print_next_steps(path: &Path, request: &ProjectRequest, outcome: InstallOutcome) {
    println!("\n{}", style("Next steps:").bold());
    println!("  cd {}", path.display());
    if outcome == InstallOutcome::Skipped {
        println!("  {} install", request.package_manager);
    }
    println!();
}
