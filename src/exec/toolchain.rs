//! Git and package manager operations used while scaffolding

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::error::{hints, ScaffoldError};
use crate::exec::subprocess::{display_command, run_command};
use crate::utils::tools::require_tool;

/// The external capabilities a scaffold run needs
pub trait Toolchain {
    /// Clone `branch` of `repo` into the existing, empty directory `dest`
    fn clone_branch(&self, repo: &str, branch: &str, dest: &Path) -> Result<()>;

    /// Create a new repository in `dest` and commit everything in it
    fn init_and_commit(&self, dest: &Path, message: &str) -> Result<()>;

    /// Run `<package_manager> install` in `dest`, streaming its output
    fn install(&self, dest: &Path, package_manager: &str) -> Result<()>;
}

/// Toolchain backed by the `git` and package manager binaries on `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolchain;

impl SystemToolchain {
    /// Run a git subcommand in `dir`, turning a non-zero exit into an error
    fn git(
        &self,
        action: &str,
        args: &[&str],
        dir: Option<&Path>,
        hint: Option<&'static str>,
    ) -> Result<()> {
        let result = run_command("git", args, dir, false)?;
        if result.success {
            return Ok(());
        }

        let hint = if result.stderr.contains("Please tell me who you are")
            || result.stderr.contains("empty ident name")
        {
            Some(hints::git_identity())
        } else {
            hint
        };

        Err(ScaffoldError::command_failed(
            action,
            display_command("git", args),
            result.exit_code,
            result.stderr,
            hint.map(str::to_string),
        )
        .into())
    }
}

impl Toolchain for SystemToolchain {
    fn clone_branch(&self, repo: &str, branch: &str, dest: &Path) -> Result<()> {
        require_tool("git", "cloning the project template")?;

        let dest = dest.to_string_lossy().into_owned();
        info!("Cloning branch {} of {}", branch, repo);
        self.git(
            "Template clone",
            &["clone", "--depth", "1", "--branch", branch, repo, dest.as_str()],
            None,
            Some(hints::clone_failed()),
        )
    }

    fn init_and_commit(&self, dest: &Path, message: &str) -> Result<()> {
        require_tool("git", "initializing the project repository")?;

        self.git("Repository initialization", &["init"], Some(dest), None)?;
        self.git("Staging project files", &["add", "."], Some(dest), None)?;
        self.git("Initial commit", &["commit", "-m", message], Some(dest), None)?;
        info!("Created initial commit in {}", dest.display());
        Ok(())
    }

    fn install(&self, dest: &Path, package_manager: &str) -> Result<()> {
        require_tool(package_manager, "installing project dependencies")?;

        let args = ["install"];
        let result = run_command(package_manager, &args, Some(dest), true)?;
        if result.success {
            return Ok(());
        }

        Err(ScaffoldError::command_failed(
            "Package installation",
            display_command(package_manager, &args),
            result.exit_code,
            String::new(),
            Some(hints::install_failed().to_string()),
        )
        .into())
    }
}
