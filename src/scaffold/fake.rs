//! Recording toolchain for exercising the scaffold flow without git

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::exec::Toolchain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clone {
        repo: String,
        branch: String,
        dest: PathBuf,
    },
    InitAndCommit {
        dest: PathBuf,
        message: String,
        had_template_metadata: bool,
    },
    Install {
        dest: PathBuf,
        package_manager: String,
    },
}

/// Fake that writes a small template on clone and records every call
#[derive(Debug, Default)]
pub struct FakeToolchain {
    calls: RefCell<Vec<Call>>,
    fail_clone: bool,
    fail_commit: bool,
    fail_install: bool,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_clone(mut self) -> Self {
        self.fail_clone = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn failing_install(mut self) -> Self {
        self.fail_install = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl Toolchain for FakeToolchain {
    fn clone_branch(&self, repo: &str, branch: &str, dest: &Path) -> Result<()> {
        self.calls.borrow_mut().push(Call::Clone {
            repo: repo.to_string(),
            branch: branch.to_string(),
            dest: dest.to_path_buf(),
        });
        if self.fail_clone {
            bail!("fatal: Remote branch {} not found in upstream origin", branch);
        }

        std::fs::create_dir_all(dest.join(".git"))?;
        std::fs::write(dest.join(".git").join("HEAD"), "ref: refs/heads/main\n")?;
        std::fs::create_dir_all(dest.join(".github").join("workflows"))?;
        std::fs::write(dest.join(".github").join("workflows").join("ci.yml"), "on: push\n")?;
        std::fs::write(dest.join("package.json"), "{\"name\": \"fil-frame\"}\n")?;
        std::fs::write(dest.join("BRANCH"), branch)?;
        Ok(())
    }

    fn init_and_commit(&self, dest: &Path, message: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::InitAndCommit {
            dest: dest.to_path_buf(),
            message: message.to_string(),
            had_template_metadata: dest.join(".git").exists() || dest.join(".github").exists(),
        });
        if self.fail_commit {
            bail!("nothing to commit");
        }
        std::fs::create_dir_all(dest.join(".git"))?;
        Ok(())
    }

    fn install(&self, dest: &Path, package_manager: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::Install {
            dest: dest.to_path_buf(),
            package_manager: package_manager.to_string(),
        });
        if self.fail_install {
            bail!("{} install exited with status 1", package_manager);
        }
        Ok(())
    }
}
