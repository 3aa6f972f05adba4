//! End-to-end tests running the binary against a local template repository

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const IDENTITY: [(&str, &str); 4] = [
    ("GIT_AUTHOR_NAME", "Scaffold Test"),
    ("GIT_AUTHOR_EMAIL", "scaffold@example.com"),
    ("GIT_COMMITTER_NAME", "Scaffold Test"),
    ("GIT_COMMITTER_EMAIL", "scaffold@example.com"),
];

fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Scratch area holding a template repository, a git config and a work dir
struct Sandbox {
    _root: TempDir,
    template: PathBuf,
    gitconfig: PathBuf,
    work: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let template = root.path().join("fil-frame");
        let work = root.path().join("work");
        let gitconfig = root.path().join("gitconfig");
        fs::create_dir(&template).unwrap();
        fs::create_dir(&work).unwrap();
        fs::write(&gitconfig, "").unwrap();

        let sandbox = Self {
            _root: root,
            template,
            gitconfig,
            work,
        };
        sandbox.build_template();
        sandbox
    }

    fn git(&self, dir: &Path, args: &[&str]) -> String {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(dir)
            .envs(IDENTITY)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CONFIG_GLOBAL", &self.gitconfig)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Template with a `main` and a `storacha-nfts` branch, each naming itself in BRANCH
    fn build_template(&self) {
        let t = &self.template;
        self.git(t, &["init"]);
        self.git(t, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        fs::write(t.join("package.json"), "{\"name\": \"fil-frame\"}\n").unwrap();
        fs::write(t.join("README.md"), "# fil-frame\n").unwrap();
        fs::create_dir_all(t.join(".github").join("workflows")).unwrap();
        fs::write(t.join(".github").join("workflows").join("ci.yml"), "on: push\n").unwrap();
        fs::write(t.join("BRANCH"), "main").unwrap();
        self.git(t, &["add", "."]);
        self.git(t, &["commit", "-m", "template main"]);
        self.git(t, &["commit", "--allow-empty", "-m", "second template commit"]);

        self.git(t, &["checkout", "-b", "storacha-nfts"]);
        fs::write(t.join("BRANCH"), "storacha-nfts").unwrap();
        self.git(t, &["commit", "-am", "storacha integration"]);
        self.git(t, &["checkout", "main"]);
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-filecoin-app").unwrap();
        cmd.current_dir(&self.work)
            .envs(IDENTITY)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CONFIG_GLOBAL", &self.gitconfig)
            .env("CREATE_FILECOIN_APP_TEMPLATE_REPO", &self.template)
            .env_remove("CREATE_FILECOIN_APP_PACKAGE_MANAGER")
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }

    fn commit_count(&self, project: &Path) -> String {
        self.git(project, &["rev-list", "--count", "HEAD"])
    }
}

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--skip-install"))
        .stdout(predicate::str::contains("--storacha"))
        .stdout(predicate::str::contains("--template-repo").not());
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_provider_is_a_usage_error() {
    let work = TempDir::new().unwrap();
    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .current_dir(work.path())
        .args(["my-app", "--provider", "filebase"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("filebase"));

    assert!(!work.path().join("my-app").exists());
}

#[test]
fn test_empty_name_is_a_usage_error() {
    let work = TempDir::new().unwrap();
    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .current_dir(work.path())
        .args(["", "--no-color"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project name is required"));

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_directory_is_left_alone() {
    let work = TempDir::new().unwrap();
    fs::create_dir(work.path().join("my-app")).unwrap();
    fs::write(work.path().join("my-app").join("notes.txt"), "keep me").unwrap();

    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .current_dir(work.path())
        .env("CREATE_FILECOIN_APP_TEMPLATE_REPO", work.path().join("no-such-template"))
        .args(["My App!", "--skip-install", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory already exists"));

    let entries: Vec<_> = fs::read_dir(work.path().join("my-app")).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_scaffold_storacha_without_install() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["My App!", "--storacha", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating project directory: my-app"))
        .stdout(predicate::str::contains("Skipping package installation."))
        .stdout(predicate::str::contains("Successfully created my-app!"));

    let project = sandbox.work.join("my-app");
    assert_eq!(fs::read_to_string(project.join("BRANCH")).unwrap(), "storacha-nfts");
    assert!(project.join("package.json").exists());
    assert!(!project.join(".github").exists());
    assert_eq!(sandbox.commit_count(&project), "1");
    assert_eq!(sandbox.git(&project, &["log", "--format=%s"]), "init");
    assert_eq!(sandbox.git(&project, &["status", "--porcelain"]), "");
}

#[test]
fn test_default_variant_uses_main_branch() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["plain-app", "--skip-install"])
        .assert()
        .success();

    let project = sandbox.work.join("plain-app");
    assert_eq!(fs::read_to_string(project.join("BRANCH")).unwrap(), "main");
    assert_eq!(sandbox.commit_count(&project), "1");
}

#[test]
fn test_missing_template_branch_fails_and_keeps_directory() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["akave-app", "--provider", "akave", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template clone failed"));

    assert!(sandbox.work.join("akave-app").is_dir());
}

#[cfg(unix)]
#[test]
fn test_install_runs_package_manager() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["installed-app", "--package-manager", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing packages with true..."))
        .stdout(predicate::str::contains("Successfully created installed-app!"));
}

#[cfg(unix)]
#[test]
fn test_install_failure_keeps_project_and_commit() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["broken-install", "--storacha", "--package-manager", "false"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Successfully created").not())
        .stderr(predicate::str::contains("Package installation failed"));

    let project = sandbox.work.join("broken-install");
    assert!(project.join("package.json").exists());
    assert_eq!(sandbox.commit_count(&project), "1");
}

#[test]
fn test_interactive_mode_without_terminal_creates_nothing() {
    let work = TempDir::new().unwrap();

    Command::cargo_bin("create-filecoin-app")
        .unwrap()
        .current_dir(work.path())
        .arg("--no-color")
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Welcome to Create Filecoin App"));

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}
