//! Error types and helpers for user-friendly error messages
//!
//! Every failure the scaffolder can report maps onto one [`ScaffoldError`]
//! variant. Errors travel through the code as `anyhow::Error`; `main` downcasts
//! back to `ScaffoldError` to print hints and pick the process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for usage and input errors, matching clap's own usage errors
pub const EXIT_USAGE: i32 = 2;

/// Exit code for every failure that has no more specific code
pub const EXIT_FAILURE: i32 = 1;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The project name is empty or has nothing usable after sanitization
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The target directory is already taken
    #[error("Directory already exists: {}", path.display())]
    DirectoryExists { path: PathBuf },

    /// Tool/executable not found
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// An external command ran and failed
    #[error("{action} failed: `{command}` {}", describe_exit(.exit_code))]
    CommandFailed {
        action: String,
        command: String,
        exit_code: Option<i32>,
        stderr: String,
        hint: Option<String>,
    },

    /// Directory creation or removal failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive prompt could not read an answer
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl ScaffoldError {
    /// Create an invalid project name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a directory-exists error
    pub fn directory_exists(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryExists { path: path.into() }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a command failure error
    pub fn command_failed(
        action: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self::CommandFailed {
            action: action.into(),
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
            hint,
        }
    }

    /// Create a filesystem error
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    ///
    /// Command failures pass the child's own status through.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidName { .. } => EXIT_USAGE,
            ScaffoldError::CommandFailed { exit_code, .. } => match exit_code {
                Some(code) if *code != 0 => *code,
                _ => EXIT_FAILURE,
            },
            _ => EXIT_FAILURE,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let ScaffoldError::CommandFailed { stderr, .. } = self {
            let stderr = stderr.trim();
            if !stderr.is_empty() {
                eprintln!("\n{}", style("OUTPUT:").cyan().bold());
                for line in stderr.lines() {
                    eprintln!("  {}", line);
                }
            }
        }

        match self {
            ScaffoldError::MissingTool {
                hint, required_for, ..
            } => {
                eprintln!("\n{} {}", style("REQUIRED FOR:").cyan().bold(), required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            ScaffoldError::CommandFailed { hint: Some(h), .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
            }
            ScaffoldError::DirectoryExists { .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hints::directory_exists());
            }
            ScaffoldError::InvalidName { .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hints::project_name());
            }
            _ => {}
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }

    /// Get hint for a missing Yarn
    pub fn yarn() -> &'static str {
        "Install Yarn with Corepack (ships with Node.js 16.10+):\n\
         • Run: corepack enable\n\
         \n\
         Or pick another package manager with --package-manager npm"
    }

    /// Get hint for a missing npm
    pub fn npm() -> &'static str {
        "npm ships with Node.js. Install Node.js from https://nodejs.org/ or use your package manager:\n\
         • macOS: brew install node\n\
         • Ubuntu: sudo apt install nodejs npm\n\
         • Windows: winget install OpenJS.NodeJS"
    }

    /// Get hint for a missing pnpm
    pub fn pnpm() -> &'static str {
        "Install pnpm with Corepack (ships with Node.js 16.10+):\n\
         • Run: corepack enable pnpm\n\
         \n\
         Or see https://pnpm.io/installation"
    }

    /// Get hint for a failed template clone
    pub fn clone_failed() -> &'static str {
        "Could not fetch the project template. Try:\n\
         • Check your network connection\n\
         • Check that the template branch still exists\n\
         • Remove the partially created project directory before retrying"
    }

    /// Get hint for a commit rejected because git has no identity
    pub fn git_identity() -> &'static str {
        "Git needs to know who you are before it can create the initial commit:\n\
         • Run: git config --global user.name \"Your Name\"\n\
         • Run: git config --global user.email \"you@example.com\"\n\
         \n\
         Then run `git add . && git commit -m init` inside the project directory."
    }

    /// Get hint for a failed dependency installation
    pub fn install_failed() -> &'static str {
        "The project was created, but installing its dependencies failed.\n\
         Fix the problem above, then run the install command again inside the project directory."
    }

    /// Get hint for a taken project directory
    pub fn directory_exists() -> &'static str {
        "Choose a different project name, or remove the existing directory first."
    }

    /// Get hint for an unusable project name
    pub fn project_name() -> &'static str {
        "Use a name with at least one letter or digit, for example: my-filecoin-app"
    }
}
