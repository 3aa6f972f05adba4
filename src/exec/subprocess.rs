//! Subprocess execution in an explicit working directory

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, trace};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, `None` when the process was killed by a signal
    pub exit_code: Option<i32>,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
        }
    }
}

/// Render a program and its arguments the way a user would type them
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion
///
/// `cwd` is passed to the child only; the process working directory is never
/// changed. With `inherit_io` the child shares our terminal and nothing is
/// captured.
pub fn run_command(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    inherit_io: bool,
) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = display_command(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
        debug!("Running `{}` in {}", rendered, dir.display());
    } else {
        debug!("Running `{}`", rendered);
    }

    let result = if inherit_io {
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute {}", program))?;

        CommandResult::from_status(status, String::new(), String::new(), start.elapsed())
    } else {
        cmd.stdin(Stdio::null());
        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", program))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        CommandResult::from_status(output.status, stdout, stderr, start.elapsed())
    };

    trace!(
        "`{}` finished in {:?} (exit code {:?})",
        rendered,
        result.duration,
        result.exit_code
    );
    if !result.stdout.is_empty() {
        trace!("stdout:\n{}", result.stdout.trim_end());
    }
    Ok(result)
}
