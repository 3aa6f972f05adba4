//! Tool detection with helpful errors when a tool is missing

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use tracing::{debug, Level};
use which::which;

use crate::error::{hints, ScaffoldError};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Tool name
    pub name: String,
    /// Path to the tool executable
    pub path: PathBuf,
    /// Tool version string (if available)
    pub version: Option<String>,
}

/// Check if a tool exists and return its information
///
/// The tool itself is only run (`--version`) when `read_version` is set.
pub fn check_tool(tool_name: &str, read_version: bool) -> Option<ToolInfo> {
    match which(tool_name) {
        Ok(path) => {
            let version = if read_version {
                get_tool_version(&path)
            } else {
                None
            };
            Some(ToolInfo {
                name: tool_name.to_string(),
                path,
                version,
            })
        }
        Err(_) => None,
    }
}

/// Get tool version by running `tool --version`
fn get_tool_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8_lossy(&output.stdout);
    let first_line = version.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        None
    } else {
        Some(first_line.to_string())
    }
}

/// Require a tool to exist, return error with hint if missing
pub fn require_tool(tool_name: &str, required_for: &str) -> Result<ToolInfo> {
    // the version only feeds the debug line below
    match check_tool(tool_name, tracing::enabled!(Level::DEBUG)) {
        Some(info) => {
            debug!(
                "Using {} at {} ({})",
                info.name,
                info.path.display(),
                info.version.as_deref().unwrap_or("unknown version")
            );
            Ok(info)
        }
        None => Err(ScaffoldError::missing_tool(tool_name, required_for, get_tool_hint(tool_name)).into()),
    }
}

/// Get installation hint for a tool
fn get_tool_hint(tool_name: &str) -> &'static str {
    match tool_name {
        "git" => hints::git(),
        "yarn" => hints::yarn(),
        "npm" => hints::npm(),
        "pnpm" => hints::pnpm(),
        _ => "Install this tool and ensure it's in your PATH",
    }
}
