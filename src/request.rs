//! The project request: everything one run needs to know

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;

use crate::error::ScaffoldError;
use crate::template::TemplateVariant;

/// Package manager used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "yarn";

/// A fully resolved scaffolding request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Name as the user typed it
    pub name: String,
    /// Directory name derived from `name`
    pub dir_name: String,
    pub variant: TemplateVariant,
    /// Install gate
    pub install: bool,
    pub package_manager: String,
}

impl ProjectRequest {
    /// Build a request, validating and sanitizing the project name
    pub fn new(
        name: &str,
        variant: TemplateVariant,
        install: bool,
        package_manager: impl Into<String>,
    ) -> Result<Self> {
        validate_project_name(name).map_err(|reason| ScaffoldError::invalid_name(name, reason))?;

        Ok(Self {
            name: name.to_string(),
            dir_name: sanitize_project_name(name),
            variant,
            install,
            package_manager: package_manager.into(),
        })
    }
}

fn unsafe_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^\w]+").expect("valid sanitization pattern"))
}

/// Longest directory name, in bytes, most filesystems accept
pub const MAX_DIR_NAME_BYTES: usize = 255;

/// Device names Windows reserves regardless of extension
const RESERVED_NAMES: [&str; 22] = [
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Suffix appended to names that collide with a reserved device name
const RESERVED_SUFFIX: &str = "-app";

/// Cut `name` to at most `max` bytes without splitting a character
fn truncate_to_boundary(name: &str, max: usize) -> &str {
    if name.len() <= max {
        return name;
    }
    let mut end = max;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// Map arbitrary text to a single safe directory name
///
/// Lowercases, collapses every run of non-word characters (path separators,
/// dots, spaces, punctuation, hyphens) into one `-` and trims `-` from both
/// ends. `"My App!"` becomes `"my-app"`. The result is capped at
/// [`MAX_DIR_NAME_BYTES`], and reserved device names such as `con` get a
/// `-app` suffix.
pub fn sanitize_project_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let replaced = unsafe_chars().replace_all(&lowered, "-");
    let trimmed = replaced.trim_matches('-');
    let sanitized = truncate_to_boundary(trimmed, MAX_DIR_NAME_BYTES).trim_end_matches('-');

    if RESERVED_NAMES.contains(&sanitized) {
        format!("{}{}", sanitized, RESERVED_SUFFIX)
    } else {
        sanitized.to_string()
    }
}

/// Check that a project name is usable, returning the reason when it is not
pub fn validate_project_name(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    if sanitize_project_name(name).is_empty() {
        return Err("Project name must contain at least one letter or digit".to_string());
    }
    Ok(())
}
