//! Interactive question sequence used when no project name is given

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::ScaffoldError;
use crate::request::{validate_project_name, ProjectRequest};
use crate::template::TemplateVariant;

/// Source of answers for the interactive questions
pub trait Prompter {
    /// Ask for the project name until a usable one is given
    fn project_name(&mut self) -> Result<String>;

    /// Ask which template variant to use
    fn variant(&mut self, choices: &[TemplateVariant]) -> Result<TemplateVariant>;

    /// Ask whether to install dependencies right away
    fn install_now(&mut self, package_manager: &str) -> Result<bool>;
}

/// Prompter reading answers from the terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn project_name(&mut self) -> Result<String> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("What is your project name?")
            .validate_with(|input: &String| validate_project_name(input))
            .interact_text()
            .map_err(ScaffoldError::from)?;
        Ok(name)
    }

    fn variant(&mut self, choices: &[TemplateVariant]) -> Result<TemplateVariant> {
        let labels: Vec<&str> = choices.iter().map(|v| v.label()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Which feature would you like to use?")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(ScaffoldError::from)?;
        Ok(choices[selection])
    }

    fn install_now(&mut self, package_manager: &str) -> Result<bool> {
        let install = Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "Install dependencies now with {}?",
                package_manager
            ))
            .default(true)
            .interact()
            .map_err(ScaffoldError::from)?;
        Ok(install)
    }
}

/// Build a request by asking name, variant and install, in that order
pub fn resolve_interactive(
    prompter: &mut impl Prompter,
    package_manager: &str,
) -> Result<ProjectRequest> {
    let name = prompter.project_name()?;
    let variant = prompter.variant(&TemplateVariant::ALL)?;
    let install = prompter.install_now(package_manager)?;

    ProjectRequest::new(&name, variant, install, package_manager)
}
