//! CLI argument parsing using clap derive macros

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;

use crate::exec::SystemToolchain;
use crate::prompt::{resolve_interactive, TerminalPrompter};
use crate::request::{ProjectRequest, DEFAULT_PACKAGE_MANAGER};
use crate::scaffold::Scaffolder;
use crate::template::{TemplateVariant, TEMPLATE_REPOSITORY_URL};
use crate::utils::terminal::{print_warning, print_welcome};

/// CLI to create a new Filecoin app
///
/// Run without a project name to answer a few questions interactively.
#[derive(Parser, Debug)]
#[command(name = "create-filecoin-app")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("variant")
        .args(["provider", "storacha", "lighthouse", "akave"])
        .multiple(false)
))]
pub struct Cli {
    /// Name of the new project
    pub project_name: Option<String>,

    /// Storage provider integration to start from
    #[arg(long, value_enum, value_name = "PROVIDER")]
    pub provider: Option<TemplateVariant>,

    /// Initialize the repository using Storacha as the storage provider
    #[arg(long)]
    pub storacha: bool,

    /// Initialize the repository using Lighthouse as the storage provider
    #[arg(long)]
    pub lighthouse: bool,

    /// Initialize the repository using Akave as the storage provider
    #[arg(long)]
    pub akave: bool,

    /// Do not install dependencies after creating the project
    #[arg(long)]
    pub skip_install: bool,

    /// Package manager used to install dependencies
    #[arg(
        long,
        value_name = "COMMAND",
        env = "CREATE_FILECOIN_APP_PACKAGE_MANAGER",
        default_value = DEFAULT_PACKAGE_MANAGER
    )]
    pub package_manager: String,

    /// Template repository to clone from
    #[arg(
        long,
        hide = true,
        env = "CREATE_FILECOIN_APP_TEMPLATE_REPO",
        default_value = TEMPLATE_REPOSITORY_URL
    )]
    pub template_repo: String,

    /// Enable verbose output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Variant chosen on the command line, legacy flags included
    pub fn flag_variant(&self) -> Option<TemplateVariant> {
        if self.provider.is_some() {
            self.provider
        } else if self.storacha {
            Some(TemplateVariant::Storacha)
        } else if self.lighthouse {
            Some(TemplateVariant::Lighthouse)
        } else if self.akave {
            Some(TemplateVariant::Akave)
        } else {
            None
        }
    }

    /// Resolve the request from flags, or from prompts when no name was given
    pub fn resolve_request(&self) -> Result<ProjectRequest> {
        match &self.project_name {
            Some(name) => ProjectRequest::new(
                name,
                self.flag_variant().unwrap_or_default(),
                !self.skip_install,
                self.package_manager.as_str(),
            ),
            None => {
                if !console::user_attended() {
                    print_warning("no project name given and no terminal attached; pass a project name to run non-interactively");
                }
                print_welcome();
                resolve_interactive(&mut TerminalPrompter::new(), &self.package_manager)
            }
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let request = self.resolve_request()?;
        debug!("Resolved request: {:?}", request);

        let base_dir = std::env::current_dir().context("Failed to get current directory")?;
        Scaffolder::new(SystemToolchain, self.template_repo, base_dir).run(&request)?;
        Ok(())
    }
}
