//! create-filecoin-app - scaffold a new Filecoin app
//!
//! Creates a project directory from one branch of the fil-frame template,
//! gives it a fresh git history and optionally installs its dependencies.
//!
//! ## Architecture
//!
//! ```text
//! cli (flags) / prompt (questions) → ProjectRequest
//!     → scaffold: fetch → repo → install  (through exec::Toolchain → git, yarn)
//! ```

mod cli;
mod error;
mod exec;
mod prompt;
mod request;
mod scaffold;
mod template;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use error::{ScaffoldError, EXIT_FAILURE};
use utils::terminal::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<ScaffoldError>() {
                Some(scaffold_err) => {
                    scaffold_err.display_with_hints();
                    scaffold_err.exit_code()
                }
                None => {
                    print_error(&format!("{:#}", err));
                    EXIT_FAILURE
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Whether log lines may carry ANSI colors
fn log_colors(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

/// Initialize tracing on stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(log_colors(no_color, console::user_attended_stderr()))
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
