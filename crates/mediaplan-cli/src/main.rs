//! Mediaplan CLI - media plan schema documentation and validation
//!
//! Entry point for the `mediaplan` binary: generate spreadsheet
//! reference documentation from the versioned schemas and validate
//! example documents against the version they declare.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::LoggingConfig;
use output::OutputWriter;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    if let Err(e) = logging::init_logging(&LoggingConfig::from_verbosity(cli.verbosity_level())) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load_with_file(cli.config.as_deref())?;
    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    tracing::info!(command = ?cli.command, "Executing command");

    match cli.command {
        Commands::Document(args) => handlers::handle_document(args, &config, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output),
        Commands::Versions(args) => handlers::handle_versions(args, &config, &mut output),
    }
}
