//! Postbridge CLI - convert Talend API Tester exports into Postman files
//!
//! This is the main entry point for the Postbridge CLI application.
//!
//! ```text
//! postbridge -i /tmp/exported.json -o /tmp/postman
//! cat /tmp/exported.json | postbridge -o /tmp/postman
//! ```

mod cli;
mod config;
mod error;
mod handlers;
mod input;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Without an output prefix there is nothing to do
    let Some(prefix) = cli.output.clone() else {
        println!("{}", Cli::usage());
        process::exit(0);
    };

    // Load configuration before logging so the file can shape the subscriber
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli, &prefix, &config) {
        Ok(()) => process::exit(0),
        Err(e) => {
            tracing::error!(error = %e, exit_code = e.exit_code(), "Conversion failed");
            exit_with(&e)
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(config_file = ?config.source))]
fn run(cli: &Cli, prefix: &str, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(cli.use_color(), cli.quiet);

    let input = {
        let _input_timer = Timer::new("read_input");
        input::read_input(cli.input.as_deref())?
    };

    handlers::handle_convert(input, prefix, config, &mut output)?;
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    // Config file first, then environment overrides
    logging_config.merge_with_settings(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}

fn exit_with(e: &error::Error) -> ! {
    eprintln!("{}", error::format_error(e, control::SHOULD_COLORIZE.should_colorize()));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}
