//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Postbridge - convert Talend API Tester exports into Postman collections and environments
///
/// Writes one `<PREFIX>_collection_<NAME>.json` per collection and one
/// `<PREFIX>_environment_<NAME>.json` per environment. The export is read from
/// standard input when data is piped in, otherwise from `--input`.
#[derive(Parser, Debug)]
#[command(name = "postbridge", version, author, about, long_about = None)]
pub struct Cli {
    /// Input file path of a Talend API Tester export (stdin is used when piped)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file path prefix for Postman files (example: /tmp/postman)
    #[arg(short, long, value_name = "PREFIX")]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "POSTBRIDGE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet and debug flags)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else if self.debug {
            self.verbose.max(2)
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Render the usage text shown when no output prefix is given
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments parse")
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["postbridge", "-i", "/tmp/export.json", "-o", "/tmp/postman", "-d"]);
        assert_eq!(cli.input, Some(PathBuf::from("/tmp/export.json")));
        assert_eq!(cli.output.as_deref(), Some("/tmp/postman"));
        assert!(cli.debug);
    }

    #[test]
    fn test_output_is_optional_at_parse_time() {
        let cli = parse(&["postbridge", "-i", "export.json"]);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(parse(&["postbridge"]).verbosity_level(), 0);
        assert_eq!(parse(&["postbridge", "-vvv"]).verbosity_level(), 3);
        assert_eq!(parse(&["postbridge", "-d"]).verbosity_level(), 2);
        assert_eq!(parse(&["postbridge", "-d", "-vvv"]).verbosity_level(), 3);
        assert_eq!(parse(&["postbridge", "-q", "-d"]).verbosity_level(), 0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["postbridge", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_usage_mentions_flags() {
        let usage = Cli::usage();
        assert!(usage.contains("--input"));
        assert!(usage.contains("--output"));
    }
}
