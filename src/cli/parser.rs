//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Compute pagination windows from the command line
#[derive(Parser, Debug)]
#[command(name = "pager", version)]
#[command(about = "Compute pagination windows and inspect pagination settings")]
#[command(long_about = "
pager computes the sliding page window and the linear page sequence used by
pagination controls, and validates pagination configuration.

EXAMPLES:
    # Window around the 5th page (index 4) of 1000 records
    pager window --page-index 4 --total-records 1000

    # Linear page sequence with explicit sizes
    pager sequence --current 3 --total-records 95 --page-size 10 --range-size 5

    # Validate the configuration for production
    pager --env production check-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered configuration directory.
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    #[arg(short, long, global = true, value_enum)]
    pub env: Option<Environment>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the sliding window for a zero-based page index
    ///
    /// Page size and range size default to the configured values; the page
    /// count is derived from the record count unless given.
    Window {
        /// Zero-based index of the current page
        #[arg(long, default_value_t = 0)]
        page_index: u32,

        /// Total number of records
        #[arg(long)]
        total_records: u64,

        /// Total number of pages
        #[arg(long)]
        total_pages: Option<u32>,

        #[arg(long, value_parser = super::validation::validate_page_size)]
        page_size: Option<u32>,

        #[arg(long, value_parser = super::validation::validate_range_size)]
        range_size: Option<u32>,
    },

    /// Print the linear page sequence for a one-based current page
    Sequence {
        /// One-based current page
        #[arg(long, default_value_t = 1)]
        current: u32,

        #[arg(long)]
        total_records: u64,

        #[arg(long, value_parser = super::validation::validate_page_size)]
        page_size: Option<u32>,

        /// Number of pages shown; the sign is ignored
        #[arg(long, allow_negative_numbers = true)]
        range_size: Option<i64>,
    },

    /// Validate the configuration and print the merged settings
    CheckConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        match (self.verbose, self.quiet) {
            (true, _) => Some("debug"),
            (_, true) => Some("error"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["pager", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pager"]).is_err());
    }

    #[test]
    fn test_window_command() {
        let cli = Cli::try_parse_from([
            "pager",
            "window",
            "--page-index",
            "4",
            "--total-records",
            "1000",
            "--range-size",
            "7",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Window {
                page_index: 4,
                total_records: 1000,
                total_pages: None,
                page_size: None,
                range_size: Some(7),
            }
        );
    }

    #[test]
    fn test_window_rejects_small_range() {
        let result = Cli::try_parse_from(["pager", "window", "--total-records", "10", "--range-size", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sequence_negative_range() {
        let cli = Cli::try_parse_from(["pager", "sequence", "--total-records", "50", "--range-size", "-4"]).unwrap();
        match cli.command {
            Commands::Sequence { current, range_size, .. } => {
                assert_eq!(current, 1);
                assert_eq!(range_size, Some(-4));
            }
            other => panic!("Expected Sequence command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pager", "check-config", "--env", "prod", "-v"]).unwrap();
        assert_eq!(cli.command, Commands::CheckConfig);
        assert_eq!(cli.env, Some(Environment::Production));
        assert_eq!(cli.log_level_override(), Some("debug"));
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let err = Cli::try_parse_from(["pager", "--verbose", "--quiet", "check-config"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
