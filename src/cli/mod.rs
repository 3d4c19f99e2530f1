//! Command-line interface
//!
//! Parsing with clap, settings loading with CLI overrides, and command
//! execution.

pub mod executor;
pub mod parser;
pub mod validation;

pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment};

use crate::config::{ConfigLoader, Settings};
use crate::error::AppResult;
use crate::logger::{LoggerConfig, init_logger};

/// Load settings, applying `--config` and `--env` over the environment
/// variables, then the `--verbose` / `--quiet` log level.
pub fn load_and_merge_config(cli: &Cli) -> AppResult<Settings> {
    let mut loader = ConfigLoader::new()?;

    if let Some(path) = &cli.config {
        loader = loader.with_config_file(path);
    }
    if let Some(env) = cli.env {
        loader = loader.with_environment(env.into());
    }

    let mut settings = loader.load()?;
    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }

    Ok(settings)
}

pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let config: LoggerConfig = settings.logger.clone().into_logger_config()?;
    init_logger(config)?;
    Ok(())
}
