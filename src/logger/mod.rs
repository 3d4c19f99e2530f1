//! Logger initialisation based on `tracing-subscriber`.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

pub mod config;
pub mod error;


pub use self::config::*;
pub use self::error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set. A disabled
/// console leaves no subscriber installed.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    if !config.console.enabled {
        return Ok(());
    }

    let filter = build_filter(&config.level);
    let use_ansi = config.console.colored && std::io::stderr().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).json())
            .try_init(),
    };

    installed.map_err(|err| LoggerError::install(err.to_string()))
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
