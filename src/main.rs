use clap::Parser;

use pager_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            std::process::exit(1);
        }
    };

    init_logger_from_settings(&settings)?;
    tracing::debug!(application = %settings.application.name, "settings loaded");

    match execute_command(&cli, &settings) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
