//! Command-line entry point: print the default legend or resolve class names.

use std::process::ExitCode;

use class_colors::{Cli, init_logging, write_colors};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The log level lives in the config, so logging starts once it is read
    let config = cli.load_config();
    init_logging(config.as_ref().map(|c| c.log_level).unwrap_or_default());

    let config = match config {
        Ok(config) => {
            if let Some(path) = &cli.config {
                log::info!(
                    "Loaded palette configuration from {:?} ({} overrides)",
                    path,
                    config.overrides.len()
                );
            }
            config
        }
        Err(e) => {
            log::error!("Failed to load palette configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = write_colors(&config, &cli.classes, &mut stdout.lock()) {
        eprintln!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
