//! Intact CLI Binary
//!
//! Command-line interface for building and comparing filesystem integrity
//! baselines. Exits 0 on success, non-zero on any fatal failure.

use clap::Parser;
use intact::cli::{self, Cli};
use intact::config::IntactConfig;
use intact::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match IntactConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Intact CLI starting");

    match cli::execute(&cli.command, &config) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Logging is off unless --verbose is passed; the config file then sets
/// level, format, and destination.
fn build_logging_config(cli: &Cli, config: &IntactConfig) -> LoggingConfig {
    if !cli.verbose {
        let mut logging = LoggingConfig::default();
        logging.level = "off".to_string();
        return logging;
    }
    config.logging.clone()
}
