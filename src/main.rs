use clap::Parser;
use std::process;

use chartgate_cli::{cli::Cli, config};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = chartgate_cli::run_command(cli.command, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
