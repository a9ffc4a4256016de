// Main entry point for bamboo-reporter

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bamboo_reporter::cli::Cli;
use bamboo_reporter::commands::{self, ReplayOutcome};
use bamboo_reporter::config::Config;
use bamboo_reporter::logging;

fn main() -> Result<()> {
    // Load configuration from file (if exists)
    let config = Config::load();

    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.verbose {
        info!("Starting bamboo-reporter v{}", env!("CARGO_PKG_VERSION"));
    }

    if cli.config {
        commands::print_config(&cli, config.as_ref());
        return Ok(());
    }

    if let Some(config_file) = &cli.init_config {
        let toml_content = Config::default().to_toml();
        std::fs::write(config_file, toml_content)?;
        println!("Configuration file created: {}", config_file.display());
        return Ok(());
    }

    if let Some(shell_type) = &cli.completion {
        return commands::handle_completion(shell_type);
    }

    let args = cli.get_replay_args();
    match commands::handle_replay(&cli, args, config.as_ref())? {
        ReplayOutcome::Passed => Ok(()),
        ReplayOutcome::Failed | ReplayOutcome::Incomplete => std::process::exit(1),
    }
}
