// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Collect test-run events into a flat JSON report and a Jira import report
#[derive(Parser, Debug)]
#[command(name = "bamboo-reporter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn test runner events into Bamboo and Jira JSON reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Flattened so `bamboo-reporter events.ndjson` works without naming the subcommand.
    #[command(flatten)]
    pub replay_args: ReplayArgs,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Install shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded event log and write the reports (default)
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReplayArgs {
    /// Newline-delimited JSON event log; reads stdin when omitted or "-"
    #[arg(required = false)]
    pub events: Option<PathBuf>,

    /// Primary report file (overrides MOCHA_FILE and the configuration file)
    #[arg(short = 'o', long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Slow test threshold in milliseconds
    #[arg(long, value_name = "MS")]
    pub slow: Option<u64>,
}

impl ReplayArgs {
    /// Event log path, `None` meaning stdin
    pub fn events_path(&self) -> Option<&std::path::Path> {
        self.events
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }
}

impl Cli {
    /// Helper to get effective ReplayArgs
    pub fn get_replay_args(&self) -> &ReplayArgs {
        match &self.command {
            Some(Commands::Replay(args)) => args,
            None => &self.replay_args,
        }
    }
}
