// Replay command - fold a recorded event log into the reports

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::{info, warn};

use crate::cli::{Cli, ReplayArgs};
use crate::config::{self, Config, OutputPaths};
use crate::events::read_events;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::session::ReportSession;

/// Outcome of a replay, used for the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Reports written, no failing tests
    Passed,
    /// Reports written, at least one failing test
    Failed,
    /// The log ended before the run did; nothing was written
    Incomplete,
}

pub fn handle_replay(cli: &Cli, args: &ReplayArgs, config: Option<&Config>) -> Result<ReplayOutcome> {
    let paths = OutputPaths::resolve(args.output.as_deref(), config);
    let progress = config.map(|c| c.progress.clone()).unwrap_or_default();
    let color = progress.color && !cli.no_color;
    let slow = args.slow.unwrap_or(progress.slow);

    info!(
        "Writing reports to {} and {}",
        paths.primary.display(),
        paths.jira.display()
    );

    let reader: Box<dyn BufRead> = match args.events_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open event log: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    replay_from(reader, paths, color, slow)
}

/// Replay events from `reader` through a console reporter and the JSON reporter.
pub fn replay_from<R: BufRead>(
    reader: R,
    paths: OutputPaths,
    color: bool,
    slow: u64,
) -> Result<ReplayOutcome> {
    let reporters: Vec<Box<dyn Reporter>> = vec![
        Box::new(ConsoleReporter::new(color, slow)),
        Box::new(JsonReporter::new(paths)),
    ];
    let mut session = ReportSession::new(reporters);

    session.replay(read_events(reader))?;

    if !session.is_finished() {
        warn!("Event log ended before the run finished; no report written");
        return Ok(ReplayOutcome::Incomplete);
    }

    if session.collector().all_passed() {
        Ok(ReplayOutcome::Passed)
    } else {
        Ok(ReplayOutcome::Failed)
    }
}

/// Print the effective configuration
pub fn print_config(cli: &Cli, config: Option<&Config>) {
    let args = cli.get_replay_args();
    let paths = OutputPaths::resolve(args.output.as_deref(), config);

    println!("Current configuration:");
    println!("    Report file: {}", paths.primary.display());
    println!("    Jira report file: {}", paths.jira.display());

    match config {
        Some(cfg) => {
            println!("\n  Configuration file loaded:");
            println!("    Output file: {}", cfg.output.file);
            println!(
                "    Color: {}",
                if cfg.progress.color {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!("    Slow threshold: {}ms", cfg.progress.slow);
        }
        None => println!("\n  No configuration file loaded"),
    }

    println!("\n  Environment variables:");
    match std::env::var(config::ENV_MOCHA_FILE) {
        Ok(file) => println!("    {}: {}", config::ENV_MOCHA_FILE, file),
        Err(_) => println!(
            "    {}: not set (default: {})",
            config::ENV_MOCHA_FILE,
            config::default_output_file()
        ),
    }

    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Environment variables");
    println!("  3. Configuration file");
    println!("  4. Built-in defaults (lowest)");
}
