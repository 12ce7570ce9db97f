//! Towers of Hanoi - terminal game
//!
//! Resolves who is playing, runs the game and reports the result.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use towers_of_hanoi::{
    Cli, GameConfig, JsonReporter, Prompter, ResultsReporter, SessionEnd, SummaryReporter,
    TracingReporter, deliver, resolve,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .context("Failed to load config")?
        .with_overrides(cli.overrides());

    init_logging(config.log_file())?;
    info!(config = %cli.config.display(), "Starting Towers of Hanoi");

    let params = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        resolve(cli.player_name.clone(), cli.disks.clone(), &config, &mut prompter)?
    };

    match towers_of_hanoi::run(&params, &config)? {
        SessionEnd::Won(report) => {
            let mut reporters = reporters(&config);
            let delivered = deliver(&report, &mut reporters);
            info!(delivered, "Results delivered");
        }
        SessionEnd::Quit => info!("Game ended without a result"),
    }

    Ok(())
}

/// Sends logs to a file; the terminal belongs to the game.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Reporters for a solved game: log, optional JSON file, stdout summary.
#[instrument(skip(config))]
fn reporters(config: &GameConfig) -> Vec<Box<dyn ResultsReporter>> {
    let mut reporters: Vec<Box<dyn ResultsReporter>> = vec![Box::new(TracingReporter)];
    if let Some(path) = config.results_path() {
        reporters.push(Box::new(JsonReporter::new(path.clone())));
    }
    reporters.push(Box::new(SummaryReporter::new(io::stdout())));
    reporters
}
