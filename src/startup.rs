//! Startup parameters: who is playing and with how many disks.
//!
//! A launcher passes both on the command line (or they come from the config
//! file). Anything missing is asked for on the terminal before the game
//! takes over the screen.

use crate::config::GameConfig;
use derive_getters::Getters;
use std::io::{self, BufRead, Write};
use strictly_hanoi::DiskCount;
use tracing::{debug, info, instrument, warn};

/// Name used when the player enters nothing.
pub const GUEST_NAME: &str = "Guest";

/// Resolved player name and disk count.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StartupParams {
    /// Name of the person playing.
    player_name: String,
    /// Disks to start with.
    disk_count: DiskCount,
    /// Both values were supplied up front, so the difficulty menu is skipped.
    launched: bool,
}

impl StartupParams {
    /// Creates startup parameters.
    pub fn new(player_name: String, disk_count: DiskCount, launched: bool) -> Self {
        Self {
            player_name,
            disk_count,
            launched,
        }
    }
}

/// Asks for missing startup values on a line-based terminal.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for the player's name; blank input means [`GUEST_NAME`].
    #[instrument(skip(self))]
    pub fn player_name(&mut self) -> io::Result<String> {
        let name = self
            .ask("Enter your name:")?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| GUEST_NAME.to_string());
        debug!(%name, "Player name entered");
        Ok(name)
    }

    /// Asks for a disk count in the recommended range until one is given.
    ///
    /// Falls back to [`DiskCount::DEFAULT`] if input ends.
    #[instrument(skip(self))]
    pub fn disk_count(&mut self) -> io::Result<DiskCount> {
        let (low, high) = (
            *DiskCount::RECOMMENDED.start(),
            *DiskCount::RECOMMENDED.end(),
        );
        let question = format!("Enter number of disks ({}-{}):", low, high);
        loop {
            let Some(answer) = self.ask(&question)? else {
                warn!("Input closed before a disk count was entered, using default");
                return Ok(DiskCount::DEFAULT);
            };
            match answer.parse::<i64>().map(DiskCount::new) {
                Ok(Ok(count)) if count.is_recommended() => return Ok(count),
                Ok(_) => writeln!(
                    self.output,
                    "Please enter a number between {} and {}.",
                    low, high
                )?,
                Err(_) => writeln!(self.output, "Invalid input, enter a number.")?,
            }
        }
    }
}

/// Parses a disk count given on the command line.
///
/// Anything that is not an integer counts as not given.
fn parse_disks(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(count) => Some(count),
        Err(e) => {
            warn!(raw, error = %e, "Ignoring malformed disk count");
            None
        }
    }
}

/// Resolves startup parameters from the command line, config and prompts.
///
/// Command-line values win over config values. A disk count supplied up
/// front is clamped into the supported range rather than rejected; one
/// that is not a number is treated as missing.
#[instrument(skip(config, prompter))]
pub fn resolve<R: BufRead, W: Write>(
    cli_name: Option<String>,
    cli_disks: Option<String>,
    config: &GameConfig,
    prompter: &mut Prompter<R, W>,
) -> io::Result<StartupParams> {
    let supplied_name = cli_name.or_else(|| config.player_name().clone());
    let supplied_disks = cli_disks
        .as_deref()
        .and_then(parse_disks)
        .or(*config.disk_count());
    let launched = supplied_name.is_some() && supplied_disks.is_some();

    let player_name = match supplied_name {
        Some(name) => name,
        None => prompter.player_name()?,
    };
    let disk_count = match supplied_disks {
        Some(count) => DiskCount::clamped(count),
        None => prompter.disk_count()?,
    };

    info!(player = %player_name, disks = disk_count.get(), launched, "Startup parameters resolved");
    Ok(StartupParams::new(player_name, disk_count, launched))
}
