//! Towers of Hanoi - terminal game
//!
//! Move every disk from the Start tower to the Finish tower, one disk at a
//! time, in as few steps as possible.
//!
//! # Architecture
//!
//! - **Rules**: the [`strictly_hanoi`] crate owns the board, the placement
//!   rules and the [`GameSession`] aggregate
//! - **Startup**: player name and disk count from the command line, the
//!   config file or terminal prompts
//! - **TUI**: a ratatui render loop over menu, play and game-over screens
//! - **Reporting**: the final [`GameReport`] handed to pluggable reporters
//!
//! # Example
//!
//! ```
//! use ratatui::{Terminal, backend::TestBackend};
//! use std::time::Duration;
//! use towers_of_hanoi::{GameController, ScriptedInput, SessionEnd};
//! use towers_of_hanoi::{DiskCount, GameSession, PlacementPolicy};
//! use crossterm::event::KeyCode;
//!
//! # fn main() -> anyhow::Result<()> {
//! let session = GameSession::new("Ada", DiskCount::clamped(1), PlacementPolicy::Strict);
//! let mut controller = GameController::new(session, 1000, Duration::ZERO, true);
//! let mut terminal = Terminal::new(TestBackend::new(60, 24))?;
//! let mut input = ScriptedInput::new([KeyCode::Up, KeyCode::Left, KeyCode::Down]);
//!
//! let end = controller.run(&mut terminal, &mut input)?;
//! assert_eq!(end.report().map(|r| *r.steps()), Some(1));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;
mod startup;
mod tui;

// Crate-level exports - command line and configuration
pub use cli::Cli;
pub use config::{ConfigError, ConfigOverrides, GameConfig};

// Crate-level exports - startup
pub use startup::{GUEST_NAME, Prompter, StartupParams, resolve};

// Crate-level exports - terminal UI
pub use tui::{
    CrosstermInput, FramePacer, GameController, GameOverScreen, InputSource, MenuScreen,
    PlayScreen, Screen, ScreenTransition, ScriptedInput, SessionEnd, StatusKind, TowersWidget,
    command_for_key, is_interrupt, required_height, run,
};

// Crate-level exports - results reporting
pub use report::{
    JsonReporter, ReportError, ResultsReporter, SummaryReporter, TracingReporter, deliver,
};

// Crate-level exports - game rules
pub use strictly_hanoi::{
    Command, Disk, DiskCount, GameReport, GameSession, MoveError, MoveEvent, PlacementPolicy,
    SessionStats, TowerIndex,
};
