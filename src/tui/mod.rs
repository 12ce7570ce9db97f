//! Terminal UI for Towers of Hanoi.
//!
//! The [`GameController`] runs a fixed-rate loop over three screens
//! (difficulty menu, play, game over). It is generic over the ratatui
//! backend and the [`InputSource`], so the whole game can be driven
//! headless with a `TestBackend` and [`ScriptedInput`].

mod controller;
mod input;
mod pacing;
mod screen;
mod screens;
mod towers;

pub use controller::{GameController, SessionEnd};
pub use input::{CrosstermInput, InputSource, ScriptedInput, command_for_key, is_interrupt};
pub use pacing::FramePacer;
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameOverScreen, MenuScreen, PlayScreen, StatusKind};
pub use towers::{TowersWidget, required_height};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

use crate::config::GameConfig;
use crate::startup::StartupParams;

/// Takes over the terminal, plays one game and gives the terminal back.
///
/// The terminal is restored even when the loop fails. Restore failures
/// are logged and never replace the game's own result.
#[instrument(skip_all, fields(player = %params.player_name()))]
pub fn run(params: &StartupParams, config: &GameConfig) -> Result<SessionEnd> {
    info!("Starting Towers of Hanoi TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::from_startup(params, config);
    let res = controller.run(&mut terminal, &mut CrosstermInput);

    let steps: [RestoreStep<Terminal<CrosstermBackend<Stdout>>>; 3] = [
        ("disable raw mode", |_| disable_raw_mode()),
        ("leave alternate screen", |t| execute!(t.backend_mut(), LeaveAlternateScreen)),
        ("show cursor", |t| t.show_cursor()),
    ];
    let failed = restore_all(&mut terminal, &steps);
    if failed > 0 {
        warn!(failed, "Terminal only partially restored");
    }

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    res
}

/// A named teardown step applied to `T`.
type RestoreStep<T> = (&'static str, fn(&mut T) -> io::Result<()>);

/// Runs every step even when an earlier one fails; returns how many failed.
fn restore_all<T>(target: &mut T, steps: &[RestoreStep<T>]) -> usize {
    steps
        .iter()
        .filter(|(name, step)| match step(target) {
            Ok(()) => false,
            Err(e) => {
                warn!(step = *name, error = %e, "Terminal restore step failed");
                true
            }
        })
        .count()
}
