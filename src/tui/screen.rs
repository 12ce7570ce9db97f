//! Screen trait and transition type for the game's state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use strictly_hanoi::{DiskCount, GameSession};

/// The result of handling a key on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](crate::tui::GameController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a fresh game with the chosen disk count.
    StartGame(DiskCount),
    /// Return to the difficulty menu.
    OpenMenu,
    /// Leave the game without a result.
    Quit,
}

/// Trait implemented by each screen.
///
/// Screens hold only presentation state. The [`GameSession`] is owned by
/// the controller and lent to the active screen for each call.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession);

    /// Handles a key press and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition;
}
