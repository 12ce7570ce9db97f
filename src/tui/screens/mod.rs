//! Screen implementations for the game's state machine.

mod game_over;
mod menu;
mod play;

pub use game_over::GameOverScreen;
pub use menu::MenuScreen;
pub use play::{PlayScreen, StatusKind};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a `width` x `height` rectangle inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
