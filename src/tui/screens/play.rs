//! Play screen: the towers, the pointer and the step counter.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_hanoi::{GameSession, MoveEvent};
use tracing::{debug, info, instrument, warn};

use crate::tui::input::command_for_key;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::center_rect;
use crate::tui::towers::{TowersWidget, required_height};

/// Widest the tower drawing gets; wider terminals just add margin.
const TOWERS_MAX_WIDTH: u16 = 60;

/// How the status line should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral feedback.
    Info,
    /// A refused or ignored command.
    Warning,
}

/// State for the play screen.
#[derive(Debug, Clone, Getters)]
pub struct PlayScreen {
    status: String,
    status_kind: StatusKind,
}

impl PlayScreen {
    /// Creates the play screen with a welcome line for `player_name`.
    #[instrument]
    pub fn new(player_name: &str) -> Self {
        debug!("Initializing PlayScreen");
        Self {
            status: format!("Enjoy Towers of Hanoi, {}!", player_name),
            status_kind: StatusKind::Info,
        }
    }

    fn show(&mut self, status: String, kind: StatusKind) {
        self.status = status;
        self.status_kind = kind;
    }
}

impl Screen for PlayScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let towers_height = required_height(session.disk_count().get());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(towers_height),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Towers of Hanoi - {}", session.player_name()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let counter = Paragraph::new(format!(
            "Steps: {}   Minimum: {}   Disks: {}   Rules: {}",
            session.step_count(),
            session.minimum_steps(),
            session.disk_count(),
            session.policy()
        ))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(counter, chunks[1]);

        let towers_area = center_rect(
            chunks[2],
            chunks[2].width.min(TOWERS_MAX_WIDTH),
            towers_height,
        );
        frame.render_widget(TowersWidget::new(session), towers_area);

        let status_color = match self.status_kind {
            StatusKind::Info => Color::Yellow,
            StatusKind::Warning => Color::Red,
        };
        let status = Paragraph::new(self.status.as_str())
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[3]);

        let help = Paragraph::new(
            "←→: Move | ↑: Pick up | ↓: Place | r: Reset | Esc: Menu | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return ScreenTransition::Quit,
            KeyCode::Esc => {
                info!("Returning to menu");
                session.reset();
                return ScreenTransition::OpenMenu;
            }
            _ => {}
        }

        let Some(command) = command_for_key(key.code) else {
            return ScreenTransition::Stay;
        };

        match session.apply(command) {
            Ok(MoveEvent::Pointed { .. }) => {}
            Ok(event @ MoveEvent::Ignored(_)) => self.show(event.to_string(), StatusKind::Warning),
            Ok(event) => self.show(event.to_string(), StatusKind::Info),
            Err(e) => {
                warn!(error = %e, "Move refused");
                self.show(e.to_string(), StatusKind::Warning);
            }
        }
        ScreenTransition::Stay
    }
}
