//! Difficulty menu: choose how many disks to play with.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_hanoi::{DiskCount, GameSession};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::center_rect;

/// State for the difficulty menu.
#[derive(Debug, Clone, Getters)]
pub struct MenuScreen {
    selected: DiskCount,
}

impl MenuScreen {
    /// Creates the menu with `selected` highlighted.
    #[instrument]
    pub fn new(selected: DiskCount) -> Self {
        debug!("Initializing MenuScreen");
        Self { selected }
    }
}

impl Screen for MenuScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Towers of Hanoi - {}", session.player_name()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let lines = vec![
            Line::from("Use arrow keys to select difficulty:"),
            Line::from(""),
            Line::styled(
                format!("◀  {} disks  ▶", self.selected),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("Minimum steps: {}", self.selected.minimum_steps()),
                Style::default().fg(Color::Green),
            ),
            Line::from(""),
            Line::from("Press ENTER to continue"),
        ];
        let picker = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Difficulty"));
        frame.render_widget(picker, center_rect(chunks[1], 42, 8));

        let help = Paragraph::new("←→/↑↓: Change disks | Enter: Start | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Right | KeyCode::Up => {
                self.selected = self.selected.increment();
                ScreenTransition::Stay
            }
            KeyCode::Left | KeyCode::Down => {
                self.selected = self.selected.decrement();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                info!(disks = self.selected.get(), "Difficulty chosen");
                ScreenTransition::StartGame(self.selected)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
