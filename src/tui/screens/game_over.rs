//! Game-over screen shown briefly once the puzzle is solved.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_hanoi::{GameReport, GameSession};
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::center_rect;

/// Final results, displayed while the controller pauses before exiting.
#[derive(Debug, Clone, Getters)]
pub struct GameOverScreen {
    report: GameReport,
}

impl GameOverScreen {
    /// Creates the screen for a finished game.
    #[instrument(skip(report), fields(steps = report.steps()))]
    pub fn new(report: GameReport) -> Self {
        debug!("Initializing GameOverScreen");
        Self { report }
    }

    /// The lines shown in the results box.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                "You Won!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!("Your Steps: {}", self.report.steps())),
            Line::from(format!("Minimum Steps: {}", self.report.minimum_steps())),
        ];
        if *self.report.optimal() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "You finished in minimum steps!",
                Style::default().fg(Color::Yellow),
            ));
        }
        lines
    }
}

impl Screen for GameOverScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let block = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.report.player_name().as_str()),
            );
        frame.render_widget(block, center_rect(frame.area(), 40, height));
    }

    /// Input is ignored while the results are up.
    fn handle_key(&mut self, _key: KeyEvent, _session: &mut GameSession) -> ScreenTransition {
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::{DiskCount, SessionStats};

    fn text(screen: &GameOverScreen) -> Vec<String> {
        screen.lines().iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_optimal_result_is_celebrated() {
        let stats = SessionStats::new("Ada".to_string(), DiskCount::DEFAULT, 7);
        let report = GameReport::from_stats(stats);
        let lines = text(&GameOverScreen::new(report));
        assert_eq!(lines[0], "You Won!");
        assert!(lines.contains(&"Your Steps: 7".to_string()));
        assert!(lines.contains(&"Minimum Steps: 7".to_string()));
        assert!(lines.contains(&"You finished in minimum steps!".to_string()));
    }

    #[test]
    fn test_slow_result_has_no_praise() {
        let stats = SessionStats::new("Ada".to_string(), DiskCount::DEFAULT, 9);
        let report = GameReport::from_stats(stats);
        let lines = text(&GameOverScreen::new(report));
        assert!(lines.contains(&"Your Steps: 9".to_string()));
        assert!(!lines.iter().any(|line| line.contains("minimum steps!")));
    }
}
