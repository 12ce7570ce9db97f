//! Game controller: the render loop and screen state machine.

use std::time::Duration;

use crossterm::event::KeyEventKind;
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use strictly_hanoi::{GameReport, GameSession};
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::startup::StartupParams;
use crate::tui::input::{InputSource, is_interrupt};
use crate::tui::pacing::FramePacer;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{GameOverScreen, MenuScreen, PlayScreen};

/// How a run of the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The puzzle was solved.
    Won(GameReport),
    /// The player left before solving it.
    Quit,
}

impl SessionEnd {
    /// The report, if the puzzle was solved.
    pub fn report(&self) -> Option<&GameReport> {
        match self {
            SessionEnd::Won(report) => Some(report),
            SessionEnd::Quit => None,
        }
    }
}

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Menu(MenuScreen),
    Play(PlayScreen),
    GameOver(GameOverScreen),
}

impl ActiveScreen {
    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Play(s) => s,
            ActiveScreen::GameOver(s) => s,
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Menu(s) => s,
            ActiveScreen::Play(s) => s,
            ActiveScreen::GameOver(s) => s,
        }
    }
}

/// Controller that owns the session and drives the screens.
///
/// Call [`GameController::run`] to start the loop.
#[derive(Debug, Getters)]
pub struct GameController {
    session: GameSession,
    frame_rate: u32,
    game_over_pause: Duration,
    skip_menu: bool,
}

impl GameController {
    /// Creates a controller around an existing session.
    #[instrument(skip(session), fields(player = %session.player_name()))]
    pub fn new(
        session: GameSession,
        frame_rate: u32,
        game_over_pause: Duration,
        skip_menu: bool,
    ) -> Self {
        info!("Creating GameController");
        Self {
            session,
            frame_rate,
            game_over_pause,
            skip_menu,
        }
    }

    /// Creates a controller from resolved startup values and config.
    ///
    /// A launched game starts straight on the play screen.
    pub fn from_startup(params: &StartupParams, config: &GameConfig) -> Self {
        let session = GameSession::new(
            params.player_name().clone(),
            *params.disk_count(),
            *config.placement_policy(),
        );
        Self::new(
            session,
            *config.frame_rate(),
            Duration::from_millis(*config.game_over_pause_ms()),
            *params.launched(),
        )
    }

    /// Runs the loop until the puzzle is solved or the player quits.
    ///
    /// Each frame draws the active screen, applies every pending key, then
    /// checks for a win. A win shows the results for the configured pause
    /// before returning [`SessionEnd::Won`].
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading input fails.
    #[instrument(skip(self, terminal, input))]
    pub fn run<B: Backend, I: InputSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &mut I,
    ) -> anyhow::Result<SessionEnd>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!(frame_rate = self.frame_rate, "Starting game loop");
        let mut pacer = FramePacer::new(self.frame_rate);
        let mut screen = if self.skip_menu {
            ActiveScreen::Play(PlayScreen::new(self.session.player_name()))
        } else {
            ActiveScreen::Menu(MenuScreen::new(self.session.disk_count()))
        };

        loop {
            terminal.draw(|f| screen.as_screen().render(f, &self.session))?;

            while let Some(key) = input.poll_key(Duration::ZERO)? {
                // Some platforms report releases too; only presses count.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_interrupt(&key) {
                    info!("Interrupted");
                    return Ok(SessionEnd::Quit);
                }

                let transition = screen.as_screen_mut().handle_key(key, &mut self.session);
                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!(steps = self.session.step_count(), "Player quit");
                        return Ok(SessionEnd::Quit);
                    }
                };

                if self.session.check_win() {
                    break;
                }
            }

            if let ActiveScreen::Play(_) = screen {
                if let Some(report) = self.session.report() {
                    return self.finish(terminal, report);
                }
            }

            pacer.wait();
        }
    }

    /// Shows the results, holds them on screen, then ends the session.
    #[instrument(skip(self, terminal, report), fields(steps = report.steps()))]
    fn finish<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        report: GameReport,
    ) -> anyhow::Result<SessionEnd>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!(
            steps = report.steps(),
            minimum_steps = report.minimum_steps(),
            "Puzzle solved"
        );
        let screen = ActiveScreen::GameOver(GameOverScreen::new(report.clone()));
        terminal.draw(|f| screen.as_screen().render(f, &self.session))?;
        std::thread::sleep(self.game_over_pause);
        Ok(SessionEnd::Won(report))
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::StartGame(disk_count) => {
                debug!(disks = disk_count.get(), "Navigating to Play");
                self.session.restart(disk_count);
                Some(ActiveScreen::Play(PlayScreen::new(self.session.player_name())))
            }
            ScreenTransition::OpenMenu => {
                debug!("Navigating to Menu");
                Some(ActiveScreen::Menu(MenuScreen::new(self.session.disk_count())))
            }
            ScreenTransition::Quit => None,
        }
    }
}
