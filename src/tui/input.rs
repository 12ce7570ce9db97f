//! Keyboard input sources and key bindings.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;
use strictly_hanoi::Command;
use tracing::{debug, instrument};

/// Something the render loop can poll for key presses.
pub trait InputSource {
    /// Returns the next key event, waiting at most `timeout`.
    ///
    /// `Ok(None)` means nothing arrived in time.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Reads keys from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Replays a fixed list of keys, for driving the game headless.
///
/// Once the script runs dry it reports a few idle polls, then fails with
/// [`io::ErrorKind::UnexpectedEof`] so a stuck loop cannot spin forever.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<KeyEvent>,
    idle_polls: u32,
    max_idle_polls: u32,
}

impl ScriptedInput {
    /// Idle polls allowed after the script is exhausted.
    pub const DEFAULT_MAX_IDLE_POLLS: u32 = 8;

    /// Creates a script from key codes with no modifiers.
    #[instrument(skip(codes))]
    pub fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::from_events(codes.into_iter().map(KeyEvent::from))
    }

    /// Creates a script from full key events.
    pub fn from_events(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        let keys: VecDeque<KeyEvent> = events.into_iter().collect();
        debug!(keys = keys.len(), "Scripted input loaded");
        Self {
            keys,
            idle_polls: 0,
            max_idle_polls: Self::DEFAULT_MAX_IDLE_POLLS,
        }
    }

    /// Keys not yet delivered.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self, _timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if let Some(key) = self.keys.pop_front() {
            self.idle_polls = 0;
            return Ok(Some(key));
        }
        self.idle_polls += 1;
        if self.idle_polls > self.max_idle_polls {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ));
        }
        Ok(None)
    }
}

/// Maps a key on the play screen to a game command.
///
/// Left/Right move the pointer, Up picks up, Down places, `r` resets.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::PointLeft),
        KeyCode::Right => Some(Command::PointRight),
        KeyCode::Up => Some(Command::PickUp),
        KeyCode::Down => Some(Command::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        _ => None,
    }
}

/// Ctrl-C arrives as a plain key in raw mode.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_bindings() {
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::PointLeft));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::PointRight));
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::PickUp));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::Place));
        assert_eq!(command_for_key(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
        assert_eq!(command_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_interrupt_needs_control() {
        assert!(is_interrupt(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(&KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_script_replays_then_runs_dry() {
        let mut input = ScriptedInput::new([KeyCode::Up, KeyCode::Down]);
        assert_eq!(input.remaining(), 2);
        let first = input.poll_key(Duration::ZERO).unwrap().unwrap();
        assert_eq!(first.code, KeyCode::Up);
        let second = input.poll_key(Duration::ZERO).unwrap().unwrap();
        assert_eq!(second.code, KeyCode::Down);

        for _ in 0..ScriptedInput::DEFAULT_MAX_IDLE_POLLS {
            assert!(input.poll_key(Duration::ZERO).unwrap().is_none());
        }
        let err = input.poll_key(Duration::ZERO).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
