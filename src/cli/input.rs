//! Keystroke input handling using crossterm
//!
//! Features:
//! - Polling bounded by the next timer deadline
//! - Unicode character support (accented country names)
//! - Per-state key bindings mapped onto game events

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

use crate::quiz::{Difficulty, Event, MachineState};

/// Longest time to block waiting for a key
const MAX_POLL: Duration = Duration::from_millis(50);

/// What a keystroke asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Game(Event),
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for a key press, waiting at most `timeout` (capped at 50ms)
    pub fn read_key(&self, timeout: Duration) -> IoResult<Option<KeyEvent>> {
        if event::poll(timeout.min(MAX_POLL))? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is Ctrl+C
    pub fn is_interrupt(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Convert key event to a plain character (no Ctrl/Alt)
    pub fn key_to_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Bindings:
    /// - everywhere: Ctrl+C quits, Tab toggles language
    /// - menu: 1-4 pick a mode, q/Esc quit
    /// - playing: type, Backspace, Enter submits, Esc pauses, Ctrl+R restarts
    /// - results: Enter plays again, q/Esc quit
    pub fn map_key(key: &KeyEvent, state: MachineState) -> Option<Action> {
        if Self::is_interrupt(key) {
            return Some(Action::Quit);
        }
        if key.code == KeyCode::Tab {
            return Some(Action::Game(Event::ToggleLanguage));
        }

        match state {
            MachineState::Idle => match key.code {
                KeyCode::Char('1') => Some(Action::Game(Event::SelectMode(Difficulty::Easy))),
                KeyCode::Char('2') => Some(Action::Game(Event::SelectMode(Difficulty::Medium))),
                KeyCode::Char('3') => Some(Action::Game(Event::SelectMode(Difficulty::Hard))),
                KeyCode::Char('4') => Some(Action::Game(Event::SelectMode(Difficulty::Expert))),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            MachineState::Countdown | MachineState::AwaitingFeedbackDisplay => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Game(Event::Abort))
                }
                KeyCode::Esc => Some(Action::Game(Event::TogglePause)),
                KeyCode::Enter => Some(Action::Game(Event::Submit)),
                KeyCode::Backspace => Some(Action::Game(Event::Erase)),
                _ => Self::key_to_char(key).map(|c| Action::Game(Event::Type(c))),
            },
            MachineState::Finished => match key.code {
                KeyCode::Enter => Some(Action::Game(Event::Restart)),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_menu_bindings() {
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Char('2')), MachineState::Idle),
            Some(Action::Game(Event::SelectMode(Difficulty::Medium)))
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Char('q')), MachineState::Idle),
            Some(Action::Quit)
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Char('x')), MachineState::Idle),
            None
        );
    }

    #[test]
    fn test_playing_bindings() {
        let state = MachineState::Countdown;
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Char('q')), state),
            Some(Action::Game(Event::Type('q')))
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Char('é')), state),
            Some(Action::Game(Event::Type('é')))
        );
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Esc), state),
            Some(Action::Game(Event::TogglePause))
        );
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(
            InputHandler::map_key(&ctrl_r, state),
            Some(Action::Game(Event::Abort))
        );
    }

    #[test]
    fn test_global_bindings() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for state in [
            MachineState::Idle,
            MachineState::Countdown,
            MachineState::Finished,
        ] {
            assert_eq!(InputHandler::map_key(&ctrl_c, state), Some(Action::Quit));
            assert_eq!(
                InputHandler::map_key(&key(KeyCode::Tab), state),
                Some(Action::Game(Event::ToggleLanguage))
            );
        }
        assert_eq!(
            InputHandler::map_key(&key(KeyCode::Enter), MachineState::Finished),
            Some(Action::Game(Event::Restart))
        );
    }
}
