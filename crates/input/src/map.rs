//! Key mapping from terminal events to driver actions.

use crate::types::DriverAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to driver actions.
pub fn handle_key_event(key: KeyEvent) -> Option<DriverAction> {
    match key.code {
        // Pause / resume
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(DriverAction::Pause),

        // Single step while paused
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(DriverAction::Step)
        }

        // Speed
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(DriverAction::Faster),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') => Some(DriverAction::Slower),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(DriverAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the run.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
