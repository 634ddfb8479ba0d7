//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to commands.
///
/// Anything not listed maps to `None` and is ignored by the game loop.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Headings
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('I') => Some(Command::Up),
        KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::Down),
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::Right),

        // Actions
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reverse),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::ToggleAutopilot),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::PlayAmbientSound),

        // Restart
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
