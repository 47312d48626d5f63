//! Key mapping from terminal events to input actions.
//!
//! The same physical key means different things per screen (Left decrements
//! the level on the menu and moves the piece in play), so the current mode
//! is part of the lookup.

use crate::types::{GameMode, InputAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an action for the given mode.
pub fn handle_key_event(key: KeyEvent, mode: GameMode) -> Option<InputAction> {
    match mode {
        GameMode::LevelSelect => level_select_action(key.code),
        GameMode::Playing => playing_action(key.code),
        GameMode::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),
            _ => None,
        },
    }
}

fn level_select_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(InputAction::LevelDec),
        KeyCode::Right | KeyCode::Char('l') => Some(InputAction::LevelInc),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::ConfirmStart),
        KeyCode::Char('0') => Some(InputAction::SelectLevel(10)),
        KeyCode::Char(c @ '1'..='9') => Some(InputAction::SelectLevel(c as u8 - b'0')),
        _ => None,
    }
}

fn playing_action(code: KeyCode) -> Option<InputAction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(InputAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(InputAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::MoveDown),
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::Rotate),
        KeyCode::Char(' ') => Some(InputAction::HardDrop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
