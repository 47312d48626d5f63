//! Input mapping: discrete actions to engine calls, gated by mode.
//!
//! | Mode | Accepted actions |
//! |------|------------------|
//! | LevelSelect | `MoveLeft`/`LevelDec`, `MoveRight`/`LevelInc`, `SelectLevel(n)`, `ConfirmStart` |
//! | Playing | `MoveLeft`, `MoveRight`, `MoveDown`, `Rotate`, `HardDrop` |
//! | GameOver | `Restart` |
//!
//! Anything else is ignored.

use crate::game_state::GameState;
use crate::types::{GameMode, InputAction};

impl GameState {
    /// Apply an input action; returns whether it changed anything
    pub fn apply_action(&mut self, action: InputAction) -> bool {
        match self.mode() {
            GameMode::LevelSelect => self.apply_level_select(action),
            GameMode::Playing => self.apply_playing(action),
            GameMode::GameOver => match action {
                InputAction::Restart => self.restart(),
                _ => false,
            },
        }
    }

    fn apply_level_select(&mut self, action: InputAction) -> bool {
        let selected = self.selected_level();
        match action {
            InputAction::MoveLeft | InputAction::LevelDec => {
                self.select_level(selected.saturating_sub(1))
            }
            InputAction::MoveRight | InputAction::LevelInc => {
                self.select_level(selected.saturating_add(1))
            }
            InputAction::SelectLevel(level) => self.select_level(level),
            InputAction::ConfirmStart => {
                self.start(selected);
                true
            }
            _ => false,
        }
    }

    fn apply_playing(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MoveLeft => self.move_piece(-1, 0),
            InputAction::MoveRight => self.move_piece(1, 0),
            InputAction::MoveDown => self.move_piece(0, 1),
            InputAction::Rotate => self.rotate(),
            InputAction::HardDrop => self.hard_drop(),
            _ => false,
        }
    }
}
