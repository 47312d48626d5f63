//! Read-only view of the engine for renderers.
//!
//! A renderer keeps one [`GameSnapshot`] and refreshes it every frame through
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into); the board
//! vector is reused between frames.

use crate::piece::Piece;
use crate::pieces::ShapeMatrix;
use crate::types::{Cell, GameMode, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i16,
    pub y: i16,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major locked cells
    pub board: Vec<Cell>,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub mode: GameMode,
    pub game_over: bool,
    pub selected_level: u8,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    /// Locked cell at (x, y); out of range reads as empty
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize {
            return Cell::Empty;
        }
        self.board
            .get(y * self.width as usize + x)
            .copied()
            .unwrap_or_default()
    }

    pub fn playable(&self) -> bool {
        self.mode == GameMode::Playing
    }
}
