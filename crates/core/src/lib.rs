//! Core game logic - deterministic, headless and testable
//!
//! This crate contains the game rules, the session lifecycle and the timing
//! driver. It has no dependency on terminals or I/O; a frontend reads a
//! [`GameSnapshot`] each frame and feeds [`types::InputAction`]s back in.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shape matrices and clockwise rotation
//! - [`piece`]: a falling piece: position, collision, translate and rotate
//! - [`playfield`]: the locked-cell grid, locking and line clearing
//! - [`scoring`]: line-clear scores, level progression and fall intervals
//! - [`rng`]: uniform (optionally seeded) or scripted piece selection
//! - [`config`]: playfield dimensions and starting level, validated
//! - [`game_state`]: the engine tying it all together
//! - [`dispatch`]: mode-gated mapping from input actions to engine calls
//! - [`timestep`]: fixed 16ms update steps from wall-clock time
//!
//! # Game Rules
//!
//! - Pieces spawn at column `width / 2 - 1`, row 0
//! - Rotation is clockwise only and is rejected outright when blocked
//! - A piece locks when gravity cannot move it further down, or on hard drop
//! - Clearing `k` lines at once scores `100 * k * k`
//! - The level is `lines / 10 + 1`; the fall interval starts at 500ms and
//!   shrinks by 50ms per level down to a 50ms floor
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{EngineConfig, GameState, PieceSource};
//! use tui_blockfall_core::types::{GameMode, InputAction, PieceKind};
//!
//! let source = PieceSource::scripted(vec![PieceKind::O]);
//! let mut game = GameState::with_source(EngineConfig::default(), source).unwrap();
//! assert_eq!(game.mode(), GameMode::LevelSelect);
//!
//! game.apply_action(InputAction::ConfirmStart);
//! game.apply_action(InputAction::HardDrop);
//!
//! assert_eq!(game.playfield().locked_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```

pub mod config;
pub mod dispatch;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timestep;

pub use tui_blockfall_types as types;

pub use config::{ConfigError, EngineConfig};
pub use game_state::GameState;
pub use piece::Piece;
pub use pieces::{shape_of, ShapeMatrix, CATALOG};
pub use playfield::{LockOutcome, Playfield};
pub use rng::PieceSource;
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score, seed_lines_for_level};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use timestep::FixedTimestep;
