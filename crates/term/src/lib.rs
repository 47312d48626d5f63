//! Terminal renderer for the game.
//!
//! A small, game-oriented rendering layer: [`GameView`] turns a
//! [`core::GameSnapshot`] into a [`FrameBuffer`] of styled characters, and
//! [`TerminalRenderer`] flushes that buffer to the terminal, rewriting only
//! what changed. Board cells are two columns wide to keep them square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
