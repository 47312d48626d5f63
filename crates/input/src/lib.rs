//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputAction`]s for the
//! current [`crate::types::GameMode`]. Filtering out key-release and repeat
//! events is left to the caller.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
