//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the key mapper and
//! the terminal renderer. Everything here is plain data with no external
//! dependencies.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9), configurable in `MIN_WIDTH..=MAX_WIDTH`
//! - **Height**: 20 rows by default (indexed 0-19), configurable in `MIN_HEIGHT..=MAX_HEIGHT`
//! - **Spawn position**: `(width / 2 - 1, 0)`, the top-left of the piece's bounding box
//!
//! # Level and Gravity
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 Hz) |
//! | `BASE_FALL_INTERVAL_MS` | 500 | Gravity at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_FALL_INTERVAL_MS` | 50 | Gravity floor (reached at level 10) |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Cell, InputAction, PieceKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.index(), 2);
//!
//! let cell = Cell::Locked(kind);
//! assert!(cell.is_locked());
//!
//! assert_eq!(InputAction::from_str("hardDrop"), Some(InputAction::HardDrop));
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Default playfield width in cells
pub const DEFAULT_WIDTH: u8 = 10;

/// Default playfield height in cells
pub const DEFAULT_HEIGHT: u8 = 20;

/// Narrowest playfield that still fits a horizontal I piece at the spawn column
pub const MIN_WIDTH: u8 = 6;

/// Widest supported playfield
pub const MAX_WIDTH: u8 = 64;

/// Shortest playfield that still fits a vertical I piece
pub const MIN_HEIGHT: u8 = 4;

/// Tallest supported playfield
pub const MAX_HEIGHT: u8 = 64;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Lowest level
pub const MIN_LEVEL: u8 = 1;

/// Highest level selectable as a starting level
pub const MAX_START_LEVEL: u8 = 10;

/// Cleared lines per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity interval at level 1
pub const BASE_FALL_INTERVAL_MS: u32 = 500;

/// Gravity interval decrease per level
pub const FALL_INTERVAL_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_FALL_INTERVAL_MS: u32 = 50;

/// Score unit for line clears; a clear of `k` rows awards `k * k * LINE_CLEAR_BASE_SCORE`
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;


/// The seven piece kinds
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, 4x1 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
///
/// The kind doubles as the color identifier of a locked cell. Mapping it to an
/// actual color or texture is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position in the catalog (0..7), also used as the color id
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::J => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::index`]
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the playfield
///
/// A cell is either empty or holds exactly one locked color, identified by the
/// kind of the piece that was locked there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Locked(PieceKind),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Cell::Locked(_))
    }

    /// Color id of a locked cell
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Locked(kind) => Some(*kind),
        }
    }
}

/// Engine mode
///
/// ```text
/// LevelSelect --start--> Playing --top out--> GameOver --restart--> LevelSelect
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Choosing a starting level
    #[default]
    LevelSelect,
    /// A session is running
    Playing,
    /// The stack reached the top; only a restart is accepted
    GameOver,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::LevelSelect => "levelSelect",
            GameMode::Playing => "playing",
            GameMode::GameOver => "gameOver",
        }
    }
}

/// Discrete input actions accepted by the engine
///
/// Which actions are honoured depends on the current [`GameMode`]; the rest
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move the piece one cell left (level select: previous level)
    MoveLeft,
    /// Move the piece one cell right (level select: next level)
    MoveRight,
    /// Move the piece one cell down
    MoveDown,
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Drop the piece to its resting row and lock it
    HardDrop,
    /// Start a session at the selected level
    ConfirmStart,
    /// Leave the game-over screen for level select
    Restart,
    /// Select the next level
    LevelInc,
    /// Select the previous level
    LevelDec,
    /// Select a level directly (e.g. from a clicked level button)
    SelectLevel(u8),
}

impl InputAction {
    /// Parse a unit action from its camelCase name (case-insensitive)
    ///
    /// `SelectLevel` carries a value and has no string form.
    ///
    /// ```
    /// use tui_blockfall_types::InputAction;
    ///
    /// assert_eq!(InputAction::from_str("moveLeft"), Some(InputAction::MoveLeft));
    /// assert_eq!(InputAction::from_str("ROTATE"), Some(InputAction::Rotate));
    /// assert_eq!(InputAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(InputAction::MoveLeft),
            "moveright" => Some(InputAction::MoveRight),
            "movedown" => Some(InputAction::MoveDown),
            "rotate" => Some(InputAction::Rotate),
            "harddrop" => Some(InputAction::HardDrop),
            "confirmstart" => Some(InputAction::ConfirmStart),
            "restart" => Some(InputAction::Restart),
            "levelinc" => Some(InputAction::LevelInc),
            "leveldec" => Some(InputAction::LevelDec),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputAction::MoveLeft => "moveLeft",
            InputAction::MoveRight => "moveRight",
            InputAction::MoveDown => "moveDown",
            InputAction::Rotate => "rotate",
            InputAction::HardDrop => "hardDrop",
            InputAction::ConfirmStart => "confirmStart",
            InputAction::Restart => "restart",
            InputAction::LevelInc => "levelInc",
            InputAction::LevelDec => "levelDec",
            InputAction::SelectLevel(_) => "selectLevel",
        }
    }
}
