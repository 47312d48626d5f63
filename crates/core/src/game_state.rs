//! Game state module - the engine
//!
//! This module ties together the playfield, the falling pieces, the piece
//! source and the scoring rules. It owns the session lifecycle
//! (level select → playing → game over) and gravity timing.
//!
//! Every mutating call is a no-op returning `false` outside the mode it
//! belongs to; illegal moves and rotations are ordinary outcomes, never errors.

use log::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::piece::Piece;
use crate::playfield::{LockOutcome, Playfield};
use crate::rng::PieceSource;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score, seed_lines_for_level};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameMode, MAX_START_LEVEL, MIN_LEVEL};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    playfield: Playfield,
    current: Option<Piece>,
    next: Option<Piece>,
    source: PieceSource,
    mode: GameMode,
    /// Level shown on the level-select screen; survives restarts.
    selected_level: u8,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Time accumulated since the last gravity step.
    fall_timer_ms: u32,
    game_over: bool,
}

impl GameState {
    /// Create an engine waiting on the level-select screen
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let source = PieceSource::random(config.seed);
        Self::with_source(config, source)
    }

    /// Create an engine drawing pieces from `source`
    pub fn with_source(config: EngineConfig, source: PieceSource) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: EngineConfig, source: PieceSource) -> Self {
        let level = config.starting_level as u32;
        Self {
            config,
            playfield: Playfield::new(config.width, config.height),
            current: None,
            next: None,
            source,
            mode: GameMode::LevelSelect,
            selected_level: config.starting_level,
            score: 0,
            level,
            lines: seed_lines_for_level(level),
            fall_interval_ms: fall_interval_ms(level),
            fall_timer_ms: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Direct grid access for setting up scenarios (puzzles, tests)
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn selected_level(&self) -> u8 {
        self.selected_level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Set the level-select choice, clamped to the selectable range
    pub fn select_level(&mut self, level: u8) -> bool {
        if self.mode != GameMode::LevelSelect {
            return false;
        }
        let level = level.clamp(MIN_LEVEL, MAX_START_LEVEL);
        let changed = level != self.selected_level;
        self.selected_level = level;
        changed
    }

    /// Start a fresh session at `level` (clamped to 1..=10)
    ///
    /// Everything from the previous session is discarded: grid, pieces, score
    /// and timers.
    pub fn start(&mut self, level: u8) {
        let level = level.clamp(MIN_LEVEL, MAX_START_LEVEL);
        self.selected_level = level;

        self.playfield.clear();
        self.level = level as u32;
        self.lines = seed_lines_for_level(self.level);
        self.fall_interval_ms = fall_interval_ms(self.level);
        self.score = 0;
        self.fall_timer_ms = 0;
        self.game_over = false;
        self.mode = GameMode::Playing;

        let current = self.spawn_piece();
        self.next = Some(self.spawn_piece());
        self.current = Some(current);

        info!(
            "session started at level {} (fall interval {}ms)",
            self.level, self.fall_interval_ms
        );

        if current.collision(&self.playfield, 0, 0, None) {
            self.enter_game_over("spawn blocked");
        }
    }

    /// Leave the game-over screen for level select, keeping the selected level
    pub fn restart(&mut self) -> bool {
        if self.mode != GameMode::GameOver {
            return false;
        }
        self.mode = GameMode::LevelSelect;
        info!("back to level select (level {})", self.selected_level);
        true
    }

    /// Draw a kind and place it at the spawn position
    pub fn spawn_piece(&mut self) -> Piece {
        let kind = self.source.next_kind();
        trace!("spawned {}", kind.as_str());
        Piece::spawn(kind, self.playfield.width())
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Once the accumulated time exceeds the fall interval the piece moves one
    /// row down, or locks if it cannot. Returns whether a gravity step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= self.fall_interval_ms {
            return false;
        }

        if !self.move_piece(0, 1) {
            self.lock_and_advance();
        }
        self.fall_timer_ms = 0;
        true
    }

    /// Translate the current piece; false when blocked
    ///
    /// A blocked downward move does not lock the piece.
    pub fn move_piece(&mut self, dx: i16, dy: i16) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.translate(&self.playfield, dx, dy),
            None => false,
        }
    }

    /// Rotate the current piece clockwise; false when the rotation is rejected
    pub fn rotate(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        match self.current.as_mut() {
            Some(piece) => piece.rotate(&self.playfield),
            None => false,
        }
    }

    /// Drop the current piece to its resting row and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            return false;
        }
        let mut rows = 0u32;
        while self.move_piece(0, 1) {
            rows += 1;
        }
        trace!("hard drop fell {} rows", rows);
        self.lock_and_advance();
        true
    }

    /// Commit the current piece, clear lines and bring in the next piece
    ///
    /// Ends the session when the piece sticks out above the field or when the
    /// promoted piece has no room at the spawn position.
    pub fn lock_and_advance(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        if self.playfield.lock_piece(&piece) == LockOutcome::AboveField {
            self.enter_game_over("piece locked above the field");
            return;
        }
        debug!(
            "locked {} at ({}, {})",
            piece.kind.as_str(),
            piece.x,
            piece.y
        );

        let cleared = self.playfield.clear_lines();
        if cleared > 0 {
            self.apply_line_clear(cleared);
        }

        let promoted = match self.next.take() {
            Some(next) => next,
            None => self.spawn_piece(),
        };
        self.current = Some(promoted);
        self.next = Some(self.spawn_piece());

        if promoted.collision(&self.playfield, 0, 0, None) {
            self.enter_game_over("spawn blocked");
        }
    }

    fn apply_line_clear(&mut self, cleared: usize) {
        let previous_level = self.level;
        self.lines = self.lines.saturating_add(cleared as u32);
        self.score = self.score.saturating_add(line_clear_score(cleared));
        self.level = level_for_lines(self.lines);
        self.fall_interval_ms = fall_interval_ms(self.level);

        debug!(
            "cleared {} line(s): score {}, lines {}",
            cleared, self.score, self.lines
        );
        if self.level != previous_level {
            debug!(
                "level {} -> {} (fall interval {}ms)",
                previous_level, self.level, self.fall_interval_ms
            );
        }
    }

    fn enter_game_over(&mut self, reason: &str) {
        self.game_over = true;
        self.mode = GameMode::GameOver;
        info!(
            "game over ({}): score {}, level {}, lines {}",
            reason, self.score, self.level, self.lines
        );
    }

    /// Fill `out` with the renderer-facing view of the engine
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.playfield.width();
        out.height = self.playfield.height();
        out.board.clear();
        out.board.extend_from_slice(self.playfield.cells());
        out.active = self.current.map(PieceSnapshot::from);
        out.next = self.next.map(PieceSnapshot::from);
        out.mode = self.mode;
        out.game_over = self.game_over;
        out.selected_level = self.selected_level;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(EngineConfig::default(), PieceSource::default())
    }
}
