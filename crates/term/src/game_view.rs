//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot, ShapeMatrix};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameMode, InputAction, PieceKind, MAX_START_LEVEL, MIN_LEVEL};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Piece color, keyed by kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(255, 0, 255),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
    }
}

const FIELD_BG: Rgb = Rgb::new(20, 20, 28);
const GRAY: Rgb = Rgb::new(128, 128, 128);
const HIGHLIGHT: Rgb = Rgb::new(0, 255, 255);

const BLOCK: char = '█';
const EMPTY: char = '·';

/// Side panel: a gap, then the NEXT box (4 cells plus border).
const PANEL_GAP: u16 = 2;
const PREVIEW_CELLS: u16 = 4;

/// Width of one level button on the menu.
const LEVEL_BUTTON_W: u16 = 4;
const START_LABEL: &str = "[  START  ]";

/// Widest supported board cell, in terminal columns.
pub const MAX_CELL_W: u16 = 4;

const MENU_CONTROLS: [&str; 3] = [
    "Controls: Arrow Keys to move, Up to rotate, Space to drop",
    "Press R to restart after game over",
    "Left/Right or 0-9 to choose a level, Q to quit",
];

/// A lightweight terminal renderer for the game screens.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Render the current screen into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match snap.mode {
            GameMode::LevelSelect => self.draw_level_select(fb, snap, viewport),
            GameMode::Playing => {
                self.draw_session(fb, snap, viewport);
            }
            GameMode::GameOver => {
                let (x, y, w, h) = self.draw_session(fb, snap, viewport);
                self.draw_game_over(fb, x, y, w, h);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Map a mouse click at (`col`, `row`) to a menu action
    ///
    /// Only the level-select screen has clickable buttons: a level button
    /// yields `SelectLevel(n)`, the START button `ConfirmStart`.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<InputAction> {
        if snap.mode != GameMode::LevelSelect {
            return None;
        }
        let menu = MenuLayout::new(viewport);
        if row == menu.levels_y {
            return (MIN_LEVEL..=MAX_START_LEVEL)
                .find(|&level| {
                    let x = menu.level_x(level);
                    (x..x.saturating_add(LEVEL_BUTTON_W)).contains(&col)
                })
                .map(InputAction::SelectLevel);
        }
        let start = menu.start_x..menu.start_x.saturating_add(menu.start_w);
        if row == menu.start_y && start.contains(&col) {
            return Some(InputAction::ConfirmStart);
        }
        None
    }

    fn draw_level_select(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let title = CellStyle::new(HIGHLIGHT, Rgb::BLACK).bold();
        let text = CellStyle::new(Rgb::WHITE, Rgb::BLACK);
        let hint = text.dim();

        let menu = MenuLayout::new(viewport);
        let top = menu.top;
        let w = viewport.width;

        fb.put_str_centered(0, w, top, "B L O C K F A L L", title);
        fb.put_str_centered(0, w, top + 2, "Select Starting Level (1-10):", text);

        for level in MIN_LEVEL..=MAX_START_LEVEL {
            let x = menu.level_x(level);
            let style = if level == snap.selected_level {
                CellStyle::new(Rgb::BLACK, HIGHLIGHT).bold()
            } else {
                CellStyle::new(Rgb::WHITE, GRAY)
            };
            fb.fill_rect(x, menu.levels_y, LEVEL_BUTTON_W, 1, ' ', style);
            let digits = if level >= 10 { 2 } else { 1 };
            fb.put_u32(x + (LEVEL_BUTTON_W - digits) / 2, menu.levels_y, level as u32, style);
        }

        let start = CellStyle::new(Rgb::BLACK, Rgb::WHITE).bold();
        fb.put_str(menu.start_x, menu.start_y, START_LABEL, start);
        fb.put_str_centered(0, w, menu.start_y + 1, "Enter, Space or click", hint);

        for (i, line) in MENU_CONTROLS.iter().enumerate() {
            fb.put_str_centered(0, w, top + 10 + i as u16, line, text);
        }
    }

    /// Draw the field and side panel; returns the field frame rect.
    fn draw_session(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) -> (u16, u16, u16, u16) {
        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 + 2;
        let panel_w = PANEL_GAP + PREVIEW_CELLS * self.cell_w + 2;

        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::WHITE, Rgb::BLACK);
        let empty = CellStyle::new(Rgb::new(70, 70, 80), FIELD_BG).dim();

        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for y in 0..snap.height as usize {
            for x in 0..snap.width as usize {
                match snap.cell(x, y).kind() {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x as i16, y as i16, kind),
                    None => self.fill_cell(fb, start_x, start_y, x as u16, y as u16, EMPTY, empty),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_active(fb, snap, start_x, start_y, &active);
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + PANEL_GAP, start_y);
        (start_x, start_y, frame_w, frame_h)
    }

    fn draw_active(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        active: &PieceSnapshot,
    ) {
        for (dx, dy) in active.matrix.filled_cells() {
            let x = active.x + dx;
            let y = active.y + dy;
            if x >= 0 && y >= 0 && x < snap.width as i16 && y < snap.height as i16 {
                self.draw_block(fb, start_x, start_y, x, y, active.kind);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i16, y: i16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), FIELD_BG).bold();
        self.fill_cell(fb, start_x, start_y, x as u16, y as u16, BLOCK, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, top: u16) {
        if panel_x >= fb.width() {
            return;
        }

        let label = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        fb.put_str(panel_x, top, "NEXT", label);
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS + 2;
        fb.draw_box(panel_x, top + 1, box_w, box_h, value);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x + 1, top + 2, &next.matrix, next.kind);
        }

        let mut y = top + 1 + box_h + 1;
        for (name, amount) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, amount, value);
            y += 3;
        }
    }

    /// Draw `matrix` centered inside the preview area.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, matrix: &ShapeMatrix, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), Rgb::BLACK).bold();
        let off_x = (PREVIEW_CELLS - matrix.cols() as u16) * self.cell_w / 2;
        let off_y = (PREVIEW_CELLS - matrix.rows() as u16) / 2;
        for (dx, dy) in matrix.filled_cells() {
            let px = x + off_x + dx as u16 * self.cell_w;
            let py = y + off_y + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let mid = y + h / 2;
        let banner = CellStyle::new(Rgb::new(255, 0, 0), Rgb::BLACK).bold();
        let hint = CellStyle::new(Rgb::WHITE, Rgb::BLACK);
        fb.put_str_centered(x, w, mid.saturating_sub(1), " GAME OVER ", banner);
        fb.put_str_centered(x, w, mid + 1, " Press R to restart ", hint);
    }
}

/// Positions of the level-select widgets for a viewport.
struct MenuLayout {
    top: u16,
    levels_y: u16,
    levels_x: u16,
    start_x: u16,
    start_y: u16,
    start_w: u16,
}

impl MenuLayout {
    fn new(viewport: Viewport) -> Self {
        let content_h = 10 + MENU_CONTROLS.len() as u16;
        let top = viewport.height.saturating_sub(content_h) / 2;

        let levels = (MAX_START_LEVEL - MIN_LEVEL + 1) as u16;
        let row_w = levels * LEVEL_BUTTON_W + (levels - 1);
        let start_w = START_LABEL.chars().count() as u16;

        Self {
            top,
            levels_y: top + 4,
            levels_x: viewport.width.saturating_sub(row_w) / 2,
            start_x: viewport.width.saturating_sub(start_w) / 2,
            start_y: top + 6,
            start_w,
        }
    }

    /// Left edge of the button for `level`
    fn level_x(&self, level: u8) -> u16 {
        self.levels_x
            .saturating_add((level - MIN_LEVEL) as u16 * (LEVEL_BUTTON_W + 1))
    }
}
