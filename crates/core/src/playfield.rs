//! Playfield module - manages the locked-cell grid
//!
//! The playfield is a `width x height` grid where each cell is empty or holds
//! the color of a locked piece. Cells are stored in a flat row-major vector.
//! Coordinates: (x, y) where x grows to the right and y grows downwards; row 0
//! is the top row.
//!
//! The grid is only mutated by locking a piece and by clearing full rows; its
//! dimensions never change after construction.

use crate::piece::Piece;
use crate::pieces::ShapeMatrix;
use crate::types::{Cell, PieceKind};

/// Result of committing a piece to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// All filled cells were written
    Locked,
    /// At least one filled cell is above row 0; nothing was written
    AboveField,
}

/// The locked-cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    width: u8,
    height: u8,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an empty playfield
    ///
    /// Sizes are range-checked by `EngineConfig`; a zero dimension gives a
    /// field with no cells and no rows to clear.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and holds a locked cell
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Cell::Locked(_)))
    }

    /// Whether every cell of row `y` is locked
    pub fn is_row_full(&self, y: usize) -> bool {
        self.width > 0
            && self
                .row(y)
                .is_some_and(|row| row.iter().all(|cell| cell.is_locked()))
    }

    /// Indices of full rows, ascending
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Collision test for `matrix` with its top-left corner at (x, y)
    ///
    /// A filled cell collides when it is left of column 0, right of the last
    /// column, below the last row, or on a locked cell. Cells above row 0 only
    /// skip the occupancy check; the horizontal bounds still apply.
    pub fn collides(&self, matrix: &ShapeMatrix, x: i16, y: i16) -> bool {
        matrix.filled_cells().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            px < 0
                || px >= self.width as i16
                || py >= self.height as i16
                || (py >= 0 && self.is_occupied(px, py))
        })
    }

    /// Write a piece's filled cells into the grid
    ///
    /// If any filled cell lies above row 0 the lock is refused and the grid is
    /// left untouched: the stack has reached the top.
    pub fn lock_piece(&mut self, piece: &Piece) -> LockOutcome {
        let cells = piece.cells();
        if cells.iter().any(|&(_, y)| y < 0) {
            return LockOutcome::AboveField;
        }
        for &(x, y) in &cells {
            self.set(x, y, Cell::Locked(piece.kind));
        }
        LockOutcome::Locked
    }

    /// Remove all full rows and return how many were removed
    ///
    /// Remaining rows keep their relative order and settle at the bottom; the
    /// same number of empty rows appears at the top. Single compaction pass,
    /// bottom to top, without allocating.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill a whole row with one color (scenario setup helper)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        self.cells[y * width..(y + 1) * width].fill(Cell::Locked(kind));
        true
    }

    /// Number of locked cells
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_locked()).count()
    }
}
