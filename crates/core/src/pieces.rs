//! Pieces module - the shape catalog and matrix rotation
//!
//! Every shape is a small boolean matrix (at most 4x4) whose bounding box is
//! exactly the shape's extent. Rotation is a plain clockwise
//! transpose-and-reverse of that matrix; there is no rotation center and no
//! kick table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest row or column count of any shape matrix
pub const MAX_SPAN: usize = 4;

/// Offset of a filled cell relative to the matrix's top-left corner, as `(dx, dy)`
pub type CellOffset = (i16, i16);

/// Filled cells of a matrix, stack-allocated
pub type FilledCells = ArrayVec<CellOffset, { MAX_SPAN * MAX_SPAN }>;

/// An immutable `rows x cols` boolean matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SPAN]; MAX_SPAN],
}

impl ShapeMatrix {
    /// Build a matrix from `0`/`1` rows
    ///
    /// Panics (at compile time for `const` items) if either dimension is zero
    /// or exceeds [`MAX_SPAN`].
    pub const fn from_rows<const R: usize, const C: usize>(src: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SPAN && C > 0 && C <= MAX_SPAN);
        let mut bits = [[false; MAX_SPAN]; MAX_SPAN];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                bits[r][c] = src[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            bits,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at `(row, col)` is filled; out of range reads as empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Rotate 90° clockwise
    ///
    /// For an `R x C` matrix the result is `C x R` with
    /// `new[c][R - 1 - r] = old[r][c]`.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SPAN]; MAX_SPAN];
        for r in 0..rows {
            for c in 0..cols {
                bits[c][rows - 1 - r] = self.bits[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Filled cells in row-major order, as `(dx, dy)` offsets
    pub fn filled_cells(&self) -> FilledCells {
        let mut out = FilledCells::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    out.push((c as i16, r as i16));
                }
            }
        }
        out
    }

    pub fn filled_count(&self) -> usize {
        self.bits[..self.rows()]
            .iter()
            .map(|row| row[..self.cols()].iter().filter(|&&b| b).count())
            .sum()
    }

    /// Rows as `0`/`1` strings, e.g. `["111", "010"]` for T
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.rows())
            .map(|r| {
                (0..self.cols())
                    .map(|c| if self.bits[r][c] { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }
}

/// A catalog entry: kind plus spawn-orientation matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
}

/// The seven shapes in catalog order (matches [`PieceKind::ALL`])
pub const CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        matrix: ShapeMatrix::from_rows([[1, 1, 1, 1]]),
    },
    Shape {
        kind: PieceKind::O,
        matrix: ShapeMatrix::from_rows([[1, 1], [1, 1]]),
    },
    Shape {
        kind: PieceKind::T,
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [0, 1, 0]]),
    },
    Shape {
        kind: PieceKind::J,
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [1, 0, 0]]),
    },
    Shape {
        kind: PieceKind::L,
        matrix: ShapeMatrix::from_rows([[1, 1, 1], [0, 0, 1]]),
    },
    Shape {
        kind: PieceKind::S,
        matrix: ShapeMatrix::from_rows([[0, 1, 1], [1, 1, 0]]),
    },
    Shape {
        kind: PieceKind::Z,
        matrix: ShapeMatrix::from_rows([[1, 1, 0], [0, 1, 1]]),
    },
];

/// Spawn-orientation matrix for a kind
pub fn shape_of(kind: PieceKind) -> ShapeMatrix {
    CATALOG[kind.index()].matrix
}
