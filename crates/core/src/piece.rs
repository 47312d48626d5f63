//! The falling piece: a shape matrix at a grid position.

use crate::pieces::{shape_of, FilledCells, ShapeMatrix};
use crate::playfield::Playfield;
use crate::types::PieceKind;

/// A piece instance
///
/// `(x, y)` is the top-left corner of the matrix's bounding box. `y` may be
/// negative while the piece is partially above the visible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece in spawn orientation at `(width / 2 - 1, 0)`
    pub fn spawn(kind: PieceKind, field_width: u8) -> Self {
        Self {
            kind,
            matrix: shape_of(kind),
            x: field_width as i16 / 2 - 1,
            y: 0,
        }
    }

    /// Absolute coordinates of the filled cells
    pub fn cells(&self) -> FilledCells {
        self.matrix
            .filled_cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Whether the piece, offset by `(dx, dy)` and optionally using
    /// `candidate` instead of its own matrix, would collide on `field`
    pub fn collision(
        &self,
        field: &Playfield,
        dx: i16,
        dy: i16,
        candidate: Option<&ShapeMatrix>,
    ) -> bool {
        let matrix = candidate.unwrap_or(&self.matrix);
        field.collides(matrix, self.x + dx, self.y + dy)
    }

    /// Translate by `(dx, dy)` if the target placement is free
    pub fn translate(&mut self, field: &Playfield, dx: i16, dy: i16) -> bool {
        if self.collision(field, dx, dy, None) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate 90° clockwise in place
    ///
    /// The rotated matrix is tested at the current position only. If it
    /// collides the rotation is dropped and the piece is unchanged.
    pub fn rotate(&mut self, field: &Playfield) -> bool {
        let rotated = self.matrix.rotated_cw();
        if self.collision(field, 0, 0, Some(&rotated)) {
            return false;
        }
        self.matrix = rotated;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_spawn_position() {
        let piece = Piece::spawn(PieceKind::T, 10);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(piece.matrix, shape_of(PieceKind::T));

        let narrow = Piece::spawn(PieceKind::I, 7);
        assert_eq!(narrow.x, 2);
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let mut piece = Piece::spawn(PieceKind::O, 10);
        piece.y = 5;
        assert_eq!(piece.cells().as_slice(), &[(4, 5), (5, 5), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_translate_blocked_by_wall() {
        let field = Playfield::new(10, 20);
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.x = 0;
        assert!(!piece.translate(&field, -1, 0));
        assert_eq!(piece.x, 0);
        assert!(piece.translate(&field, 1, 0));
        assert_eq!(piece.x, 1);
    }

    #[test]
    fn test_rotation_rejected_without_kick() {
        let field = Playfield::new(10, 20);
        // Horizontal I on the last row cannot turn vertical: it would poke
        // through the floor, and no offset is tried.
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.y = 19;
        let before = piece;
        assert!(!piece.rotate(&field));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_rotation_rejected_by_locked_cell() {
        let mut field = Playfield::new(10, 20);
        let mut piece = Piece::spawn(PieceKind::I, 10);
        piece.y = 5;
        // Vertical I would cover (4, 5..=8).
        field.set(4, 7, Cell::Locked(PieceKind::O));
        assert!(!piece.rotate(&field));

        field.set(4, 7, Cell::Empty);
        assert!(piece.rotate(&field));
        assert_eq!((piece.matrix.rows(), piece.matrix.cols()), (4, 1));
    }
}
