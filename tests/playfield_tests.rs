//! Playfield tests: locking and line clearing

use tui_blockfall::core::{LockOutcome, Piece, Playfield};
use tui_blockfall::types::{Cell, PieceKind};

#[test]
fn test_new_playfield_is_empty() {
    let field = Playfield::new(10, 20);
    assert_eq!((field.width(), field.height()), (10, 20));
    assert_eq!(field.cells().len(), 200);
    assert_eq!(field.locked_count(), 0);
    assert_eq!(field.rows().count(), 20);
}

#[test]
fn test_out_of_range_access() {
    let mut field = Playfield::new(10, 20);
    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(10, 0), None);
    assert_eq!(field.get(0, 20), None);
    assert!(!field.set(10, 0, Cell::Locked(PieceKind::I)));
    assert!(!field.is_occupied(-1, 5));
    assert_eq!(field.locked_count(), 0);
}

#[test]
fn test_lock_writes_kind() {
    let mut field = Playfield::new(10, 20);
    let mut piece = Piece::spawn(PieceKind::S, 10);
    piece.y = 18;

    assert_eq!(field.lock_piece(&piece), LockOutcome::Locked);
    // S = [[0,1,1],[1,1,0]] at (4, 18)
    for (x, y) in [(5, 18), (6, 18), (4, 19), (5, 19)] {
        assert_eq!(field.get(x, y), Some(Cell::Locked(PieceKind::S)));
    }
    assert_eq!(field.locked_count(), 4);
}

#[test]
fn test_lock_above_field_writes_nothing() {
    let mut field = Playfield::new(10, 20);
    let mut piece = Piece::spawn(PieceKind::O, 10);
    piece.y = -1;

    assert_eq!(field.lock_piece(&piece), LockOutcome::AboveField);
    assert_eq!(field.locked_count(), 0);
}

#[test]
fn test_clear_nothing() {
    let mut field = Playfield::new(10, 20);
    field.set(3, 19, Cell::Locked(PieceKind::T));
    let before = field.clone();
    assert_eq!(field.clear_lines(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_clear_non_adjacent_rows_preserves_order() {
    let mut field = Playfield::new(10, 20);
    field.fill_row(19, PieceKind::I);
    field.fill_row(17, PieceKind::I);
    field.set(0, 18, Cell::Locked(PieceKind::J));
    field.set(1, 16, Cell::Locked(PieceKind::L));
    field.set(2, 15, Cell::Locked(PieceKind::Z));

    assert_eq!(field.full_rows(), vec![17, 19]);
    assert_eq!(field.clear_lines(), 2);

    assert_eq!(field.get(0, 19), Some(Cell::Locked(PieceKind::J)));
    assert_eq!(field.get(1, 18), Some(Cell::Locked(PieceKind::L)));
    assert_eq!(field.get(2, 17), Some(Cell::Locked(PieceKind::Z)));
    assert_eq!(field.locked_count(), 3);
    assert!(field.row(0).unwrap().iter().all(|c| c.is_empty()));
    assert!(field.row(1).unwrap().iter().all(|c| c.is_empty()));
}

#[test]
fn test_clear_whole_field() {
    let mut field = Playfield::new(6, 4);
    for y in 0..4 {
        field.fill_row(y, PieceKind::O);
    }
    assert_eq!(field.clear_lines(), 4);
    assert_eq!(field.locked_count(), 0);
}

#[test]
fn test_top_row_clear() {
    let mut field = Playfield::new(10, 20);
    field.fill_row(0, PieceKind::T);
    field.set(5, 1, Cell::Locked(PieceKind::S));
    assert_eq!(field.clear_lines(), 1);
    assert_eq!(field.get(5, 1), Some(Cell::Locked(PieceKind::S)));
    assert_eq!(field.locked_count(), 1);
}
