//! End-to-end engine scenarios driven through the public API.

use tui_blockfall::core::{EngineConfig, GameState, PieceSource};
use tui_blockfall::types::{Cell, GameMode, InputAction, PieceKind};

fn game(kinds: &[PieceKind]) -> GameState {
    GameState::with_source(EngineConfig::default(), PieceSource::scripted(kinds.to_vec())).unwrap()
}

/// Fill row `y` except the columns in `holes`.
fn fill_except(game: &mut GameState, y: i16, holes: &[i16]) {
    let width = game.playfield().width() as i16;
    for x in (0..width).filter(|x| !holes.contains(x)) {
        game.playfield_mut().set(x, y, Cell::Locked(PieceKind::S));
    }
}

/// Drop a vertical I into column 4, clearing `k` prepared bottom rows.
fn clear_rows_with_vertical_i(game: &mut GameState, k: i16) -> u32 {
    let before = game.score();
    for y in (20 - k)..20 {
        fill_except(game, y, &[4]);
    }
    assert_eq!(game.current().unwrap().kind, PieceKind::I);
    assert!(game.rotate());
    assert!(game.hard_drop());
    game.score() - before
}

#[test]
fn test_lifecycle() {
    let mut game = game(&[PieceKind::T]);
    assert_eq!(game.mode(), GameMode::LevelSelect);
    assert!(game.current().is_none());

    game.apply_action(InputAction::LevelInc);
    game.apply_action(InputAction::ConfirmStart);
    assert_eq!(game.mode(), GameMode::Playing);
    assert_eq!(game.level(), 2);

    while game.is_playing() {
        game.apply_action(InputAction::HardDrop);
    }
    assert_eq!(game.mode(), GameMode::GameOver);
    assert!(game.is_game_over());

    assert!(game.apply_action(InputAction::Restart));
    assert_eq!(game.mode(), GameMode::LevelSelect);
    assert_eq!(game.selected_level(), 2);

    game.apply_action(InputAction::ConfirmStart);
    assert_eq!(game.mode(), GameMode::Playing);
    assert!(!game.is_game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.playfield().locked_count(), 0);
}

#[test]
fn test_horizontal_i_clears_single_row() {
    let mut game = game(&[PieceKind::I, PieceKind::O]);
    game.start(1);
    fill_except(&mut game, 19, &[4, 5, 6, 7]);
    fill_except(&mut game, 18, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);

    assert!(game.hard_drop());

    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    // The single cell from row 18 shifted down; everything above is empty.
    assert_eq!(game.playfield().locked_count(), 1);
    assert_eq!(game.playfield().get(9, 19), Some(Cell::Locked(PieceKind::S)));
    assert!(game.playfield().row(0).unwrap().iter().all(|c| c.is_empty()));
    assert_eq!(game.current().unwrap().kind, PieceKind::O);
}

#[test]
fn test_score_is_quadratic_in_lines_cleared() {
    for k in 1..=4 {
        let mut game = game(&[PieceKind::I]);
        game.start(1);
        let gained = clear_rows_with_vertical_i(&mut game, k);
        assert_eq!(gained, 100 * (k as u32) * (k as u32), "k = {k}");
        assert_eq!(game.lines(), k as u32);
    }
}

#[test]
fn test_level_progression_speeds_up_gravity() {
    let mut game = game(&[PieceKind::I]);
    game.start(1);
    assert_eq!(game.fall_interval_ms(), 500);

    clear_rows_with_vertical_i(&mut game, 4);
    clear_rows_with_vertical_i(&mut game, 4);
    assert_eq!(game.lines(), 8);
    assert_eq!(game.level(), 1);

    clear_rows_with_vertical_i(&mut game, 2);
    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 2);
    assert_eq!(game.fall_interval_ms(), 450);
    assert_eq!(game.score(), 1600 + 1600 + 400);
}

#[test]
fn test_starting_level_seeds_lines() {
    let mut game = game(&[PieceKind::I]);
    game.start(5);
    assert_eq!(game.lines(), 40);
    assert_eq!(game.fall_interval_ms(), 300);

    clear_rows_with_vertical_i(&mut game, 4);
    assert_eq!(game.lines(), 44);
    assert_eq!(game.level(), 5);
}

#[test]
fn test_gravity_timing() {
    let mut game = game(&[PieceKind::O]);
    game.start(1);

    // 31 ticks of 16ms = 496ms: not yet.
    for _ in 0..31 {
        assert!(!game.tick(16));
    }
    assert_eq!(game.current().unwrap().y, 0);
    // 512ms > 500ms.
    assert!(game.tick(16));
    assert_eq!(game.current().unwrap().y, 1);
    assert_eq!(game.fall_timer_ms(), 0);
}

#[test]
fn test_gravity_locks_then_spawns() {
    let mut game = game(&[PieceKind::O, PieceKind::T]);
    game.start(1);
    while game.move_piece(0, 1) {}

    assert!(game.tick(501));
    assert_eq!(game.playfield().locked_count(), 4);
    let current = game.current().unwrap();
    assert_eq!(current.kind, PieceKind::T);
    assert_eq!((current.x, current.y), (4, 0));
}

#[test]
fn test_spawn_collision_ends_game() {
    let mut game = game(&[PieceKind::O]);
    game.start(1);
    while game.move_piece(0, 1) {}
    // Occupy the spawn area; the falling O is already below it.
    game.playfield_mut().set(4, 0, Cell::Locked(PieceKind::Z));

    assert!(game.hard_drop());
    assert_eq!(game.mode(), GameMode::GameOver);
    assert!(game.is_game_over());
    assert_eq!(game.playfield().locked_count(), 5);
}

#[test]
fn test_game_over_freezes_state() {
    let mut game = game(&[PieceKind::O]);
    game.start(1);
    while game.is_playing() {
        game.hard_drop();
    }

    let frozen = game.playfield().clone();
    let current = game.current().copied();
    let score = game.score();

    assert!(!game.apply_action(InputAction::MoveLeft));
    assert!(!game.apply_action(InputAction::Rotate));
    assert!(!game.apply_action(InputAction::HardDrop));
    assert!(!game.apply_action(InputAction::ConfirmStart));
    assert!(!game.tick(10_000));
    game.lock_and_advance();

    assert_eq!(game.playfield().cells(), frozen.cells());
    assert_eq!(game.current().copied(), current);
    assert_eq!(game.score(), score);
    assert_eq!(game.mode(), GameMode::GameOver);
}

#[test]
fn test_illegal_moves_are_rejected_quietly() {
    let mut game = game(&[PieceKind::I]);
    game.start(1);

    let mut moved = 0;
    while game.apply_action(InputAction::MoveRight) {
        moved += 1;
    }
    assert_eq!(moved, 2);
    assert_eq!(game.current().unwrap().x, 6);

    // Vertical I at the top-right fits; at the bottom it would not.
    while game.move_piece(0, 1) {}
    assert_eq!(game.current().unwrap().y, 19);
    assert!(!game.rotate());
    assert_eq!(game.current().unwrap().matrix.rows(), 1);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let config = EngineConfig {
        seed: Some(42),
        ..EngineConfig::default()
    };
    let mut a = GameState::new(config).unwrap();
    let mut b = GameState::new(config).unwrap();
    a.start(1);
    b.start(1);
    for _ in 0..50 {
        assert_eq!(a.current().map(|p| p.kind), b.current().map(|p| p.kind));
        a.hard_drop();
        b.hard_drop();
    }
}
