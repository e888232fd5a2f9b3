//! Integration tests for the game loop: phase transitions, scoring and locking

use tui_blockfall::core::{GameConfig, GameState, Piece};
use tui_blockfall::input::KeyTracker;
use tui_blockfall::types::{Color, Keys, Phase, PieceKind, GRAVITY_MS, TICK_MS};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const RED: Color = Color::new(230, 90, 90);
const ROTATE_TICK: u64 = 250;

fn started(seed: u32) -> GameState {
    let mut game = GameState::new(GameConfig::default().with_seed(seed), 0);
    game.start();
    game
}

fn idle() -> Keys {
    Keys::default()
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new(GameConfig::default().with_seed(12345), 0);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.active().is_none());

    let start = Keys {
        any: true,
        ..idle()
    };
    assert!(game.tick(16, &start));
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.active().is_some());
}

#[test]
fn test_filled_row_scores_eleven() {
    let mut game = started(1);
    // Row 19 full except column 4, which the dot falls into.
    for x in 0..10 {
        if x != 4 {
            game.board_mut().set(x, 19, Some(RED));
        }
    }
    game.board_mut().set(4, 10, Some(RED));
    game.set_active(Piece::from_cells(PieceKind::Dot, RED, 0, &[(4, 18)]));

    game.tick(GRAVITY_MS + 1, &idle());

    assert!(game.board().is_row_empty(19));
    // The stray cell above moved down by exactly one row.
    assert!(game.board().is_occupied(4, 11));
    assert_eq!(game.score(), 11);
    assert_eq!(game.record(), 11);
}

#[test]
fn test_spawn_onto_blocked_top_is_immediate_death() {
    let mut game = started(2);
    for x in 0..10 {
        game.board_mut().set(x, 0, Some(RED));
    }
    let before = game.board().clone();

    assert!(!game.spawn_piece());

    assert_eq!(game.phase(), Phase::Dead);
    assert_eq!(game.board(), &before);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_piece_on_floor_locks_on_next_gravity_tick() {
    let mut game = started(3);
    let piece = Piece::from_cells(PieceKind::O, RED, 0, &[(0, 19), (0, 18), (1, 19), (1, 18)]);
    game.set_active(piece);

    assert!(game.tick(GRAVITY_MS + 1, &idle()));

    assert!(game.board().is_occupied(0, 19));
    assert!(game.board().is_occupied(1, 18));
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.score(), 1);
    // A fresh piece spawned at the top.
    assert!(game.active().unwrap().top() < 0);
}

#[test]
fn test_rotation_into_occupied_cells_keeps_position() {
    let mut game = started(4);
    let piece = Piece::spawn(PieceKind::T, RED, 10).translated(0, 8);
    game.set_active(piece.clone());
    // Every cell the first T rotation could move into.
    for &(x, y) in piece.rotated().cells() {
        if !piece.cells().contains(&(x, y)) {
            game.board_mut().set(x, y, Some(RED));
        }
    }

    let rotate = Keys {
        rotate: true,
        ..idle()
    };
    game.tick(ROTATE_TICK, &rotate);

    assert_eq!(game.active(), Some(&piece));
}

#[test]
fn test_restart_keeps_record() {
    let mut game = started(5);
    game.set_active(Piece::from_cells(PieceKind::Dot, RED, 0, &[(9, 19)]));
    game.tick(100, &idle());
    assert_eq!(game.score(), 1);

    for x in 0..10 {
        game.board_mut().set(x, 0, Some(RED));
    }
    game.spawn_piece();
    assert_eq!(game.phase(), Phase::Dead);

    let restart = Keys {
        any: true,
        ..idle()
    };
    game.tick(500, &restart);

    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.record(), 1);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_key_tracker_drives_game() {
    let mut game = GameState::new(GameConfig::default().with_seed(6), 0);
    let mut tracker = KeyTracker::new();

    tracker.handle_key_event(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), 5);
    game.tick(16, &tracker.sample(16));
    assert_eq!(game.phase(), Phase::Playing);

    game.set_active(Piece::from_cells(PieceKind::Dot, RED, 0, &[(5, 4)]));
    tracker.handle_key_event(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE), 60);
    game.tick(100, &tracker.sample(100));
    assert_eq!(game.active().unwrap().cells(), &[(4, 4)]);

    tracker.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), 120);
    assert!(tracker.sample(130).escape);
}

#[test]
fn test_single_tap_moves_one_column() {
    let mut game = started(8);
    let mut tracker = KeyTracker::new();
    game.set_active(Piece::from_cells(PieceKind::Dot, RED, 0, &[(5, 4)]));

    tracker.handle_key_event(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE), 1000);
    for i in 0..15 {
        let now = 1000 + i * TICK_MS as u64;
        game.tick(now, &tracker.sample(now));
    }

    assert_eq!(game.active().unwrap().cells()[0].0, 4);
}

#[test]
fn test_gravity_and_soft_drop_in_one_tick_snap_onto_stack() {
    let mut game = started(9);
    game.board_mut().set(4, 15, Some(RED));
    // One row above resting on the stack.
    game.set_active(Piece::from_cells(PieceKind::Dot, RED, 0, &[(4, 13)]));

    let down = Keys {
        down: true,
        ..idle()
    };
    game.tick(GRAVITY_MS + 1, &down);

    assert!(game.board().is_occupied(4, 14));
    assert!(game.board().is_occupied(4, 15));
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.score(), 1);
}

#[test]
fn test_long_random_session_never_panics() {
    let mut game = started(77);
    let mut now = 0u64;
    let mut rng = 0x1234_5678u32;
    let mut locks = 0;
    for _ in 0..20_000 {
        now += TICK_MS as u64;
        rng = rng.wrapping_mul(1664525).wrapping_add(1013904223);
        let bits = rng >> 24;
        let keys = Keys {
            left: bits & 1 != 0,
            right: bits & 2 != 0,
            down: bits & 4 != 0,
            rotate: bits & 8 != 0,
            hard_drop: bits & 16 != 0,
            escape: false,
            any: bits & 32 != 0,
        };
        game.tick(now, &keys);
        if game.take_last_event().is_some() {
            locks += 1;
        }
        assert!(game.record() >= game.score());
        for (coord, _) in game.board().occupied() {
            assert!(coord.1 >= 0 && coord.1 < 20);
        }
    }
    assert!(locks > 0);
}
