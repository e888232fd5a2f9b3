//! Piece tests - spawn layouts and rotation kinematics

use tui_blockfall::core::collision::{clamp_horizontal, drop_distance};
use tui_blockfall::core::pieces::rotation_states;
use tui_blockfall::core::{Board, Piece};
use tui_blockfall::types::{Color, PieceKind};

const ORANGE: Color = Color::new(245, 160, 90);

#[test]
fn test_every_kind_spawns_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, ORANGE, 10);
        assert!(piece.left() >= 3 && piece.right() <= 6, "{:?}", kind);
        assert_eq!(piece.cells().len(), kind.cell_count());
        assert_eq!(piece.color(), ORANGE);
    }
}

#[test]
fn test_rotation_state_counts() {
    assert_eq!(rotation_states(PieceKind::Dot), 1);
    assert_eq!(rotation_states(PieceKind::I), 2);
    assert_eq!(rotation_states(PieceKind::O), 1);
    assert_eq!(rotation_states(PieceKind::L), 4);
    assert_eq!(rotation_states(PieceKind::S), 2);
    assert_eq!(rotation_states(PieceKind::T), 4);
}

#[test]
fn test_rotation_keeps_cell_count_everywhere_on_board() {
    for kind in PieceKind::ALL {
        for dx in -3..4 {
            let mut piece = Piece::spawn(kind, ORANGE, 10).translated(dx, 8);
            for _ in 0..4 {
                piece = piece.rotated();
                assert_eq!(piece.cells().len(), kind.cell_count());
            }
        }
    }
}

#[test]
fn test_l_cycles_through_four_distinct_shapes() {
    let start = Piece::spawn(PieceKind::L, ORANGE, 10).translated(0, 5);
    let mut seen = vec![start.cells().to_vec()];
    let mut piece = start.clone();
    for _ in 0..3 {
        piece = piece.rotated();
        let mut cells = piece.cells().to_vec();
        cells.sort();
        assert!(!seen.iter().any(|s| {
            let mut s = s.clone();
            s.sort();
            s == cells
        }));
        seen.push(piece.cells().to_vec());
    }
    assert_eq!(piece.rotated(), start);
}

#[test]
fn test_clamp_is_noop_for_in_bounds_pieces() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, ORANGE, 10).translated(0, 4);
        assert_eq!(clamp_horizontal(piece.clone(), 10), piece);
    }
}

#[test]
fn test_hard_drop_distance_from_spawn() {
    let board = Board::default();
    let piece = Piece::spawn(PieceKind::I, ORANGE, 10);
    // Spawns on row -1; lands on row 19.
    assert_eq!(drop_distance(&piece, &board), 20);
}
