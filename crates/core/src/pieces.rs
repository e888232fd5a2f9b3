//! Pieces module - shape layouts and rotation kinematics
//!
//! A piece stores absolute cell coordinates. Spawn layouts are column offsets from
//! the board's center column plus absolute rows, so every piece starts straddling
//! row 0. Rotation applies a per-cell delta from the kind's table for the current
//! orientation; cell order therefore matters and is preserved by every transform.

use arrayvec::ArrayVec;

use crate::types::{Color, Coord, PieceKind};

/// Cells of a piece. At most four.
pub type PieceCells = ArrayVec<Coord, 4>;

/// Per-cell rotation deltas for one orientation.
pub type RotationDeltas = [Coord; 4];

const DOT_SPAWN: &[Coord] = &[(-1, -1)];
const I_SPAWN: &[Coord] = &[(-2, -1), (-1, -1), (0, -1), (1, -1)];
const O_SPAWN: &[Coord] = &[(-1, 0), (-1, -1), (0, 0), (0, -1)];
const L_SPAWN: &[Coord] = &[(-1, 1), (-1, 0), (-1, -1), (0, 1)];
const S_SPAWN: &[Coord] = &[(-1, 0), (-1, -1), (0, 1), (0, 0)];
const T_SPAWN: &[Coord] = &[(-1, -1), (0, 0), (0, -1), (1, -1)];

const I_ROTATION: &[RotationDeltas] = &[
    [(2, 2), (1, 1), (0, 0), (-1, -1)],
    [(-2, -2), (-1, -1), (0, 0), (1, 1)],
];

const L_ROTATION: &[RotationDeltas] = &[
    [(1, 0), (0, 1), (-1, 2), (0, -1)],
    [(-1, -2), (0, -1), (1, 0), (-2, -1)],
    [(-1, 1), (0, 0), (1, -1), (0, 2)],
    [(1, 1), (0, 0), (-1, -1), (2, 0)],
];

const S_ROTATION: &[RotationDeltas] = &[
    [(0, 0), (-1, 2), (-1, 0), (0, 0)],
    [(0, 0), (1, -2), (1, 0), (0, 0)],
];

const T_ROTATION: &[RotationDeltas] = &[
    [(1, -1), (0, 0), (0, 0), (0, 0)],
    [(0, 0), (-1, -1), (0, 0), (0, 0)],
    [(0, 0), (0, 0), (0, 0), (-1, 1)],
    [(-1, 1), (1, 1), (0, 0), (1, -1)],
];

/// Spawn layout for a kind: (column offset from `width / 2`, absolute row).
pub fn spawn_layout(kind: PieceKind) -> &'static [Coord] {
    match kind {
        PieceKind::Dot => DOT_SPAWN,
        PieceKind::I => I_SPAWN,
        PieceKind::O => O_SPAWN,
        PieceKind::L => L_SPAWN,
        PieceKind::S => S_SPAWN,
        PieceKind::T => T_SPAWN,
    }
}

/// Rotation delta tables indexed by orientation. Empty for kinds that never rotate.
pub fn rotation_table(kind: PieceKind) -> &'static [RotationDeltas] {
    match kind {
        PieceKind::Dot | PieceKind::O => &[],
        PieceKind::I => I_ROTATION,
        PieceKind::L => L_ROTATION,
        PieceKind::S => S_ROTATION,
        PieceKind::T => T_ROTATION,
    }
}

/// Number of distinct rotation states for a kind.
pub fn rotation_states(kind: PieceKind) -> u8 {
    rotation_table(kind).len().max(1) as u8
}

/// A falling piece with absolute cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    orientation: u8,
    cells: PieceCells,
}

impl Piece {
    /// Create a piece at its canonical spawn position for a board of `board_width` columns.
    pub fn spawn(kind: PieceKind, color: Color, board_width: u8) -> Self {
        let center = (board_width / 2) as i16;
        let cells = spawn_layout(kind)
            .iter()
            .map(|&(dx, y)| (center + dx, y))
            .collect();
        Self {
            kind,
            color,
            orientation: 0,
            cells,
        }
    }

    /// Build a piece from explicit cells. Used for tests and benchmarks.
    pub fn from_cells(kind: PieceKind, color: Color, orientation: u8, cells: &[Coord]) -> Self {
        debug_assert_eq!(cells.len(), kind.cell_count());
        Self {
            kind,
            color,
            orientation: orientation % rotation_states(kind),
            cells: cells.iter().copied().collect(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Candidate shifted by `dx` columns and `dy` rows.
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        let mut moved = self.clone();
        for cell in moved.cells.iter_mut() {
            cell.0 += dx;
            cell.1 += dy;
        }
        moved
    }

    /// Candidate in the next rotation state.
    ///
    /// Kinds with a single state return an identical copy.
    pub fn rotated(&self) -> Self {
        let table = rotation_table(self.kind);
        if table.is_empty() {
            return self.clone();
        }
        let deltas = &table[self.orientation as usize];
        let mut next = self.clone();
        for (cell, &(dx, dy)) in next.cells.iter_mut().zip(deltas.iter()) {
            cell.0 += dx;
            cell.1 += dy;
        }
        next.orientation = (self.orientation + 1) % table.len() as u8;
        next
    }

    /// Smallest row among the cells.
    pub fn top(&self) -> i16 {
        self.cells.iter().map(|c| c.1).min().unwrap_or(0)
    }

    /// Largest row among the cells.
    pub fn bottom(&self) -> i16 {
        self.cells.iter().map(|c| c.1).max().unwrap_or(0)
    }

    pub fn left(&self) -> i16 {
        self.cells.iter().map(|c| c.0).min().unwrap_or(0)
    }

    pub fn right(&self) -> i16 {
        self.cells.iter().map(|c| c.0).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::new(120, 120, 120);

    fn sorted(cells: &[Coord]) -> Vec<Coord> {
        let mut v = cells.to_vec();
        v.sort();
        v
    }

    fn distinct(cells: &[Coord]) -> bool {
        let v = sorted(cells);
        v.windows(2).all(|w| w[0] != w[1])
    }

    #[test]
    fn test_spawn_layouts_on_default_board() {
        let expect: [(PieceKind, &[Coord]); 6] = [
            (PieceKind::Dot, &[(4, -1)]),
            (PieceKind::I, &[(3, -1), (4, -1), (5, -1), (6, -1)]),
            (PieceKind::O, &[(4, 0), (4, -1), (5, 0), (5, -1)]),
            (PieceKind::L, &[(4, 1), (4, 0), (4, -1), (5, 1)]),
            (PieceKind::S, &[(4, 0), (4, -1), (5, 1), (5, 0)]),
            (PieceKind::T, &[(4, -1), (5, 0), (5, -1), (6, -1)]),
        ];
        for (kind, cells) in expect {
            let piece = Piece::spawn(kind, GRAY, 10);
            assert_eq!(piece.cells(), cells, "{:?}", kind);
            assert_eq!(piece.orientation(), 0);
        }
    }

    #[test]
    fn test_spawn_straddles_row_zero() {
        for kind in PieceKind::ALL {
            let piece = Piece::spawn(kind, GRAY, 10);
            assert!(piece.top() < 0, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_is_deterministic() {
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind, GRAY, 10), Piece::spawn(kind, GRAY, 10));
        }
    }

    #[test]
    fn test_rotation_preserves_cell_count_and_distinctness() {
        for kind in PieceKind::ALL {
            let mut piece = Piece::spawn(kind, GRAY, 10).translated(0, 5);
            for _ in 0..8 {
                piece = piece.rotated();
                assert_eq!(piece.cells().len(), kind.cell_count());
                assert!(distinct(piece.cells()), "{:?} {:?}", kind, piece.cells());
            }
        }
    }

    #[test]
    fn test_full_rotation_cycle_returns_to_start() {
        for kind in PieceKind::ALL {
            let start = Piece::spawn(kind, GRAY, 10).translated(0, 6);
            let mut piece = start.clone();
            for _ in 0..rotation_states(kind) {
                piece = piece.rotated();
            }
            assert_eq!(piece, start, "{:?}", kind);
        }
    }

    #[test]
    fn test_dot_and_o_rotation_is_noop() {
        for kind in [PieceKind::Dot, PieceKind::O] {
            let piece = Piece::spawn(kind, GRAY, 10);
            assert_eq!(piece.rotated(), piece);
        }
    }

    #[test]
    fn test_i_rotates_to_vertical() {
        let piece = Piece::spawn(PieceKind::I, GRAY, 10).translated(0, 5);
        let rotated = piece.rotated();
        assert_eq!(rotated.orientation(), 1);
        assert_eq!(rotated.left(), rotated.right());
        assert_eq!(rotated.bottom() - rotated.top(), 3);
    }

    #[test]
    fn test_translated_does_not_mutate_original() {
        let piece = Piece::spawn(PieceKind::T, GRAY, 10);
        let moved = piece.translated(-1, 2);
        assert_eq!(piece.cells()[0], (4, -1));
        assert_eq!(moved.cells()[0], (3, 1));
        assert_eq!(moved.color(), piece.color());
    }

    #[test]
    fn test_spawn_centers_on_wider_board() {
        let piece = Piece::spawn(PieceKind::I, GRAY, 16);
        assert_eq!(piece.left(), 6);
        assert_eq!(piece.right(), 9);
    }

    #[test]
    fn test_bounds() {
        let piece = Piece::spawn(PieceKind::L, GRAY, 10);
        assert_eq!(piece.top(), -1);
        assert_eq!(piece.bottom(), 1);
        assert_eq!(piece.left(), 4);
        assert_eq!(piece.right(), 5);
    }
}
