//! Render-facing copy of the game state.
//!
//! Snapshots own their data so a renderer never borrows `GameState`; reuse one
//! across frames with `GameState::snapshot_into`.

use crate::pieces::{Piece, PieceCells};
use crate::types::{Cell, Color, Coord, PieceKind, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub cells: PieceCells,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            cells: value.cells().iter().copied().collect(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major board cells, `width * height` long.
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Landing cells of the active piece. Empty when there is no active piece.
    pub ghost: PieceCells,
    pub phase: Phase,
    pub score: u32,
    pub record: u32,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub celebration: Option<&'static str>,
}

impl GameSnapshot {
    /// Board cell at (x, y); None when out of range or empty.
    pub fn cell(&self, x: i16, y: i16) -> Cell {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    /// Renderable (coord, color) pairs for the board and the active piece.
    ///
    /// Active cells above the board are skipped.
    pub fn visible_cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        let width = self.width as usize;
        let board = self.board.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| (((idx % width) as i16, (idx / width) as i16), color))
        });
        let active = self.active.iter().flat_map(|a| {
            a.cells
                .iter()
                .filter(|&&(_, y)| y >= 0)
                .map(move |&coord| (coord, a.color))
        });
        board.chain(active)
    }

    /// True while a piece is in play and the ghost should be drawn.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}
