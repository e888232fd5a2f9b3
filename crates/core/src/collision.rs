//! Collision module - placement checks, clamping and lock resolution
//!
//! Legal positions keep every cell inside the columns `[0, width)`, above the floor
//! and off occupied cells. Rows above the board (negative) are always free.
//!
//! Horizontal and floor violations are repaired by clamping rather than rejected.
//! Overlap with the stack after a downward move is repaired by snapping the piece
//! back up into contact. [`resolve`] turns the result of a tick into a decision:
//! keep falling, lock where it is, or top out.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::Coord;

/// Outcome of checking the active piece at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing below; keep falling.
    Falling,
    /// Lock this (possibly snapped) piece into the board.
    Lock(Piece),
    /// The piece cannot settle fully on screen.
    TopOut,
}

/// True when every cell is inside the columns, above the floor and unoccupied.
pub fn can_place(cells: &[Coord], board: &Board) -> bool {
    let height = board.height() as i16;
    cells.iter().all(|&(x, y)| {
        board.contains_column(x) && y < height && !board.is_occupied(x, y)
    })
}

/// True when any cell coincides with an occupied board cell.
pub fn overlaps(cells: &[Coord], board: &Board) -> bool {
    cells.iter().any(|&(x, y)| board.is_occupied(x, y))
}

/// A piece rests when it touches the floor or an occupied cell directly below.
pub fn is_resting(piece: &Piece, board: &Board) -> bool {
    let floor = board.height() as i16 - 1;
    piece
        .cells()
        .iter()
        .any(|&(x, y)| y >= floor || board.is_occupied(x, y + 1))
}

/// Shift the piece back inside `[0, width)`. In-bounds pieces are returned unchanged.
pub fn clamp_horizontal(piece: Piece, width: u8) -> Piece {
    let left = piece.left();
    if left < 0 {
        return piece.translated(-left, 0);
    }
    let overflow = piece.right() - (width as i16 - 1);
    if overflow > 0 {
        return piece.translated(-overflow, 0);
    }
    piece
}

/// Lift the piece so its lowest cell is no deeper than row `height - 1`.
pub fn clamp_floor(piece: Piece, height: u8) -> Piece {
    let overflow = piece.bottom() - (height as i16 - 1);
    if overflow > 0 {
        piece.translated(0, -overflow)
    } else {
        piece
    }
}

/// Raise an overlapping piece by the smallest number of rows that clears it.
///
/// Negative rows are never occupied, so this always terminates.
pub fn snap_into_contact(piece: Piece, board: &Board) -> Piece {
    let mut lifted = piece;
    while overlaps(lifted.cells(), board) {
        lifted = lifted.translated(0, -1);
    }
    lifted
}

/// Rows the piece can fall before touching the stack or the floor.
pub fn drop_distance(piece: &Piece, board: &Board) -> i16 {
    let mut distance = 0;
    while can_place(piece.translated(0, distance + 1).cells(), board) {
        distance += 1;
    }
    distance
}

/// Where the piece would land if hard dropped now.
pub fn drop_preview(piece: &Piece, board: &Board) -> Piece {
    piece.translated(0, drop_distance(piece, board))
}

/// Decide whether the piece keeps falling, locks, or tops out.
pub fn resolve(piece: &Piece, board: &Board) -> Resolution {
    if overlaps(piece.cells(), board) {
        if piece.top() < 0 {
            return Resolution::TopOut;
        }
        let snapped = snap_into_contact(piece.clone(), board);
        if snapped.top() < 0 {
            return Resolution::TopOut;
        }
        return Resolution::Lock(snapped);
    }

    if is_resting(piece, board) {
        if piece.top() < 0 {
            return Resolution::TopOut;
        }
        return Resolution::Lock(piece.clone());
    }

    Resolution::Falling
}
