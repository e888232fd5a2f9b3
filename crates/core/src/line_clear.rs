//! Line clear module - detects and removes complete rows
//!
//! Clearing is two-phase: complete rows are collected first, then each is removed
//! in ascending order with everything above it shifted down one row. Processing
//! top-down keeps the collected indices valid, since a shift only moves rows that
//! are above the row being removed.

use arrayvec::ArrayVec;

use crate::board::Board;

/// A single lock touches at most four rows, so at most four can complete at once.
pub type ClearedRows = ArrayVec<i16, 4>;

/// Rows where every column is occupied, in ascending order.
pub fn complete_rows(board: &Board) -> ClearedRows {
    let mut rows = ClearedRows::new();
    for y in 0..board.height() as i16 {
        if board.is_row_full(y) && rows.try_push(y).is_err() {
            break;
        }
    }
    rows
}

/// Remove every complete row and compact the board. Returns the cleared rows.
pub fn clear_complete_rows(board: &mut Board) -> ClearedRows {
    let rows = complete_rows(board);
    for &y in &rows {
        board.remove_row(y);
        board.shift_rows_above(y, 1);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    const BLUE: Color = Color::new(90, 90, 240);

    fn fill_row(board: &mut Board, y: i16) {
        for x in 0..board.width() as i16 {
            board.set(x, y, Some(BLUE));
        }
    }

    #[test]
    fn test_no_complete_rows() {
        let mut board = Board::default();
        board.set(0, 19, Some(BLUE));
        assert!(complete_rows(&board).is_empty());
        assert!(clear_complete_rows(&mut board).is_empty());
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn test_single_row_clear_shifts_above_down() {
        let mut board = Board::default();
        fill_row(&mut board, 19);
        board.set(2, 18, Some(BLUE));
        board.set(7, 3, Some(BLUE));

        let cleared = clear_complete_rows(&mut board);

        assert_eq!(cleared.as_slice(), &[19]);
        assert!(board.is_occupied(2, 19));
        assert!(board.is_occupied(7, 4));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_non_adjacent_rows_clear() {
        let mut board = Board::default();
        fill_row(&mut board, 17);
        fill_row(&mut board, 19);
        board.set(1, 18, Some(BLUE));
        board.set(5, 16, Some(BLUE));

        let cleared = clear_complete_rows(&mut board);

        assert_eq!(cleared.as_slice(), &[17, 19]);
        // Row 18 falls one (past 19) and row 16 falls two (past 17 and 19).
        assert!(board.is_occupied(1, 19));
        assert!(board.is_occupied(5, 18));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_four_row_clear_empties_board() {
        let mut board = Board::default();
        for y in 16..20 {
            fill_row(&mut board, y);
        }
        assert_eq!(clear_complete_rows(&mut board).len(), 4);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_top_row_clear() {
        let mut board = Board::new(4, 4);
        fill_row(&mut board, 0);
        assert_eq!(clear_complete_rows(&mut board).as_slice(), &[0]);
        assert_eq!(board.occupied_count(), 0);
    }
}
