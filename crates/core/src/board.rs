//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the color
//! of the piece that locked there. Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Rows above the board (y < 0) are never stored.

use crate::types::{Cell, Color, Coord};

/// The game board using flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a column index lies inside the board.
    pub fn contains_column(&self, x: i16) -> bool {
        x >= 0 && x < self.width as i16
    }

    /// Merge cells into the board.
    ///
    /// The caller guarantees every target is on the board and empty.
    pub fn occupy(&mut self, coords: &[Coord], color: Color) {
        for &(x, y) in coords {
            debug_assert!(
                matches!(self.get(x, y), Some(None)),
                "occupy target ({}, {}) is off-board or already filled",
                x,
                y
            );
            self.set(x, y, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i16) -> bool {
        match self.row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_some()),
            None => false,
        }
    }

    /// Check if a row has no cells
    pub fn is_row_empty(&self, y: i16) -> bool {
        match self.row_range(y) {
            Some(range) => self.cells[range].iter().all(|cell| cell.is_none()),
            None => true,
        }
    }

    /// Delete every cell in row `y`.
    pub fn remove_row(&mut self, y: i16) {
        if let Some(range) = self.row_range(y) {
            self.cells[range].fill(None);
        }
    }

    /// Move every occupied cell with row < `y` down by `amount` rows.
    ///
    /// Only occupied cells move; empty cells never overwrite a destination, so
    /// row `y` and everything below it keeps its contents unless a moved cell
    /// lands there. Rows are visited bottom-up so a cell is moved at most once.
    /// Cells pushed past the floor are dropped.
    pub fn shift_rows_above(&mut self, y: i16, amount: u8) {
        if amount == 0 {
            return;
        }
        let width = self.width as usize;
        let last = y.min(self.height as i16);
        for src in (0..last).rev() {
            let dst = src + amount as i16;
            let src_start = src as usize * width;
            for x in 0..width {
                let Some(color) = self.cells[src_start + x].take() else {
                    continue;
                };
                if dst < self.height as i16 {
                    self.cells[dst as usize * width + x] = Some(color);
                }
            }
        }
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| (((idx % width) as i16, (idx / width) as i16), color))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn row_range(&self, y: i16) -> Option<std::ops::Range<usize>> {
        if y < 0 || y >= self.height as i16 {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(start..start + self.width as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}
