//! Board module - the cell grid, collision tests, merging and line clears
//!
//! The board is a 10x18 grid where each cell is empty or tagged with the kind
//! of piece that filled it. Storage is a flat row-major array, so the grid can
//! never change shape: clearing a row shifts everything above it down and
//! refills the top row, keeping the row count fixed.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..17
//! (top to bottom). Row 0 is the spawn edge.

use crate::pieces::Piece;
use crate::types::{Cell, COLS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLS as usize) * (ROWS as usize);

const WIDTH: usize = COLS as usize;
const HEIGHT: usize = ROWS as usize;

/// The game board - 10 columns x 18 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, top row is 0. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Every row above `y` settles down by one; the row count never changes.
    /// Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);
        true
    }

    /// Overwrite the first `n` rows (from the spawn edge) with empty cells.
    ///
    /// Rows below are untouched; `n` is clamped to the board height.
    pub fn clear_top_rows(&mut self, n: usize) {
        let n = n.min(HEIGHT);
        self.cells[..n * WIDTH].fill(None);
    }

    /// Whether `piece` overlaps a wall, the floor, or a filled cell.
    ///
    /// Cells above the top edge (y < 0) never collide, so a piece may sit
    /// partly above the board while spawning.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| {
            if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece's kind into every cell it covers on the board.
    ///
    /// Cells above the top edge are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Remove every full row, bottom to top, and return how many went.
    ///
    /// After a removal the same index is checked again, since the row that
    /// was above has just moved into it.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Copy the board into a `u8` grid (0 = empty, otherwise [`PieceKind::code`]).
    ///
    /// [`PieceKind::code`]: crate::types::PieceKind::code
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * WIDTH + x].map_or(0, |k| k.code());
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), HEIGHT);
        assert!(cells_2d.iter().all(|row| row.len() == WIDTH));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            flat[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..HEIGHT).map(|y| self.row(y).to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
