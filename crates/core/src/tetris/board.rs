//! Board module - manages the Tetris grid
//!
//! The board is a 10x20 grid where each cell can be empty or tagged with the
//! piece kind that filled it (its color).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, TETRIS_HEIGHT, TETRIS_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (TETRIS_WIDTH as usize) * (TETRIS_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
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

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= TETRIS_WIDTH as i8 || y < 0 || y >= TETRIS_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (TETRIS_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        TETRIS_WIDTH
    }

    pub fn height(&self) -> u8 {
        TETRIS_HEIGHT
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

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= TETRIS_HEIGHT as usize {
            return false;
        }
        let start = y * TETRIS_WIDTH as usize;
        let end = start + TETRIS_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Rows above each cleared row shift down. A single piece spans at most
    /// four rows, so at most four rows can be full at once.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = TETRIS_WIDTH as usize;
        let mut write_y = TETRIS_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..TETRIS_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                if cleared_rows.try_push(read_y).is_err() {
                    // Only reachable for hand-built boards; keep the row in place.
                    write_y -= 1;
                    self.move_row(read_y, write_y);
                }
            } else {
                write_y -= 1;
                self.move_row(read_y, write_y);
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    fn move_row(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let width = TETRIS_WIDTH as usize;
        // copy_within handles overlapping ranges safely
        self.cells
            .copy_within(from * width..from * width + width, to * width);
    }

    /// Lock cells of a piece onto the board
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> bool {
        // First check if all positions are valid
        if !cells.iter().all(|&(x, y)| self.is_valid(x, y)) {
            return false;
        }

        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_clear_full_rows_shifts_down() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Some(PieceKind::I));
        }
        board.set(4, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 18), Some(None));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Some(PieceKind::I));
            board.set(x, 17, Some(PieceKind::O));
        }
        board.set(0, 18, Some(PieceKind::Z));
        board.set(0, 16, Some(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(0, 18), Some(Some(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_lock_cells_rejects_overlap() {
        let mut board = Board::new();
        board.set(1, 1, Some(PieceKind::L));
        assert!(!board.lock_cells(&[(0, 0), (1, 1)], PieceKind::T));
        assert_eq!(board.get(0, 0), Some(None));
        assert!(board.lock_cells(&[(0, 0), (1, 0)], PieceKind::T));
        assert!(board.is_occupied(1, 0));
    }
}
