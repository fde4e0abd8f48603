//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of a
//! settled piece. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. Negative y is above the visible board: pieces may spawn partially
//! above it, so placement checks treat those cells as free.

use arrayvec::ArrayVec;

use crate::core::pieces::PieceMatrix;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
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
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
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

    /// Whether a single cell may be occupied by a falling piece.
    ///
    /// Cells above the board (y < 0) are open as long as x is in range;
    /// everything below the floor or outside the walls is closed.
    #[inline]
    fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        self.cells[(y as usize) * BOARD_WIDTH + (x as usize)].is_none()
    }

    /// Can this matrix occupy (x, y) without leaving the board or overlapping
    /// a settled cell? (x, y) is the board position of the matrix's top-left.
    pub fn can_place(&self, matrix: &PieceMatrix, x: i8, y: i8) -> bool {
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied && !self.is_open(x + col as i8, y + row as i8) {
                    return false;
                }
            }
        }
        true
    }

    /// Permanently write a piece's occupied cells onto the board.
    ///
    /// Rows above the board are skipped; they should not occur if game over
    /// is detected promptly, but merging must never write out of range.
    pub fn write_piece(&mut self, matrix: &PieceMatrix, x: i8, y: i8, kind: PieceKind) {
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &occupied) in cells.iter().enumerate() {
                if occupied {
                    self.set(x + col as i8, y + row as i8, Some(kind));
                }
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        let start = y * BOARD_WIDTH;
        self.cells[start..start + BOARD_WIDTH]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every complete row and return the cleared row indices, bottom
    /// to top.
    ///
    /// Surviving rows keep their relative order and slide down by the number
    /// of cleared rows below them; vacated rows at the top become empty. The
    /// board always keeps exactly `BOARD_HEIGHT` rows. Equivalent to
    /// filtering out complete rows and prepending empty ones.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut write_y = BOARD_HEIGHT;

        for read_y in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * BOARD_WIDTH;
                let dst = write_y * BOARD_WIDTH;
                self.cells.copy_within(src..src + BOARD_WIDTH, dst);
            }
        }

        for cell in &mut self.cells[..write_y * BOARD_WIDTH] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Post-merge game-over test: any settled cell in the top row.
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..BOARD_WIDTH].iter().any(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
