//! Board module - the grid of locked cells
//!
//! The board is `cols` x `rows` cells (10 columns, 20 rows by default) stored as a
//! flat row-major `Vec<u8>`. A cell holds 0 when empty or the locked piece's
//! color index (1..=7).
//! Coordinates: (x, y) with x growing right from 0 and y growing down from 0.
//! Rows above the board (y < 0) exist only for falling pieces, never as cells.

use crate::piece::Piece;
use crate::types::{PieceKind, BOARD_WIDTH, DEFAULT_BOARD_ROWS};

/// Result of writing a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// Number of blocks written (blocks outside the grid are skipped)
    pub written: u8,
    /// At least one block was above the visible board
    pub above_board: bool,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells (y * cols + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board with the standard 10 columns
    pub fn new(rows: usize) -> Self {
        Self::with_size(rows, BOARD_WIDTH as usize)
    }

    /// Create an empty board with an explicit column count
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build a board from rows of cell values (top row first).
    ///
    /// Returns `None` if the rows are empty or ragged, or a value is outside 0..=7.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        let cols = rows.first().map_or(BOARD_WIDTH as usize, Vec::len);
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        if rows.iter().flatten().any(|&v| PieceKind::from_cell(v).is_none() && v != 0) {
            return None;
        }
        Some(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Rows of cell values, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return None;
        }
        Some(y as usize * self.cols + x as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at (x, y), `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set or clear a cell. Returns false outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Option<PieceKind>) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell.map_or(0, PieceKind::cell_value);
                true
            }
            None => false,
        }
    }

    /// Inside the grid and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != 0)
    }

    /// Whether a falling block may sit at (x, y): inside the columns, above the
    /// floor, and either above the visible board or on an empty cell.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        if x < 0 || x as usize >= self.cols || y >= self.rows as i32 {
            return false;
        }
        y < 0 || self.get(x, y) == Some(0)
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&c| c != 0))
    }

    /// Whether the piece has come to rest: moving it down one row would put a
    /// block below the floor or onto an occupied cell.
    pub fn can_lock(&self, piece: &Piece) -> bool {
        piece.blocks().iter().any(|&(x, y)| {
            let below = y + 1;
            below >= self.rows as i32 || (below >= 0 && self.get(x, below).map_or(true, |c| c != 0))
        })
    }

    /// Write the piece's color index into the board.
    ///
    /// Blocks outside the grid are skipped; blocks above the visible board are
    /// reported through [`LockOutcome::above_board`].
    pub fn lock(&mut self, piece: &Piece) -> LockOutcome {
        let mut outcome = LockOutcome::default();
        for &(x, y) in piece.blocks() {
            if y < 0 {
                outcome.above_board = true;
                continue;
            }
            if self.set(x, y, Some(piece.kind())) {
                outcome.written += 1;
            }
        }
        outcome
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are compacted bottom-to-top in place and empty rows fill the top,
    /// so any number of simultaneous clears (including four at once) is handled
    /// in one pass. Row count never changes.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut cleared = 0;
        let mut write_y = self.rows;

        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(0);
        cleared
    }

    /// Every block stays inside the columns after shifting by `dx`
    pub fn is_within_horizontal_bounds(&self, piece: &Piece, dx: i32) -> bool {
        piece.blocks().iter().all(|&(x, _)| {
            let nx = x + dx;
            nx >= 0 && (nx as usize) < self.cols
        })
    }

    /// Shifting by (dx, dy) would put a block somewhere it cannot be
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece
            .blocks()
            .iter()
            .any(|&(x, y)| !self.is_open(x + dx, y + dy))
    }

    /// Raw cells, row-major
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_ROWS as usize)
    }
}
