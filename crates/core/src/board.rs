//! Board module - manages the playfield grid
//!
//! The board is a 10x20 grid where each cell is either empty (`0`) or holds the
//! packed color of the block that was locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Negative rows are the space above the field and are always free.

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

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
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) holds a locked block.
    ///
    /// Rows above the field (`y < 0`) are never occupied. Any other
    /// out-of-range coordinate is a caller bug; validity checks must reject
    /// those placements before the board is consulted.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return false;
        }
        let Some(i) = Self::index(x, y) else {
            panic!("board query out of range: ({x}, {y})");
        };
        self.cells[i] != EMPTY_CELL
    }

    /// Write a cell. Coordinates must be on the board.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        let Some(i) = Self::index(x, y) else {
            panic!("board write out of range: ({x}, {y})");
        };
        self.cells[i] = cell;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Check if a row has no blocks
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell == EMPTY_CELL)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Two-cursor compaction: the read cursor walks from the bottom row up and
    /// every surviving row is copied down to the write cursor. Full rows are
    /// simply skipped. Whatever lies above the final write cursor is then
    /// zero-filled. Surviving rows keep their relative order and no extra
    /// storage is used.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        // One past the next row to write; rows are written bottom up.
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY_CELL);
        cleared
    }

    /// Write a piece's absolute cells with its color.
    ///
    /// Cells above the field are not written; everything else must be on the
    /// board. Returns `false` if any cell was above the field.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], color: Color) -> bool {
        let mut all_placed = true;
        for &(x, y) in cells {
            if y < 0 {
                all_placed = false;
                continue;
            }
            self.set(x, y, color.packed());
        }
        all_placed
    }

    /// Row slice (left to right).
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Copy the grid into a 2D array (renderer-facing layout).
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Fill a whole row with `color`.
    pub fn fill_row(&mut self, y: usize, color: Color) {
        assert!(y < HEIGHT, "row out of range: {y}");
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(color.packed());
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
