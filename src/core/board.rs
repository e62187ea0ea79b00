//! Board: the 10x20 grid of settled cells.
//!
//! Flat row-major array for cache locality and zero allocation. Coordinates
//! are `(x, y)` with x in 0..10 left to right and y in 0..20 top to bottom.
//! Rows above the visible top (y < 0) are treated as empty so a freshly
//! spawned piece may hang partly off-screen; everything outside the side
//! walls or below the floor is treated as solid.

use crate::core::shape::ShapeGrid;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false (and writes nothing) out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a single square is free for piece cells: inside the walls,
    /// above the floor, and either above the visible top or unoccupied.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        matches!(self.cell(x, y), Some(None))
    }

    /// Collision test for a shape grid whose top-left corner sits at
    /// `(x, y)` in board coordinates.
    pub fn collides(&self, grid: &ShapeGrid, x: i8, y: i8) -> bool {
        grid.occupied_offsets()
            .any(|(dx, dy)| !self.is_open(x + dx, y + dy))
    }

    /// Write a shape grid's occupied cells into the board. Cells above the
    /// visible top are dropped. The caller has already verified the
    /// placement with [`collides`](Self::collides); merge does not re-check.
    pub fn merge(&mut self, grid: &ShapeGrid, x: i8, y: i8) {
        for (dx, dy) in grid.occupied_offsets() {
            let (px, py) = (x + dx, y + dy);
            if py >= 0 {
                self.set(px, py, grid.cell(dx as u8, dy as u8));
            }
        }
    }

    fn is_row_full(&self, y: usize) -> bool {
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row, prepend the same number of empty rows at the
    /// top, and return the count removed. Relative order of the surviving
    /// rows is preserved. Handles 0..=height full rows in one call.
    pub fn sweep_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Set every cell to empty.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// The full cell grid, row-major, for the presentation adapter.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
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
    use crate::types::PieceKind;

    #[test]
    fn index_layout_is_row_major() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn is_open_treats_rows_above_top_as_empty() {
        let board = Board::new();
        assert!(board.is_open(4, -1));
        assert!(board.is_open(4, -3));
        assert!(!board.is_open(-1, -1));
        assert!(!board.is_open(10, -1));
    }

    #[test]
    fn is_open_rejects_walls_floor_and_occupied() {
        let mut board = Board::new();
        assert!(!board.is_open(-1, 5));
        assert!(!board.is_open(10, 5));
        assert!(!board.is_open(0, 20));
        board.set(4, 10, Some(PieceKind::T));
        assert!(!board.is_open(4, 10));
        assert!(board.is_open(4, 9));
    }
}
