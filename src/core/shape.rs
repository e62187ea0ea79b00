//! Shape catalog: the seven piece templates and the geometric rotation.
//!
//! Every template is a square `Cell` matrix so the transpose-based rotation
//! applies uniformly: I is padded to 4x4, O is 2x2, the rest are 3x3.
//! Rotations are computed, not precomputed: rotating returns a new grid and
//! never touches the template.

use crate::types::{Cell, PieceKind};

/// Largest template side (the I piece).
pub const MAX_SHAPE_SIDE: usize = 4;

/// A square `side x side` matrix of cells, stored in a fixed 4x4 array.
/// Occupied cells carry the owning kind, same convention as the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    side: u8,
    cells: [[Cell; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

const fn build(kind: PieceKind, side: u8, rows: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> ShapeGrid {
    let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    let mut y = 0;
    while y < MAX_SHAPE_SIDE {
        let mut x = 0;
        while x < MAX_SHAPE_SIDE {
            if rows[y][x] != 0 {
                cells[y][x] = Some(kind);
            }
            x += 1;
        }
        y += 1;
    }
    ShapeGrid { side, cells }
}

const I_TEMPLATE: ShapeGrid = build(
    PieceKind::I,
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const O_TEMPLATE: ShapeGrid = build(
    PieceKind::O,
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const T_TEMPLATE: ShapeGrid = build(
    PieceKind::T,
    3,
    [[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const S_TEMPLATE: ShapeGrid = build(
    PieceKind::S,
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const Z_TEMPLATE: ShapeGrid = build(
    PieceKind::Z,
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const J_TEMPLATE: ShapeGrid = build(
    PieceKind::J,
    3,
    [[1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const L_TEMPLATE: ShapeGrid = build(
    PieceKind::L,
    3,
    [[1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Get the spawn-orientation template for a piece kind.
pub fn template(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => I_TEMPLATE,
        PieceKind::O => O_TEMPLATE,
        PieceKind::T => T_TEMPLATE,
        PieceKind::S => S_TEMPLATE,
        PieceKind::Z => Z_TEMPLATE,
        PieceKind::J => J_TEMPLATE,
        PieceKind::L => L_TEMPLATE,
    }
}

impl ShapeGrid {
    /// Side length of the square matrix.
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Cell at `(x, y)` within the grid. Out-of-range reads are empty.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x as usize >= MAX_SHAPE_SIDE || y as usize >= MAX_SHAPE_SIDE {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        self.cell(x, y).is_some()
    }

    /// Iterate occupied offsets as `(dx, dy)` relative to the grid's
    /// top-left corner.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let side = self.side as usize;
        (0..side).flat_map(move |y| {
            (0..side).filter_map(move |x| {
                self.cells[y][x].map(|_| (x as i8, y as i8))
            })
        })
    }

    /// Clockwise rotation: transpose then reverse each row.
    pub fn rotated_cw(&self) -> ShapeGrid {
        let n = self.side as usize;
        let mut out = ShapeGrid {
            side: self.side,
            cells: [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        };
        for y in 0..n {
            for x in 0..n {
                out.cells[y][x] = self.cells[n - 1 - x][y];
            }
        }
        out
    }

    /// Counter-clockwise rotation (inverse of [`rotated_cw`](Self::rotated_cw)).
    pub fn rotated_ccw(&self) -> ShapeGrid {
        let n = self.side as usize;
        let mut out = ShapeGrid {
            side: self.side,
            cells: [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        };
        for y in 0..n {
            for x in 0..n {
                out.cells[y][x] = self.cells[x][n - 1 - y];
            }
        }
        out
    }
}
