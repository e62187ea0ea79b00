//! The active falling piece: position, rotation, and the wall-kick search.

use crate::core::board::Board;
use crate::core::shape::{template, ShapeGrid};
use crate::types::{PieceKind, RotationPolicy, BOARD_WIDTH};

/// Spawn column for a template of the given side: horizontally centered,
/// `floor(width / 2) - ceil(side / 2)`.
pub fn spawn_col(side: u8) -> i8 {
    (BOARD_WIDTH as i8) / 2 - ((side as i8) + 1) / 2
}

/// The current falling piece. `(x, y)` is the board position of the shape
/// grid's top-left corner; it may sit partly above the visible top right
/// after spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub grid: ShapeGrid,
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// A new piece in spawn orientation at the centered spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let grid = template(kind);
        let x = spawn_col(grid.side());
        Self { grid, kind, x, y: 0 }
    }

    /// Rotate against the board, resolving collisions per `policy`.
    ///
    /// With `WallKick`, horizontal offsets are probed in the alternating
    /// expanding order `+1, -2, +3, -4, ...`; the first open offset commits
    /// both the rotation and the shift. Once the offset magnitude would pass
    /// the grid side the rotation aborts and the piece is left untouched.
    /// With `StrictRevert` any collision aborts immediately.
    ///
    /// Returns true when the rotation was committed.
    pub fn try_rotate(&mut self, clockwise: bool, policy: RotationPolicy, board: &Board) -> bool {
        let rotated = if clockwise {
            self.grid.rotated_cw()
        } else {
            self.grid.rotated_ccw()
        };

        if !board.collides(&rotated, self.x, self.y) {
            self.grid = rotated;
            return true;
        }

        if policy == RotationPolicy::StrictRevert {
            return false;
        }

        let mut offset: i8 = 1;
        while offset.unsigned_abs() <= rotated.side() {
            if !board.collides(&rotated, self.x + offset, self.y) {
                self.x += offset;
                self.grid = rotated;
                return true;
            }
            offset = -(offset + offset.signum());
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_horizontally_centered() {
        // floor(10/2) - ceil(side/2)
        assert_eq!(spawn_col(4), 3); // I
        assert_eq!(spawn_col(3), 3); // T, S, Z, J, L
        assert_eq!(spawn_col(2), 4); // O
    }

    #[test]
    fn spawn_starts_at_top_row() {
        let piece = ActivePiece::spawn(PieceKind::T);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.grid, template(PieceKind::T));
    }

    #[test]
    fn free_rotation_commits_without_moving() {
        let board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::T);
        piece.y = 5;

        assert!(piece.try_rotate(true, RotationPolicy::WallKick, &board));
        assert_eq!((piece.x, piece.y), (3, 5));
        assert_eq!(piece.grid, template(PieceKind::T).rotated_cw());
    }

    #[test]
    fn kick_shifts_away_from_the_left_wall() {
        let board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);
        piece.grid = piece.grid.rotated_cw(); // vertical, occupying column 2
        piece.x = -2; // vertical bar sits in board column 0
        piece.y = 5;
        assert!(!board.collides(&piece.grid, piece.x, piece.y));

        // Rotating back to horizontal at x = -2 pokes through the wall;
        // the kick walk must find an offset that frees it.
        assert!(piece.try_rotate(true, RotationPolicy::WallKick, &board));
        assert!(piece.x > -2);
        assert!(!board.collides(&piece.grid, piece.x, piece.y));
    }

    #[test]
    fn strict_revert_never_searches() {
        let board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);
        piece.grid = piece.grid.rotated_cw();
        piece.x = -2;
        piece.y = 5;
        let before = piece;

        assert!(!piece.try_rotate(true, RotationPolicy::StrictRevert, &board));
        assert_eq!(piece, before);
    }
}
