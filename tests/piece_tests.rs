//! Rotation and wall-kick behavior of the active piece.

use gridfall::core::{template, ActivePiece, Board};
use gridfall::types::{PieceKind, RotationPolicy, ALL_KINDS};

#[test]
fn four_clockwise_rotations_restore_every_shape() {
    for kind in ALL_KINDS {
        let grid = template(kind);
        let back = grid.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, grid, "{:?} should round-trip", kind);
    }
}

#[test]
fn four_counter_clockwise_rotations_restore_every_shape() {
    for kind in ALL_KINDS {
        let grid = template(kind);
        let back = grid
            .rotated_ccw()
            .rotated_ccw()
            .rotated_ccw()
            .rotated_ccw();
        assert_eq!(back, grid, "{:?} should round-trip", kind);
    }
}

#[test]
fn rotation_with_ample_clearance_needs_no_kick() {
    let board = Board::new();
    for kind in ALL_KINDS {
        let mut piece = ActivePiece::spawn(kind);
        piece.x = 4;
        piece.y = 8;
        let x_before = piece.x;

        assert!(piece.try_rotate(true, RotationPolicy::WallKick, &board));
        assert_eq!(piece.x, x_before, "{:?} should not shift in open space", kind);
        assert_eq!(piece.y, 8);
    }
}

#[test]
fn wall_kick_commits_the_first_open_offset() {
    let board = Board::new();

    // Vertical I hugging the left wall: its grid pokes through the wall
    // when rotated, so the kick walk has to shift it right.
    let mut piece = ActivePiece::spawn(PieceKind::I);
    piece.grid = piece.grid.rotated_cw(); // occupies grid column 2
    piece.x = -2;
    piece.y = 5;
    assert!(!board.collides(&piece.grid, piece.x, piece.y));

    assert!(piece.try_rotate(true, RotationPolicy::WallKick, &board));
    assert!(!board.collides(&piece.grid, piece.x, piece.y));
    assert!(piece.x > -2);
}

#[test]
fn wedged_rotation_aborts_with_state_untouched() {
    let mut board = Board::new();
    // Solid walls either side of a single open column at x = 4.
    for y in 0..20 {
        for x in 0..10 {
            if x != 4 {
                board.set(x, y, Some(PieceKind::J));
            }
        }
    }

    let mut piece = ActivePiece::spawn(PieceKind::I);
    piece.grid = piece.grid.rotated_cw(); // vertical, grid column 2
    piece.x = 2; // board column 4
    piece.y = 5;
    assert!(!board.collides(&piece.grid, piece.x, piece.y));
    let before = piece;

    // Horizontal I needs four open columns; no offset within the grid side
    // can provide them.
    assert!(!piece.try_rotate(true, RotationPolicy::WallKick, &board));
    assert_eq!(piece, before);
}

#[test]
fn strict_revert_rejects_what_wall_kick_would_rescue() {
    let board = Board::new();

    let mut kicked = ActivePiece::spawn(PieceKind::I);
    kicked.grid = kicked.grid.rotated_cw();
    kicked.x = -2;
    kicked.y = 5;
    let mut strict = kicked;

    assert!(kicked.try_rotate(true, RotationPolicy::WallKick, &board));
    assert!(!strict.try_rotate(true, RotationPolicy::StrictRevert, &board));
    assert_eq!(strict.x, -2);
    assert_eq!(strict.grid, template(PieceKind::I).rotated_cw());
}
