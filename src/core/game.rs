//! The simulation: gravity steps, the lock sequence, scoring, leveling,
//! spawning, and game-over detection.
//!
//! All mutation flows through this type. Once `game_over` is set every
//! mutating call is a silent no-op until [`Game::reset`]; collaborators are
//! not required to check first.

use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{drop_interval_ms, level_for_score, line_clear_score};
use crate::types::{PieceKind, RotationPolicy, BASE_DROP_MS};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    drop_interval_ms: u32,
    game_over: bool,
    rotation_policy: RotationPolicy,
}

impl Game {
    /// A fresh game with the first piece already spawned.
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            game_over: false,
            rotation_policy: RotationPolicy::default(),
        };
        game.spawn_next();
        game
    }

    pub fn with_rotation_policy(mut self, policy: RotationPolicy) -> Self {
        self.rotation_policy = policy;
        self
    }

    /// Re-initialize for a new round: empty board, score 0, level 1,
    /// base gravity, game-over cleared, first piece spawned. The RNG
    /// continues its stream.
    pub fn reset(&mut self) {
        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.game_over = false;
        self.active = None;
        self.spawn_next();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        self.rotation_policy
    }

    /// One gravity step: move the active piece down a row, or lock it when
    /// the row below is blocked. Returns false only when the guard dropped
    /// the call (game over or no active piece).
    pub fn step_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        if !self.board.collides(&piece.grid, piece.x, piece.y + 1) {
            piece.y += 1;
            self.active = Some(piece);
        } else {
            self.lock_active();
        }
        true
    }

    /// Shift the active piece one column; revert on collision.
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        if self.board.collides(&piece.grid, piece.x + dir, piece.y) {
            return false;
        }
        piece.x += dir;
        self.active = Some(piece);
        true
    }

    /// Rotate the active piece under the configured policy.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let rotated = piece.try_rotate(clockwise, self.rotation_policy, &self.board);
        if rotated {
            self.active = Some(piece);
        }
        rotated
    }

    /// Replace the active piece with a specific kind at its spawn position,
    /// applying the usual spawn-collision rule. Used by tests and by the
    /// normal spawn path.
    pub fn spawn_piece_of(&mut self, kind: PieceKind) {
        if self.game_over {
            return;
        }
        let piece = ActivePiece::spawn(kind);
        if self.board.collides(&piece.grid, piece.x, piece.y) {
            self.game_over = true;
        }
        // The piece stays visible even on a blocked spawn so the final
        // overlap can be rendered under the game-over overlay.
        self.active = Some(piece);
    }

    fn spawn_next(&mut self) {
        let kind = self.rng.next_kind();
        self.spawn_piece_of(kind);
    }

    /// Lock-and-merge sequence: settle the piece, sweep rows, award score,
    /// recompute level and gravity, then spawn the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(&piece.grid, piece.x, piece.y);

        let cleared = self.board.sweep_full_rows();
        if cleared > 0 {
            self.score += line_clear_score(cleared, self.level);
            let level = level_for_score(self.score);
            if level > self.level {
                self.level = level;
                self.drop_interval_ms = drop_interval_ms(level);
            }
        }

        self.spawn_next();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
