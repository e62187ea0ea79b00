//! Core simulation: pure game rules with no I/O dependencies.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use board::Board;
pub use game::Game;
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use shape::{template, ShapeGrid};
