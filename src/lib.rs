//! gridfall: a terminal falling-block puzzle.
//!
//! `core` holds the deterministic simulation, `engine` the accumulator-based
//! loop driver, `input` the latched key intents, and `term` the crossterm
//! presentation adapter.

pub mod core;
pub mod engine;
pub mod input;
pub mod term;
pub mod types;

pub use engine::Engine;
