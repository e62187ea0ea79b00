//! Seeded RNG for piece selection.
//!
//! A small LCG keeps whole games reproducible under a seed, which the tests
//! and benchmarks rely on. Constants from Numerical Recipes.

use crate::types::{PieceKind, ALL_KINDS};

#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG. A zero seed is remapped to 1 so the stream
    /// never degenerates.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a piece kind, uniform over the seven.
    pub fn next_kind(&mut self) -> PieceKind {
        ALL_KINDS[self.next_range(ALL_KINDS.len() as u32) as usize]
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
