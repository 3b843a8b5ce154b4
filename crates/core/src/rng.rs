//! RNG module - seedable randomness for tile spawning.
//!
//! A simple LCG keeps the core free of external dependencies and makes
//! games reproducible from a seed, which the tests and benches rely on.

use crate::types::SPAWN_VALUES;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw the value for a freshly spawned tile (2 or 4, equal odds).
    pub fn spawn_value(&mut self) -> u32 {
        SPAWN_VALUES[self.next_range(SPAWN_VALUES.len() as u32) as usize]
    }

    /// Get the current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
