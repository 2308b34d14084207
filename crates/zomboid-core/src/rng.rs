//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a given seed always produces the same world.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::world::{Bounds, Position};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible world placement, loot rolls and spawns.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a seed for a fresh RNG (used on restart)
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with the given probability (0.0..=1.0)
    pub fn chance(&mut self, probability: f32) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.gen_range(0.0f32..1.0) < probability
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.rn2(items.len() as u32) as usize)
        }
    }

    /// Uniformly random cell inside the bounds
    pub fn random_position(&mut self, bounds: Bounds) -> Position {
        Position::new(
            self.rn2(bounds.width.max(0) as u32) as i32,
            self.rn2(bounds.height.max(0) as u32) as i32,
        )
    }

    /// Uniformly random cell on the outer ring of the bounds
    pub fn random_edge_position(&mut self, bounds: Bounds) -> Position {
        let max_x = (bounds.width - 1).max(0);
        let max_y = (bounds.height - 1).max(0);
        let along_x = self.rn2(bounds.width.max(0) as u32) as i32;
        let along_y = self.rn2(bounds.height.max(0) as u32) as i32;
        match self.rn2(4) {
            0 => Position::new(along_x, 0),
            1 => Position::new(along_x, max_y),
            2 => Position::new(0, along_y),
            _ => Position::new(max_x, along_y),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
