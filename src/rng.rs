//! Seedable random source shared by every generation strategy.
//!
//! Uses ChaCha8 so that a seed reproduces the same maze on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct MazeRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MazeRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this stream was built from; replaying it reproduces the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `[min, max)`.
    ///
    /// Returns `min` if the range is empty.
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform index into a collection of `len` items. Returns 0 for an empty collection.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    pub fn coin_flip(&mut self) -> bool {
        self.next_range(0, 2) == 0
    }

    /// Draw-and-remove shuffle: repeatedly takes a uniformly chosen remaining item.
    pub fn shuffle<T: Copy>(&mut self, items: &mut [T]) {
        let mut remaining: Vec<T> = items.to_vec();
        for slot in items.iter_mut() {
            let pick = self.next_index(remaining.len());
            *slot = remaining.remove(pick);
        }
    }
}
