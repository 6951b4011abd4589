use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;

/// Source of every random choice the table makes: shuffles, AI bluffs and
/// seat selection. Swap in a scripted implementation for reproducible tests.
pub trait RandomSource {
    /// Shuffles the cards in place.
    fn shuffle(&mut self, cards: &mut [Card]);
    /// Uniform sample from `[0, 1)`.
    fn uniform(&mut self) -> f64;
    /// Uniform index in `0..n`. `n` must be positive.
    fn pick(&mut self, n: usize) -> usize;
}

/// ChaCha20-backed source; the same seed always replays the same game.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "pick needs a non-empty range");
        self.rng.random_range(0..n.max(1))
    }
}
