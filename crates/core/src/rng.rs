//! RNG module - seeded deck shuffling
//!
//! Wraps a ChaCha8 stream so that a session seed fully determines every deck
//! dealt in that process (initial deal, every restart, every reset).

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle decks.
#[derive(Debug, Clone)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// The seed this RNG was created with (for replaying a process).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = DeckRng::new(12345);
        let mut rng2 = DeckRng::new(12345);

        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeckRng::new(12345);
        let mut rng2 = DeckRng::new(54321);

        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = DeckRng::new(7);
        let mut v: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(DeckRng::new(99).seed(), 99);
        assert_eq!(DeckRng::default().seed(), 1);
    }
}
