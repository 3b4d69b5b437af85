//! [`RandomSource`] implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::traits::RandomSource;

/// Uses the calling thread's RNG, so no state is shared between handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator behind a mutex.
///
/// The same seed yields the same sequence of picks.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        // A panic elsewhere while holding the lock leaves the RNG usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_thread_random_in_range() {
        let source = ThreadRandom;
        for _ in 0..200 {
            assert!(source.pick(5) < 5);
        }
        assert_eq!(source.pick(1), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let picks_a: Vec<usize> = (0..50).map(|_| a.pick(1000)).collect();
        let picks_b: Vec<usize> = (0..50).map(|_| b.pick(1000)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_seeded_random_shared_across_threads() {
        let source = Arc::new(SeededRandom::new(7));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || (0..100).all(|_| source.pick(3) < 3))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
