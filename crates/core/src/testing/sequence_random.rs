//! Scripted random source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::matcher::RandomSource;

/// A [`RandomSource`] that returns scripted indices in order, cycling when
/// the script runs out.
///
/// Each scripted value is reduced modulo the requested length so it always
/// lands in range. Every requested length is recorded for assertions.
///
/// # Example
///
/// ```rust,ignore
/// use quotecho_core::testing::SequenceRandom;
///
/// let rng = SequenceRandom::new(vec![2, 0]);
/// assert_eq!(rng.pick(3), 2);
/// assert_eq!(rng.pick(3), 0);
/// assert_eq!(rng.recorded_lengths(), vec![3, 3]);
/// ```
#[derive(Debug)]
pub struct SequenceRandom {
    script: Vec<usize>,
    cursor: AtomicUsize,
    lengths: Mutex<Vec<usize>>,
}

impl SequenceRandom {
    /// Create a source from a script. An empty script always picks 0.
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script,
            cursor: AtomicUsize::new(0),
            lengths: Mutex::new(Vec::new()),
        }
    }

    /// Lengths passed to `pick`, in call order.
    pub fn recorded_lengths(&self) -> Vec<usize> {
        self.lengths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of picks made so far.
    pub fn pick_count(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&self, len: usize) -> usize {
        self.lengths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(len);

        let step = self.cursor.fetch_add(1, Ordering::SeqCst);
        if self.script.is_empty() {
            return 0;
        }
        self.script[step % self.script.len()] % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_cycles_and_wraps_into_range() {
        let rng = SequenceRandom::new(vec![1, 7]);
        assert_eq!(rng.pick(5), 1);
        assert_eq!(rng.pick(5), 2);
        assert_eq!(rng.pick(5), 1);
        assert_eq!(rng.pick_count(), 3);
        assert_eq!(rng.recorded_lengths(), vec![5, 5, 5]);
    }

    #[test]
    fn test_empty_script_picks_zero() {
        let rng = SequenceRandom::new(Vec::new());
        assert_eq!(rng.pick(4), 0);
    }
}
