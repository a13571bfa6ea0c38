//! Seeded pseudo-random generator for sequence randomisation.
//!
//! [`SequenceRng`] draws the random start offsets and digit permutations of a
//! randomised low-discrepancy sequence. It is never used to produce Monte
//! Carlo draws directly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded generator owned by a single sequence instance.
///
/// The same seed always produces the same randomisation, so a randomised
/// sequence is reproducible from its seed alone.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::rng::SequenceRng;
///
/// let mut rng1 = SequenceRng::from_seed(12345);
/// let mut rng2 = SequenceRng::from_seed(12345);
/// assert_eq!(rng1.gen_offset(1 << 20), rng2.gen_offset(1 << 20));
/// assert_eq!(rng1.seed(), 12345);
/// ```
pub struct SequenceRng {
    inner: StdRng,
    /// Seed used for initialisation (kept for logging and reproducibility).
    seed: u64,
}

impl SequenceRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws an offset uniformly from `[0, bound)`; returns 0 when `bound` is 0.
    #[inline]
    pub fn gen_offset(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.inner.gen_range(0..bound)
        }
    }

    /// Returns a permutation of the digits `0..base` that keeps 0 fixed.
    ///
    /// Fixing the zero digit keeps trailing zeros of the radical inverse
    /// zero, so permuted coordinates stay strictly inside (0, 1).
    pub fn digit_permutation(&mut self, base: u32) -> Vec<u32> {
        let mut digits: Vec<u32> = (0..base).collect();
        if base > 2 {
            digits[1..].shuffle(&mut self.inner);
        }
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range() {
        let mut rng = SequenceRng::from_seed(7);
        for _ in 0..1_000 {
            assert!(rng.gen_offset(10) < 10);
        }
        assert_eq!(rng.gen_offset(0), 0);
    }

    #[test]
    fn test_digit_permutation_fixes_zero() {
        let mut rng = SequenceRng::from_seed(42);
        for base in [2_u32, 3, 5, 7, 11, 13] {
            let perm = rng.digit_permutation(base);
            assert_eq!(perm[0], 0);
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..base).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut a = SequenceRng::from_seed(99);
        let mut b = SequenceRng::from_seed(99);
        assert_eq!(a.digit_permutation(29), b.digit_permutation(29));
    }
}
