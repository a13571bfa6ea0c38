//! Randomised Halton sequence.
//!
//! Coordinate `d` of point `n` is the radical inverse of `n` in the `d`-th
//! prime base. Two optional randomisations reduce correlation between runs
//! while keeping every run low-discrepancy:
//!
//! - **Random start**: each dimension starts at its own random offset in
//!   `[0, MAX_RANDOM_START)`, which is a random shift along that dimension's
//!   van der Corput sequence
//! - **Random permutation**: each dimension scrambles its digits with a random
//!   permutation that keeps the digit 0 fixed
//!
//! Both are drawn once at construction from a [`SequenceRng`] seeded from
//! [`HaltonOptions::seed`]; [`reset`](LowDiscrepancySequence::reset) replays
//! the same points.
//!
//! ## References
//!
//! - Halton, J.H. (1960). "On the efficiency of certain quasi-random sequences
//!   of points in evaluating multi-dimensional integrals." Numer. Math. 2.
//! - Wang, X. & Hickernell, F.J. (2000). "Randomized Halton sequences."
//!   Math. Comput. Modelling 32.
//! - Braaten, E. & Weller, G. (1979). "An improved low-discrepancy sequence
//!   for multidimensional quasi-Monte Carlo integration." J. Comput. Phys. 33.

use super::error::SequenceError;
use super::prng::SequenceRng;
use super::qmc::LowDiscrepancySequence;

/// Upper bound (exclusive) of the per-dimension random start offset.
pub const MAX_RANDOM_START: u64 = 1 << 20;

/// Largest value strictly below 1.0.
const ONE_MINUS_EPSILON: f64 = 1.0 - f64::EPSILON / 2.0;

/// Randomisation options for [`HaltonSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HaltonOptions {
    /// Start each dimension at a random offset.
    pub random_start: bool,
    /// Scramble digits with a random permutation per dimension.
    pub random_permute: bool,
    /// Seed of the randomisation.
    pub seed: u64,
}

impl Default for HaltonOptions {
    /// Random start and random permutation enabled, seed 0.
    fn default() -> Self {
        Self {
            random_start: true,
            random_permute: true,
            seed: 0,
        }
    }
}

impl HaltonOptions {
    /// Plain Halton sequence with no randomisation.
    #[inline]
    pub fn deterministic() -> Self {
        Self {
            random_start: false,
            random_permute: false,
            seed: 0,
        }
    }

    /// Returns a copy with the given seed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether any randomisation is enabled.
    #[inline]
    pub fn is_randomised(&self) -> bool {
        self.random_start || self.random_permute
    }
}

/// Returns the first `count` prime numbers.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::rng::first_primes;
///
/// assert_eq!(first_primes(6), vec![2, 3, 5, 7, 11, 13]);
/// ```
pub fn first_primes(count: usize) -> Vec<u32> {
    let mut primes: Vec<u32> = Vec::with_capacity(count);
    let mut candidate = 2_u32;
    while primes.len() < count {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}

/// Halton sequence with optional random start and random digit permutation.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::rng::{HaltonOptions, HaltonSequence, LowDiscrepancySequence};
///
/// let mut a = HaltonSequence::new(6, HaltonOptions::default().with_seed(3)).unwrap();
/// let mut b = HaltonSequence::new(6, HaltonOptions::default().with_seed(3)).unwrap();
/// assert_eq!(a.next_point(), b.next_point());
///
/// assert!(HaltonSequence::new(0, HaltonOptions::default()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HaltonSequence {
    options: HaltonOptions,
    bases: Vec<u32>,
    /// Per-dimension start offsets (all zero without random start).
    offsets: Vec<u64>,
    /// Per-dimension digit permutations (identity without random permute).
    permutations: Vec<Vec<u32>>,
    /// Number of points generated since construction or reset.
    index: u64,
    point: Vec<f64>,
    has_point: bool,
}

impl HaltonSequence {
    /// Creates a `dimension`-dimensional sequence.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidDimension` if `dimension` is 0.
    pub fn new(dimension: usize, options: HaltonOptions) -> Result<Self, SequenceError> {
        if dimension == 0 {
            return Err(SequenceError::InvalidDimension(dimension));
        }

        let bases = first_primes(dimension);
        let mut rng = SequenceRng::from_seed(options.seed);

        let offsets = if options.random_start {
            (0..dimension)
                .map(|_| rng.gen_offset(MAX_RANDOM_START))
                .collect()
        } else {
            vec![0; dimension]
        };

        let permutations = bases
            .iter()
            .map(|&base| {
                if options.random_permute {
                    rng.digit_permutation(base)
                } else {
                    (0..base).collect()
                }
            })
            .collect();

        Ok(Self {
            options,
            bases,
            offsets,
            permutations,
            index: 0,
            point: vec![0.0; dimension],
            has_point: false,
        })
    }

    /// Returns the randomisation options.
    #[inline]
    pub fn options(&self) -> &HaltonOptions {
        &self.options
    }

    /// Returns the prime base of each dimension.
    #[inline]
    pub fn bases(&self) -> &[u32] {
        &self.bases
    }

    /// Returns the number of points generated since construction or reset.
    #[inline]
    pub fn points_generated(&self) -> u64 {
        self.index
    }
}

/// Permuted radical inverse of `n` in `base`.
#[inline]
fn radical_inverse(mut n: u64, base: u32, permutation: &[u32]) -> f64 {
    let b = u64::from(base);
    let inv_base = 1.0 / f64::from(base);
    let mut factor = inv_base;
    let mut value = 0.0;
    while n > 0 {
        let digit = (n % b) as usize;
        value += f64::from(permutation[digit]) * factor;
        n /= b;
        factor *= inv_base;
    }
    value.min(ONE_MINUS_EPSILON)
}

impl LowDiscrepancySequence for HaltonSequence {
    #[inline]
    fn dimension(&self) -> usize {
        self.bases.len()
    }

    fn next_point(&mut self) -> &[f64] {
        self.index += 1;
        for (d, value) in self.point.iter_mut().enumerate() {
            // Index starts at 1 so the all-zero digit string never occurs.
            let n = self.offsets[d] + self.index;
            *value = radical_inverse(n, self.bases[d], &self.permutations[d]);
        }
        self.has_point = true;
        &self.point
    }

    #[inline]
    fn current_point(&self) -> Option<&[f64]> {
        self.has_point.then_some(self.point.as_slice())
    }

    fn reset(&mut self) {
        self.index = 0;
        self.has_point = false;
        self.point.iter_mut().for_each(|v| *v = 0.0);
    }

    fn skip(&mut self, n: usize) {
        self.index += n as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes() {
        assert_eq!(first_primes(0), Vec::<u32>::new());
        assert_eq!(first_primes(10), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(first_primes(100)[99], 541);
    }

    #[test]
    fn test_van_der_corput_base_two() {
        let identity: Vec<u32> = (0..2).collect();
        let expected = [0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875];
        for (n, &x) in expected.iter().enumerate() {
            assert_eq!(radical_inverse(n as u64 + 1, 2, &identity), x);
        }
    }

    #[test]
    fn test_radical_inverse_zero_digit_fixed() {
        // Base 3 with digits 1 and 2 swapped: 1 -> 2/3, 3 = "10" -> 2/9
        let perm = vec![0, 2, 1];
        assert_eq!(radical_inverse(1, 3, &perm), 2.0 / 3.0);
        assert!((radical_inverse(3, 3, &perm) - 2.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_deterministic_second_point() {
        let mut seq = HaltonSequence::new(3, HaltonOptions::deterministic()).unwrap();
        seq.next_point();
        let second = seq.next_point().to_vec();
        assert_eq!(second, vec![0.25, 2.0 / 3.0, 0.4]);
        assert_eq!(seq.points_generated(), 2);
    }

    #[test]
    fn test_randomisation_changes_points() {
        let mut plain = HaltonSequence::new(8, HaltonOptions::deterministic()).unwrap();
        let mut randomised = HaltonSequence::new(8, HaltonOptions::default().with_seed(11)).unwrap();
        assert_ne!(plain.next_point(), randomised.next_point());
    }

    #[test]
    fn test_offsets_respect_options() {
        let start_only = HaltonOptions {
            random_start: true,
            random_permute: false,
            seed: 5,
        };
        let seq = HaltonSequence::new(5, start_only).unwrap();
        assert!(seq.offsets.iter().all(|&o| o < MAX_RANDOM_START));
        for (perm, &base) in seq.permutations.iter().zip(seq.bases()) {
            assert_eq!(perm, &(0..base).collect::<Vec<_>>());
        }
    }
}
