//! Moment accumulators and index finalisation.
//!
//! Each iteration contributes three model outputs:
//!
//! - `f0 = f(s1)`: base replicate
//! - `f1 = f(arg1)`: shares the index set with `s1`
//! - `f2 = f(arg2)`: shares the complement with `s1`
//!
//! The closed first-order variance of the index set is `Cov(f0, f1)` and its
//! total-effect variance is `E[(f0 - f2)^2] / 2` (Jansen). Dividing both by
//! `Var(f0)` gives the lower and total Super Sobol indices.
//!
//! Outputs are shifted by the first `f0` before they are summed, so the sums
//! stay on the scale of the output's spread rather than its offset.

use super::error::EstimationError;

/// Fraction of the centred second moment below which the output variance
/// counts as zero.
pub const DEGENERATE_VARIANCE_TOLERANCE: f64 = 1e-10;

/// Lower and total Super Sobol indices with the moments they derive from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuperSobolIndices {
    /// First-order (closed) index of the set.
    pub lower: f64,
    /// Total-effect index of the set.
    pub total: f64,
    /// Estimated output mean.
    pub mean: f64,
    /// Estimated output variance.
    pub variance: f64,
    /// Number of iterations accumulated.
    pub samples: usize,
}

/// Running sums over all iterations since construction.
///
/// `f0` and `f1` are accumulated relative to [`reference`](Self::reference),
/// the first `f0` seen.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::sensitivity::MomentAccumulators;
///
/// let mut acc = MomentAccumulators::new();
/// // Model depends only on the index set: f1 == f0, f2 constant
/// for (f0, f2) in [(1.0, 0.0), (3.0, 0.0), (2.0, 0.0), (2.0, 0.0)] {
///     acc.update(f0, f0, f2);
/// }
/// let indices = acc.finalize().unwrap();
/// assert_eq!(indices.lower, 1.0);
/// assert_eq!(indices.mean, 2.0);
/// assert_eq!(indices.samples, 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MomentAccumulators {
    count: usize,
    reference: f64,
    sum_f0: f64,
    sum_f1: f64,
    sum_f0_sq: f64,
    sum_f0_f1: f64,
    sum_jansen: f64,
}

impl MomentAccumulators {
    /// Creates zeroed accumulators.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one iteration's outputs.
    #[inline]
    pub fn update(&mut self, f0: f64, f1: f64, f2: f64) {
        if self.count == 0 {
            self.reference = f0;
        }
        self.count += 1;
        let g0 = f0 - self.reference;
        let g1 = f1 - self.reference;
        self.sum_f0 += g0;
        self.sum_f1 += g1;
        self.sum_f0_sq += g0 * g0;
        self.sum_f0_f1 += g0 * g1;
        let diff = f0 - f2;
        self.sum_jansen += diff * diff;
    }

    /// Number of iterations accumulated.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Shift applied to `f0` and `f1` (the first `f0`, zero before any update).
    #[inline]
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Sum of shifted `f0`.
    #[inline]
    pub fn sum_f0(&self) -> f64 {
        self.sum_f0
    }

    /// Sum of shifted `f1`.
    #[inline]
    pub fn sum_f1(&self) -> f64 {
        self.sum_f1
    }

    /// Sum of shifted `f0²`.
    #[inline]
    pub fn sum_f0_sq(&self) -> f64 {
        self.sum_f0_sq
    }

    /// Sum of shifted `f0 · f1`.
    #[inline]
    pub fn sum_f0_f1(&self) -> f64 {
        self.sum_f0_f1
    }

    /// Sum of `(f0 - f2)²`.
    #[inline]
    pub fn sum_jansen(&self) -> f64 {
        self.sum_jansen
    }

    /// Computes mean, variance and both indices.
    ///
    /// # Errors
    ///
    /// - `NotComputed` if nothing has been accumulated
    /// - `DegenerateVariance` if the variance is NaN or not above
    ///   `DEGENERATE_VARIANCE_TOLERANCE` times the centred second moment
    pub fn finalize(&self) -> Result<SuperSobolIndices, EstimationError> {
        if self.count == 0 {
            return Err(EstimationError::NotComputed);
        }
        let n = self.count as f64;
        let m0 = self.sum_f0 / n;
        let m1 = self.sum_f1 / n;
        let second_moment = self.sum_f0_sq / n;
        let variance = second_moment - m0 * m0;

        if variance.is_nan() || variance <= DEGENERATE_VARIANCE_TOLERANCE * second_moment {
            return Err(EstimationError::DegenerateVariance { variance });
        }

        let lower = (self.sum_f0_f1 / n - m0 * m1) / variance;
        let total = self.sum_jansen / (2.0 * n) / variance;

        Ok(SuperSobolIndices {
            lower,
            total,
            mean: self.reference + m0,
            variance,
            samples: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_not_computed() {
        assert_eq!(
            MomentAccumulators::new().finalize(),
            Err(EstimationError::NotComputed)
        );
    }

    #[test]
    fn test_constant_output_degenerate() {
        let mut acc = MomentAccumulators::new();
        for _ in 0..100 {
            acc.update(1e6 + 0.1, 1e6 + 0.1, 1e6 + 0.1);
        }
        assert!(matches!(
            acc.finalize(),
            Err(EstimationError::DegenerateVariance { .. })
        ));
    }

    #[test]
    fn test_nan_output_degenerate() {
        let mut acc = MomentAccumulators::new();
        acc.update(f64::NAN, 1.0, 1.0);
        acc.update(2.0, 1.0, 1.0);
        assert!(matches!(
            acc.finalize(),
            Err(EstimationError::DegenerateVariance { .. })
        ));
    }

    #[test]
    fn test_hand_computed_indices() {
        // f0 = [1, 2, 3, 4], f1 = [2, 1, 4, 3], f2 = [1, 1, 1, 1]
        let mut acc = MomentAccumulators::new();
        for (f0, f1, f2) in [(1.0, 2.0, 1.0), (2.0, 1.0, 1.0), (3.0, 4.0, 1.0), (4.0, 3.0, 1.0)] {
            acc.update(f0, f1, f2);
        }
        let indices = acc.finalize().unwrap();
        assert_relative_eq!(indices.mean, 2.5);
        assert_relative_eq!(indices.variance, 1.25);
        // E[f0 f1] = (2 + 2 + 12 + 12) / 4 = 7
        assert_relative_eq!(indices.lower, (7.0 - 6.25) / 1.25);
        // E[(f0 - f2)^2] / 2 = (0 + 1 + 4 + 9) / 8
        assert_relative_eq!(indices.total, 14.0 / 8.0 / 1.25);
    }

    #[test]
    fn test_identical_replicates() {
        // f1 == f0 and f2 == f0: lower one, total zero
        let mut acc = MomentAccumulators::new();
        for x in [0.5, -1.0, 2.0, 3.5] {
            acc.update(x, x, x);
        }
        let indices = acc.finalize().unwrap();
        assert_relative_eq!(indices.lower, 1.0, epsilon = 1e-12);
        assert_eq!(indices.total, 0.0);
    }

    #[test]
    fn test_accumulators_track_sums() {
        let mut acc = MomentAccumulators::new();
        acc.update(2.0, 3.0, 5.0);
        assert_eq!(acc.count(), 1);
        assert_eq!(acc.reference(), 2.0);
        assert_eq!(acc.sum_f0(), 0.0);
        assert_eq!(acc.sum_f1(), 1.0);
        assert_eq!(acc.sum_jansen(), 9.0);

        acc.update(4.0, 1.0, 4.0);
        assert_eq!(acc.reference(), 2.0);
        assert_eq!(acc.sum_f0(), 2.0);
        assert_eq!(acc.sum_f1(), 0.0);
        assert_eq!(acc.sum_f0_sq(), 4.0);
        assert_eq!(acc.sum_f0_f1(), -2.0);
        assert_eq!(acc.sum_jansen(), 9.0);
    }

    #[test]
    fn test_offset_does_not_bias_indices() {
        // Same spread around 0 and around 1e8; f1 has a sampling offset from f0
        let outputs = [(1.0, 2.5, 1.0), (2.0, 0.5, 1.0), (3.0, 4.5, 1.0), (4.0, 2.5, 1.0)];
        let finalize_with = |offset: f64| {
            let mut acc = MomentAccumulators::new();
            for (f0, f1, f2) in outputs {
                acc.update(offset + f0, offset + f1, offset + f2);
            }
            acc.finalize().unwrap()
        };
        let base = finalize_with(0.0);
        let shifted = finalize_with(1e8);
        assert_relative_eq!(base.variance, 1.25);
        assert_relative_eq!(shifted.variance, base.variance, max_relative = 1e-9);
        assert_relative_eq!(shifted.lower, base.lower, max_relative = 1e-9);
        assert_relative_eq!(shifted.total, base.total, max_relative = 1e-9);
        assert_relative_eq!(shifted.mean, 1e8 + 2.5);
    }

    #[test]
    fn test_small_scale_not_degenerate() {
        let mut acc = MomentAccumulators::new();
        for x in [1.0, 2.0, 3.0, 4.0] {
            acc.update(1e-7 * x, 1e-7 * x, 0.0);
        }
        let indices = acc.finalize().unwrap();
        assert_relative_eq!(indices.variance, 1.25e-14, max_relative = 1e-9);
        assert_relative_eq!(indices.lower, 1.0, max_relative = 1e-9);
    }
}
