//! Uncertainty realizations drawn from a quasi-random point.

use super::error::RealizationError;
use crate::rng::LowDiscrepancySequence;
use sobol_core::math::UncertaintyDistribution;

/// Pair of independent parameter vectors `(s1, s2)` for one iteration.
///
/// Parameter `j` (0-based) of `s1` is drawn from coordinate `j + 1` of the
/// current sequence point and parameter `j` of `s2` from coordinate
/// `j + 1 + dim`, each through parameter `j`'s distribution. Buffers are
/// allocated once and overwritten by every [`draw`](Self::draw).
///
/// # Examples
///
/// ```rust
/// use sobol_core::math::UncertaintyDistribution;
/// use sobol_engine::rng::{HaltonOptions, HaltonSequence, LowDiscrepancySequence};
/// use sobol_engine::sensitivity::UncertaintyRealization;
///
/// let dists = vec![UncertaintyDistribution::uniform(0.0, 2.0); 2];
/// let mut seq = HaltonSequence::new(4, HaltonOptions::deterministic()).unwrap();
/// seq.next_point(); // [1/2, 1/3, 1/5, 1/7]
///
/// let mut realization = UncertaintyRealization::new(2);
/// realization.draw(&seq, &dists).unwrap();
/// assert_eq!(realization.s1(), &[1.0, 2.0 / 3.0]);
/// assert_eq!(realization.s2(), &[0.4, 2.0 / 7.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UncertaintyRealization {
    s1: Vec<f64>,
    s2: Vec<f64>,
}

impl UncertaintyRealization {
    /// Allocates zeroed vectors for `dim` parameters.
    pub fn new(dim: usize) -> Self {
        Self {
            s1: vec![0.0; dim],
            s2: vec![0.0; dim],
        }
    }

    /// Number of parameters.
    #[inline]
    pub fn dim(&self) -> usize {
        self.s1.len()
    }

    /// First parameter vector.
    #[inline]
    pub fn s1(&self) -> &[f64] {
        &self.s1
    }

    /// Second parameter vector.
    #[inline]
    pub fn s2(&self) -> &[f64] {
        &self.s2
    }

    /// Overwrites both vectors from the sequence's current point.
    ///
    /// # Errors
    ///
    /// - `RealizationError::Sequence` if the sequence has no current point or
    ///   fewer than `2 * dim` coordinates
    /// - `RealizationError::Sampling` naming the first parameter whose
    ///   distribution rejects its draw
    pub fn draw<S>(
        &mut self,
        sequence: &S,
        uncertainties: &[UncertaintyDistribution],
    ) -> Result<(), RealizationError>
    where
        S: LowDiscrepancySequence + ?Sized,
    {
        let dim = self.dim();
        for (j, dist) in uncertainties.iter().enumerate().take(dim) {
            let u1 = sequence.coordinate(j + 1)?;
            let u2 = sequence.coordinate(j + 1 + dim)?;
            let to_error = |source| RealizationError::Sampling {
                parameter: j + 1,
                source,
            };
            self.s1[j] = dist.sample(u1).map_err(to_error)?;
            self.s2[j] = dist.sample(u2).map_err(to_error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{HaltonOptions, HaltonSequence, SequenceError};
    use sobol_core::types::SamplingError;

    #[test]
    fn test_point_mass_when_bounds_equal() {
        let dists = vec![UncertaintyDistribution::uniform(3.0, 3.0); 3];
        let mut seq = HaltonSequence::new(6, HaltonOptions::default().with_seed(2)).unwrap();
        let mut realization = UncertaintyRealization::new(3);
        for _ in 0..10 {
            seq.next_point();
            realization.draw(&seq, &dists).unwrap();
            assert_eq!(realization.s1(), &[3.0; 3]);
            assert_eq!(realization.s2(), &[3.0; 3]);
        }
    }

    #[test]
    fn test_reversed_bounds_name_parameter() {
        let dists = vec![
            UncertaintyDistribution::uniform(0.0, 1.0),
            UncertaintyDistribution::uniform(2.0, 1.0),
        ];
        let mut seq = HaltonSequence::new(4, HaltonOptions::deterministic()).unwrap();
        seq.next_point();
        let mut realization = UncertaintyRealization::new(2);
        let err = realization.draw(&seq, &dists).unwrap_err();
        assert_eq!(
            err,
            RealizationError::Sampling {
                parameter: 2,
                source: SamplingError::InvalidBounds {
                    family: "uniform",
                    lower: 2.0,
                    upper: 1.0
                }
            }
        );
    }

    #[test]
    fn test_draw_requires_point() {
        let dists = vec![UncertaintyDistribution::uniform(0.0, 1.0)];
        let seq = HaltonSequence::new(2, HaltonOptions::deterministic()).unwrap();
        let mut realization = UncertaintyRealization::new(1);
        assert_eq!(
            realization.draw(&seq, &dists),
            Err(RealizationError::Sequence(SequenceError::NoPointGenerated))
        );
    }

    #[test]
    fn test_draw_requires_two_coordinates_per_parameter() {
        let dists = vec![UncertaintyDistribution::uniform(0.0, 1.0); 2];
        let mut seq = HaltonSequence::new(3, HaltonOptions::deterministic()).unwrap();
        seq.next_point();
        let mut realization = UncertaintyRealization::new(2);
        assert!(matches!(
            realization.draw(&seq, &dists),
            Err(RealizationError::Sequence(
                SequenceError::CoordinateOutOfRange { index: 4, .. }
            ))
        ));
    }
}
