//! Quasi-Monte Carlo sequence trait.
//!
//! Low-discrepancy sequences cover the unit hypercube more evenly than
//! pseudo-random draws, which speeds up convergence of Monte Carlo
//! integrals such as the variance decompositions behind Sobol indices.

use super::error::SequenceError;

/// Trait for low-discrepancy sequences used in quasi-Monte Carlo methods.
///
/// Implementations own their cursor and any randomisation state; two
/// instances never share state.
pub trait LowDiscrepancySequence {
    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Advances the sequence and returns the next point.
    ///
    /// # Returns
    ///
    /// A slice of `dimension()` values, each in the open interval (0, 1).
    fn next_point(&mut self) -> &[f64];

    /// Returns the most recently generated point, if any.
    fn current_point(&self) -> Option<&[f64]>;

    /// Returns the `index`-th coordinate (1-based) of the most recent point.
    ///
    /// # Errors
    ///
    /// - `NoPointGenerated` before the first call to [`next_point`](Self::next_point)
    /// - `CoordinateOutOfRange` if `index` is outside `[1, dimension()]`
    fn coordinate(&self, index: usize) -> Result<f64, SequenceError> {
        let point = self.current_point().ok_or(SequenceError::NoPointGenerated)?;
        if index == 0 || index > point.len() {
            return Err(SequenceError::CoordinateOutOfRange {
                index,
                dimension: point.len(),
            });
        }
        Ok(point[index - 1])
    }

    /// Resets the sequence to its initial state.
    ///
    /// After calling this method, the sequence will produce the same
    /// points as a newly initialised instance with the same options.
    fn reset(&mut self);

    /// Skips ahead by `n` points in the sequence.
    ///
    /// Lets independent consumers work on non-overlapping blocks.
    fn skip(&mut self, n: usize);
}
