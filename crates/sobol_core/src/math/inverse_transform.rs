//! Inverse-transform sampling.
//!
//! Maps a uniform(0,1) draw `u` into a draw from a target distribution by
//! evaluating the distribution's quantile function at `u`. The sampler is
//! stateless: every operation is a pure function of its arguments.
//!
//! ## Supported Families
//!
//! | Family | Hyperparameters | Quantile |
//! |--------|-----------------|----------|
//! | Uniform | `[a, b]`, `a <= b` | `a + u (b - a)` |
//! | Log-uniform | `[a, b]`, `0 < a <= b` | `exp(ln a + u (ln b - ln a))` |
//! | Exponential | `[rate]`, `rate > 0` | `-ln(1 - u) / rate` |
//! | Triangular | `[a, c, b]`, `a <= c <= b` | piecewise square root |
//!
//! Degenerate supports (`a == b`) collapse to a point mass at `a` for every
//! bounded family.

use super::distribution::DistributionFamily;
use crate::types::SamplingError;

/// Stateless inverse-transform sampler.
///
/// # Examples
///
/// ```rust
/// use sobol_core::math::{DistributionFamily, InverseTransform};
///
/// assert_eq!(InverseTransform::uniform(0.5, -1.0, 1.0).unwrap(), 0.0);
///
/// // Point mass
/// assert_eq!(InverseTransform::uniform(0.73, 3.0, 3.0).unwrap(), 3.0);
///
/// // Family dispatch with raw hyperparameters
/// let x = InverseTransform::sample(DistributionFamily::Uniform, 0.25, &[0.0, 4.0]).unwrap();
/// assert_eq!(x, 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InverseTransform;

impl InverseTransform {
    /// Draws from U(a, b).
    ///
    /// # Errors
    ///
    /// - `InvalidProbability` if `u` is outside `[0, 1]`
    /// - `InvalidBounds` if `a > b` or a bound is not finite
    #[inline]
    pub fn uniform(u: f64, a: f64, b: f64) -> Result<f64, SamplingError> {
        check_probability(u)?;
        check_bounds(DistributionFamily::Uniform, a, b)?;
        Ok(a + u * (b - a))
    }

    /// Draws from the log-uniform distribution on `[a, b]`.
    ///
    /// # Errors
    ///
    /// - `InvalidProbability` if `u` is outside `[0, 1]`
    /// - `NonPositive` if `a <= 0`
    /// - `InvalidBounds` if `a > b`
    pub fn log_uniform(u: f64, a: f64, b: f64) -> Result<f64, SamplingError> {
        check_probability(u)?;
        if a <= 0.0 {
            return Err(SamplingError::NonPositive {
                family: DistributionFamily::LogUniform.name(),
                name: "lower",
                value: a,
            });
        }
        check_bounds(DistributionFamily::LogUniform, a, b)?;
        if a == b {
            return Ok(a);
        }
        let (ln_a, ln_b) = (a.ln(), b.ln());
        Ok((ln_a + u * (ln_b - ln_a)).exp())
    }

    /// Draws from the exponential distribution with the given rate.
    ///
    /// # Errors
    ///
    /// - `InvalidProbability` if `u` is outside `[0, 1)`
    /// - `NonPositive` if `rate <= 0`
    pub fn exponential(u: f64, rate: f64) -> Result<f64, SamplingError> {
        check_probability(u)?;
        if u >= 1.0 {
            return Err(SamplingError::InvalidProbability(u));
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SamplingError::NonPositive {
                family: DistributionFamily::Exponential.name(),
                name: "rate",
                value: rate,
            });
        }
        Ok(-(-u).ln_1p() / rate)
    }

    /// Draws from the triangular distribution with support `[a, b]` and mode `c`.
    ///
    /// # Errors
    ///
    /// - `InvalidProbability` if `u` is outside `[0, 1]`
    /// - `InvalidBounds` if `a > b`
    /// - `InvalidMode` if `c` is outside `[a, b]`
    pub fn triangular(u: f64, a: f64, c: f64, b: f64) -> Result<f64, SamplingError> {
        check_probability(u)?;
        check_bounds(DistributionFamily::Triangular, a, b)?;
        if !(a <= c && c <= b) {
            return Err(SamplingError::InvalidMode {
                lower: a,
                mode: c,
                upper: b,
            });
        }
        if a == b {
            return Ok(a);
        }

        let width = b - a;
        let f_mode = (c - a) / width;
        if u < f_mode {
            Ok(a + (u * width * (c - a)).sqrt())
        } else {
            Ok(b - ((1.0 - u) * width * (b - c)).sqrt())
        }
    }

    /// Draws from `family` using its raw hyperparameter slice.
    ///
    /// # Errors
    ///
    /// - `WrongArity` if `params.len()` does not match the family
    /// - Any constraint error of the family-specific operation
    pub fn sample(family: DistributionFamily, u: f64, params: &[f64]) -> Result<f64, SamplingError> {
        family.check_arity(params.len())?;
        match family {
            DistributionFamily::Uniform => Self::uniform(u, params[0], params[1]),
            DistributionFamily::LogUniform => Self::log_uniform(u, params[0], params[1]),
            DistributionFamily::Exponential => Self::exponential(u, params[0]),
            DistributionFamily::Triangular => Self::triangular(u, params[0], params[1], params[2]),
        }
    }
}

#[inline]
fn check_probability(u: f64) -> Result<(), SamplingError> {
    if (0.0..=1.0).contains(&u) {
        Ok(())
    } else {
        Err(SamplingError::InvalidProbability(u))
    }
}

#[inline]
fn check_bounds(family: DistributionFamily, a: f64, b: f64) -> Result<(), SamplingError> {
    if a.is_finite() && b.is_finite() && a <= b {
        Ok(())
    } else {
        Err(SamplingError::InvalidBounds {
            family: family.name(),
            lower: a,
            upper: b,
        })
    }
}
