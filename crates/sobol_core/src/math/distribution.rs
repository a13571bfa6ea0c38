//! Uncertainty distributions for model parameters.
//!
//! Each model parameter is drawn from its own distribution, whose
//! hyperparameters are given as an ordered slice (`[a, b]` for uniform).
//! [`UncertaintyDistribution`] couples a [`DistributionFamily`] with those raw
//! hyperparameters.
//!
//! Arity is checked when a distribution is constructed; value constraints
//! (e.g. `a <= b`) are checked by the sampler when a draw is taken, so a
//! distribution with reversed bounds surfaces as a sampling error at the
//! first draw that uses it.

use super::inverse_transform::InverseTransform;
use crate::types::SamplingError;
use std::fmt;

/// Supported distribution families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistributionFamily {
    /// Uniform on `[a, b]`.
    #[default]
    Uniform,
    /// Log-uniform on `[a, b]` with `a > 0`.
    LogUniform,
    /// Exponential with parameter `[rate]`.
    Exponential,
    /// Triangular with parameters `[a, c, b]` (lower, mode, upper).
    Triangular,
}

impl DistributionFamily {
    /// All supported families.
    pub const ALL: [DistributionFamily; 4] = [
        DistributionFamily::Uniform,
        DistributionFamily::LogUniform,
        DistributionFamily::Exponential,
        DistributionFamily::Triangular,
    ];

    /// Returns the family name used in error messages and study files.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            DistributionFamily::Uniform => "uniform",
            DistributionFamily::LogUniform => "log_uniform",
            DistributionFamily::Exponential => "exponential",
            DistributionFamily::Triangular => "triangular",
        }
    }

    /// Returns the number of hyperparameters the family takes.
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            DistributionFamily::Uniform | DistributionFamily::LogUniform => 2,
            DistributionFamily::Exponential => 1,
            DistributionFamily::Triangular => 3,
        }
    }

    /// Checks that `got` hyperparameters match the family's arity.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WrongArity` on mismatch.
    #[inline]
    pub fn check_arity(self, got: usize) -> Result<(), SamplingError> {
        if got == self.arity() {
            Ok(())
        } else {
            Err(SamplingError::WrongArity {
                family: self.name(),
                expected: self.arity(),
                got,
            })
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distribution of one model parameter's uncertainty.
///
/// # Examples
///
/// ```rust
/// use sobol_core::math::{DistributionFamily, UncertaintyDistribution};
///
/// let dist = UncertaintyDistribution::new(DistributionFamily::Uniform, vec![1.0, 3.0]).unwrap();
/// assert_eq!(dist.sample(0.5).unwrap(), 2.0);
///
/// // Arity is checked at construction
/// assert!(UncertaintyDistribution::new(DistributionFamily::Uniform, vec![1.0]).is_err());
///
/// // Value constraints are checked at sampling
/// let reversed = UncertaintyDistribution::uniform(3.0, 1.0);
/// assert!(reversed.sample(0.5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncertaintyDistribution {
    /// Distribution family.
    #[cfg_attr(feature = "serde", serde(default))]
    family: DistributionFamily,
    /// Raw hyperparameters, in the family's order.
    params: Vec<f64>,
}

impl UncertaintyDistribution {
    /// Creates a distribution from a family and its raw hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::WrongArity` if `params` has the wrong length.
    pub fn new(family: DistributionFamily, params: Vec<f64>) -> Result<Self, SamplingError> {
        family.check_arity(params.len())?;
        Ok(Self { family, params })
    }

    /// Uniform distribution on `[a, b]`.
    #[inline]
    pub fn uniform(a: f64, b: f64) -> Self {
        Self {
            family: DistributionFamily::Uniform,
            params: vec![a, b],
        }
    }

    /// Log-uniform distribution on `[a, b]`.
    #[inline]
    pub fn log_uniform(a: f64, b: f64) -> Self {
        Self {
            family: DistributionFamily::LogUniform,
            params: vec![a, b],
        }
    }

    /// Exponential distribution with the given rate.
    #[inline]
    pub fn exponential(rate: f64) -> Self {
        Self {
            family: DistributionFamily::Exponential,
            params: vec![rate],
        }
    }

    /// Triangular distribution on `[a, b]` with mode `c`.
    #[inline]
    pub fn triangular(a: f64, c: f64, b: f64) -> Self {
        Self {
            family: DistributionFamily::Triangular,
            params: vec![a, c, b],
        }
    }

    /// Point mass at `value`, expressed as a degenerate uniform.
    #[inline]
    pub fn point_mass(value: f64) -> Self {
        Self::uniform(value, value)
    }

    /// Returns the distribution family.
    #[inline]
    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    /// Returns the raw hyperparameters.
    #[inline]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Re-checks arity; needed for values that bypassed [`new`](Self::new),
    /// such as deserialised study files.
    #[inline]
    pub fn validate_arity(&self) -> Result<(), SamplingError> {
        self.family.check_arity(self.params.len())
    }

    /// Maps a uniform(0,1) draw into this distribution.
    ///
    /// # Errors
    ///
    /// Returns the family's `SamplingError` if a hyperparameter constraint is
    /// violated or `u` is not a probability.
    #[inline]
    pub fn sample(&self, u: f64) -> Result<f64, SamplingError> {
        InverseTransform::sample(self.family, u, &self.params)
    }
}

impl fmt::Display for UncertaintyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.family)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", p)?;
        }
        f.write_str(")")
    }
}
