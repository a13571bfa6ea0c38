//! Error types for structured error handling.
//!
//! This module provides:
//! - `SamplingError`: A distribution hyperparameter or a uniform draw violates
//!   the constraints of its family
//! - `ModelError`: A reference model name could not be resolved

use thiserror::Error;

/// Inverse-transform sampling errors.
///
/// Raised when a distribution's hyperparameters violate the constraints of
/// its family, or when the uniform input is not a probability.
///
/// # Variants
/// - `InvalidBounds`: Lower bound exceeds upper bound (or bounds not finite)
/// - `NonPositive`: Parameter must be strictly positive
/// - `InvalidMode`: Triangular mode outside `[lower, upper]`
/// - `InvalidProbability`: Uniform input outside `[0, 1]`
/// - `WrongArity`: Wrong number of hyperparameters for the family
///
/// # Examples
/// ```
/// use sobol_core::types::SamplingError;
///
/// let err = SamplingError::InvalidBounds { family: "uniform", lower: 2.0, upper: 1.0 };
/// assert_eq!(format!("{}", err), "Invalid uniform bounds: lower 2 exceeds upper 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Lower bound exceeds upper bound, or a bound is not finite.
    #[error("Invalid {family} bounds: lower {lower} exceeds upper {upper}")]
    InvalidBounds {
        /// Distribution family name
        family: &'static str,
        /// Lower bound supplied
        lower: f64,
        /// Upper bound supplied
        upper: f64,
    },

    /// A parameter that must be strictly positive is not.
    #[error("Invalid {family} parameter '{name}': {value} must be positive")]
    NonPositive {
        /// Distribution family name
        family: &'static str,
        /// Parameter name
        name: &'static str,
        /// Value supplied
        value: f64,
    },

    /// Triangular mode lies outside its support.
    #[error("Invalid triangular mode {mode}: must lie in [{lower}, {upper}]")]
    InvalidMode {
        /// Lower bound
        lower: f64,
        /// Mode supplied
        mode: f64,
        /// Upper bound
        upper: f64,
    },

    /// Uniform input is not a probability.
    #[error("Invalid probability {0}: must be in [0, 1]")]
    InvalidProbability(f64),

    /// Wrong number of hyperparameters for the family.
    #[error("Wrong number of {family} parameters: expected {expected}, got {got}")]
    WrongArity {
        /// Distribution family name
        family: &'static str,
        /// Number of parameters the family takes
        expected: usize,
        /// Number of parameters supplied
        got: usize,
    },
}

/// Reference model lookup errors.
///
/// # Examples
/// ```
/// use sobol_core::types::ModelError;
///
/// let err = ModelError::UnknownModel("sobol_g".to_string());
/// assert_eq!(format!("{}", err), "Unknown model: sobol_g");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// No reference model has this name.
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_error_display() {
        let err = SamplingError::NonPositive {
            family: "exponential",
            name: "rate",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid exponential parameter 'rate': -1 must be positive"
        );

        let err = SamplingError::InvalidProbability(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = SamplingError::WrongArity {
            family: "uniform",
            expected: 2,
            got: 1,
        };
        assert!(err.to_string().contains("expected 2, got 1"));
    }

    #[test]
    fn test_sampling_error_clone_eq() {
        let err = SamplingError::InvalidMode {
            lower: 0.0,
            mode: 2.0,
            upper: 1.0,
        };
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_model_error_display() {
        let err = ModelError::UnknownModel("g_function".to_string());
        assert_eq!(err.to_string(), "Unknown model: g_function");
    }
}
