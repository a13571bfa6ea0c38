//! Error types for Super Sobol estimation.
//!
//! - `ConfigError`: invalid study configuration, reported at construction
//! - `RealizationError`: a draw could not be turned into parameter values
//! - `EstimationError`: anything that stops an estimator from producing indices

use crate::rng::SequenceError;
use sobol_core::types::SamplingError;
use thiserror::Error;

/// Configuration error for the Super Sobol estimator.
///
/// These errors occur during construction when invalid study parameters are
/// provided.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter dimension is zero.
    #[error("Invalid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// Monte Carlo sample count outside `[1, MAX_SAMPLES]`.
    #[error("Invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),

    /// A collection does not have the length the dimension requires.
    #[error("Expected {expected} {what}, got {got}")]
    DimensionMismatch {
        /// What was counted
        what: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// Index set element outside `[1, dim]`.
    #[error("Parameter index {index} out of range [1, {dim}]")]
    IndexOutOfRange {
        /// Offending 1-based index
        index: usize,
        /// Parameter dimension
        dim: usize,
    },

    /// Index set lists the same parameter twice.
    #[error("Parameter index {0} listed more than once in the index set")]
    DuplicateIndex(usize),

    /// A parameter's distribution has the wrong number of hyperparameters.
    #[error("Invalid distribution for parameter {index}: {source}")]
    InvalidDistribution {
        /// 1-based parameter index
        index: usize,
        /// Underlying sampling error
        #[source]
        source: SamplingError,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// The quasi-random sequence could not be created.
    #[error("Sequence configuration error: {0}")]
    Sequence(#[from] SequenceError),
}

/// Failure to build one uncertainty realization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RealizationError {
    /// The sequence did not provide a requested coordinate.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A parameter's distribution rejected the draw.
    #[error("Parameter {parameter}: {source}")]
    Sampling {
        /// 1-based parameter index
        parameter: usize,
        /// Underlying sampling error
        #[source]
        source: SamplingError,
    },
}

/// Errors that stop an estimator from producing indices.
///
/// # Examples
/// ```
/// use sobol_engine::sensitivity::EstimationError;
///
/// let err = EstimationError::NotComputed;
/// assert_eq!(err.to_string(), "Indices not computed: call run() first");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// Invalid configuration supplied at construction.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A hyperparameter was found invalid while drawing.
    #[error("Invalid parameter {parameter} at iteration {iteration}: {source}")]
    InvalidParameter {
        /// 1-based iteration that discovered the problem
        iteration: usize,
        /// 1-based parameter index
        parameter: usize,
        /// Underlying sampling error
        #[source]
        source: SamplingError,
    },

    /// The sequence failed to provide a coordinate during a run.
    #[error("Sequence error at iteration {iteration}: {source}")]
    Sequence {
        /// 1-based iteration
        iteration: usize,
        /// Underlying sequence error
        #[source]
        source: SequenceError,
    },

    /// Output variance is numerically zero; indices are undefined.
    #[error("Degenerate output variance {variance:e}: indices are undefined")]
    DegenerateVariance {
        /// Estimated variance
        variance: f64,
    },

    /// Indices requested before a successful run.
    #[error("Indices not computed: call run() first")]
    NotComputed,
}

impl EstimationError {
    /// Attaches the iteration number to a realization failure.
    pub(crate) fn at_iteration(iteration: usize, err: RealizationError) -> Self {
        match err {
            RealizationError::Sequence(source) => Self::Sequence { iteration, source },
            RealizationError::Sampling { parameter, source } => Self::InvalidParameter {
                iteration,
                parameter,
                source,
            },
        }
    }
}
