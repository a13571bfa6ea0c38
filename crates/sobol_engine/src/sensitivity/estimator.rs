//! Super Sobol estimator.
//!
//! One iteration of [`SuperSobolEstimator::run`]:
//!
//! 1. advance the sequence (`2 · dim` coordinates)
//! 2. draw `(s1, s2)` through each parameter's distribution
//! 3. assemble `(arg1, arg2)` by the pick-freeze rule
//! 4. evaluate the model at `s1`, `arg1` and `arg2` with the full constants
//! 5. update the moment accumulators
//!
//! After `n_mc` iterations the accumulators are finalised into the lower and
//! total indices.

use super::accumulator::{MomentAccumulators, SuperSobolIndices};
use super::config::SuperSobolConfig;
use super::error::{ConfigError, EstimationError};
use super::pick_freeze::ArgumentPair;
use super::realization::UncertaintyRealization;
use crate::rng::{HaltonSequence, LowDiscrepancySequence};
use sobol_core::traits::SensitivityModel;
use tracing::{debug, info, warn};

/// Snapshot of one completed iteration, passed to observers.
#[derive(Clone, Copy, Debug)]
pub struct IterationView<'v> {
    /// 1-based iteration number since construction.
    pub iteration: usize,
    /// First draw.
    pub s1: &'v [f64],
    /// Second draw.
    pub s2: &'v [f64],
    /// Argument sharing the index set with `s1`.
    pub arg1: &'v [f64],
    /// Argument sharing the complement with `s1`.
    pub arg2: &'v [f64],
    /// Model output at `s1`.
    pub f0: f64,
    /// Model output at `arg1`.
    pub f1: f64,
    /// Model output at `arg2`.
    pub f2: f64,
    /// Accumulators after this iteration.
    pub accumulators: &'v MomentAccumulators,
}

/// Monte Carlo estimator of the Super Sobol indices of one index set.
///
/// The estimator borrows the model, owns its sequence and accumulators, and
/// never shares state with other estimators.
///
/// # Examples
///
/// ```rust
/// use sobol_core::models::ProductModel;
/// use sobol_engine::sensitivity::{EstimationError, SuperSobolConfig, SuperSobolEstimator};
///
/// let config = SuperSobolConfig::builder()
///     .n_mc(5_000)
///     .index_set([1, 2])
///     .uniform_bounds([(-1.0, 1.0), (-1.0, 1.0)])
///     .build()
///     .unwrap();
///
/// let mut estimator = SuperSobolEstimator::new(&ProductModel, config).unwrap();
/// assert_eq!(estimator.lower_super_index(), Err(EstimationError::NotComputed));
///
/// let indices = estimator.run().unwrap();
/// assert!((indices.lower - 1.0).abs() < 1e-9);
/// assert_eq!(indices.total, estimator.total_super_index().unwrap());
/// ```
pub struct SuperSobolEstimator<'a, M, S = HaltonSequence>
where
    M: SensitivityModel + ?Sized,
    S: LowDiscrepancySequence,
{
    model: &'a M,
    config: SuperSobolConfig,
    sequence: S,
    /// Index set membership per 0-based position.
    selected: Vec<bool>,
    realization: UncertaintyRealization,
    arguments: ArgumentPair,
    accumulators: MomentAccumulators,
    indices: Option<SuperSobolIndices>,
}

impl<'a, M> SuperSobolEstimator<'a, M, HaltonSequence>
where
    M: SensitivityModel + ?Sized,
{
    /// Creates an estimator driven by a `2 · dim`-dimensional Halton sequence
    /// randomised by the configuration's sampling options.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::Config` if the configuration is invalid.
    pub fn new(model: &'a M, config: SuperSobolConfig) -> Result<Self, EstimationError> {
        config.validate()?;
        let sequence =
            HaltonSequence::new(2 * config.dim(), config.sampling()).map_err(ConfigError::from)?;
        Self::with_sequence(model, config, sequence)
    }
}

impl<'a, M, S> SuperSobolEstimator<'a, M, S>
where
    M: SensitivityModel + ?Sized,
    S: LowDiscrepancySequence,
{
    /// Creates an estimator driven by a caller-supplied sequence.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::Config` if the configuration is invalid or
    /// the sequence has fewer than `2 · dim` coordinates.
    pub fn with_sequence(
        model: &'a M,
        config: SuperSobolConfig,
        sequence: S,
    ) -> Result<Self, EstimationError> {
        config.validate()?;
        let dim = config.dim();
        if sequence.dimension() < 2 * dim {
            return Err(ConfigError::DimensionMismatch {
                what: "sequence coordinates",
                expected: 2 * dim,
                got: sequence.dimension(),
            }
            .into());
        }

        debug!(
            dim,
            n_mc = config.n_mc(),
            index_set = %config.index_set(),
            seed = config.seed(),
            random_start = config.sampling().random_start,
            random_permute = config.sampling().random_permute,
            "Super Sobol estimator created"
        );

        Ok(Self {
            model,
            selected: config.index_set().mask(dim),
            realization: UncertaintyRealization::new(dim),
            arguments: ArgumentPair::new(dim),
            accumulators: MomentAccumulators::new(),
            indices: None,
            config,
            sequence,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SuperSobolConfig {
        &self.config
    }

    /// Returns the sequence driving the estimator.
    #[inline]
    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    /// Returns the accumulators.
    #[inline]
    pub fn accumulators(&self) -> &MomentAccumulators {
        &self.accumulators
    }

    /// Returns the indices of the last successful run.
    #[inline]
    pub fn indices(&self) -> Option<&SuperSobolIndices> {
        self.indices.as_ref()
    }

    /// Lower (first-order) Super Sobol index.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::NotComputed` before a successful run.
    pub fn lower_super_index(&self) -> Result<f64, EstimationError> {
        self.indices
            .map(|i| i.lower)
            .ok_or(EstimationError::NotComputed)
    }

    /// Total-effect Super Sobol index.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::NotComputed` before a successful run.
    pub fn total_super_index(&self) -> Result<f64, EstimationError> {
        self.indices
            .map(|i| i.total)
            .ok_or(EstimationError::NotComputed)
    }

    /// Runs `n_mc` iterations and finalises the indices.
    ///
    /// Accumulators are only reset at construction, so a second call
    /// continues the sequence and refines the same estimate.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` from the first iteration whose draw violates a
    ///   distribution constraint
    /// - `DegenerateVariance` if the model output has no variance
    pub fn run(&mut self) -> Result<SuperSobolIndices, EstimationError> {
        self.run_observed(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every iteration.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_observed<F>(&mut self, mut observer: F) -> Result<SuperSobolIndices, EstimationError>
    where
        F: FnMut(&IterationView<'_>),
    {
        self.indices = None;
        let constants = self.config.constants();

        for _ in 0..self.config.n_mc() {
            let iteration = self.accumulators.count() + 1;

            self.sequence.next_point();
            self.realization
                .draw(&self.sequence, self.config.uncertainties())
                .map_err(|err| EstimationError::at_iteration(iteration, err))?;

            let s1 = self.realization.s1();
            let s2 = self.realization.s2();
            self.arguments.assemble(&self.selected, s1, s2);

            let f0 = self.model.evaluate(s1, constants);
            let f1 = self.model.evaluate(self.arguments.arg1(), constants);
            let f2 = self.model.evaluate(self.arguments.arg2(), constants);
            self.accumulators.update(f0, f1, f2);

            observer(&IterationView {
                iteration,
                s1,
                s2,
                arg1: self.arguments.arg1(),
                arg2: self.arguments.arg2(),
                f0,
                f1,
                f2,
                accumulators: &self.accumulators,
            });
        }

        let indices = self.accumulators.finalize().inspect_err(|err| {
            if let EstimationError::DegenerateVariance { variance } = err {
                warn!(variance, index_set = %self.config.index_set(), "Degenerate output variance");
            }
        })?;

        info!(
            index_set = %self.config.index_set(),
            samples = indices.samples,
            mean = indices.mean,
            variance = indices.variance,
            lower = indices.lower,
            total = indices.total,
            "Super Sobol indices computed"
        );
        if !(0.0..=1.0).contains(&indices.lower) || !(0.0..=1.0).contains(&indices.total) {
            warn!(
                lower = indices.lower,
                total = indices.total,
                "Index outside [0, 1]; increase n_mc"
            );
        }

        self.indices = Some(indices);
        Ok(indices)
    }
}
