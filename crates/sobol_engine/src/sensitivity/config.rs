//! Super Sobol study configuration.
//!
//! This module provides the immutable configuration of one estimation and a
//! builder that validates it.

use super::error::ConfigError;
use super::index_set::IndexSet;
use crate::rng::HaltonOptions;
use sobol_core::math::UncertaintyDistribution;

/// Maximum number of Monte Carlo iterations allowed.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Randomisation of the quasi-random sequence behind an estimation.
pub type SamplingOptions = HaltonOptions;

/// Super Sobol study configuration.
///
/// Immutable configuration specifying the parameter space, the index set
/// under study and the Monte Carlo budget.
/// Use [`SuperSobolConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sobol_core::math::UncertaintyDistribution;
/// use sobol_engine::sensitivity::SuperSobolConfig;
///
/// let config = SuperSobolConfig::builder()
///     .n_mc(10_000)
///     .index_set([1, 3])
///     .uncertainties(vec![UncertaintyDistribution::uniform(0.0, 1.0); 3])
///     .constants(vec![2.5])
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.dim(), 3);
/// assert_eq!(config.n_mc(), 10_000);
/// assert!(config.index_set().contains(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SuperSobolConfig {
    /// Number of model parameters.
    dim: usize,
    /// Number of Monte Carlo iterations.
    n_mc: usize,
    /// Parameters whose joint effect is measured.
    index_set: IndexSet,
    /// One distribution per parameter.
    uncertainties: Vec<UncertaintyDistribution>,
    /// Fixed constants passed to every model evaluation.
    constants: Vec<f64>,
    /// Sequence randomisation.
    sampling: SamplingOptions,
}

impl SuperSobolConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SuperSobolConfigBuilder {
        SuperSobolConfigBuilder::default()
    }

    /// Returns the number of model parameters.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of Monte Carlo iterations.
    #[inline]
    pub fn n_mc(&self) -> usize {
        self.n_mc
    }

    /// Returns the index set under study.
    #[inline]
    pub fn index_set(&self) -> &IndexSet {
        &self.index_set
    }

    /// Returns the per-parameter distributions.
    #[inline]
    pub fn uncertainties(&self) -> &[UncertaintyDistribution] {
        &self.uncertainties
    }

    /// Returns the model constants.
    #[inline]
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// Returns the sequence randomisation options.
    #[inline]
    pub fn sampling(&self) -> SamplingOptions {
        self.sampling
    }

    /// Returns the randomisation seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.sampling.seed
    }

    /// Copy of this configuration with another seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            sampling: self.sampling.with_seed(seed),
            ..self.clone()
        }
    }

    /// Copy of this configuration studying another index set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IndexOutOfRange` if `index_set` does not fit `dim`.
    pub fn with_index_set(&self, index_set: IndexSet) -> Result<Self, ConfigError> {
        index_set.validate(self.dim)?;
        Ok(Self {
            index_set,
            ..self.clone()
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `dim` is 0
    /// - `n_mc` is 0 or greater than 100,000,000
    /// - the number of distributions differs from `dim`
    /// - an index set element lies outside `[1, dim]`
    /// - a distribution has the wrong number of hyperparameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dim == 0 {
            return Err(ConfigError::InvalidDimension(self.dim));
        }
        if self.n_mc == 0 || self.n_mc > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(self.n_mc));
        }
        if self.uncertainties.len() != self.dim {
            return Err(ConfigError::DimensionMismatch {
                what: "uncertainty distributions",
                expected: self.dim,
                got: self.uncertainties.len(),
            });
        }
        self.index_set.validate(self.dim)?;
        for (j, dist) in self.uncertainties.iter().enumerate() {
            dist.validate_arity()
                .map_err(|source| ConfigError::InvalidDistribution {
                    index: j + 1,
                    source,
                })?;
        }
        Ok(())
    }
}

/// Builder for [`SuperSobolConfig`].
///
/// When `dim` is not given it is taken from the number of distributions.
///
/// # Examples
///
/// ```rust
/// use sobol_engine::sensitivity::SuperSobolConfig;
///
/// let config = SuperSobolConfig::builder()
///     .dim(2)
///     .n_mc(1_000)
///     .uniform_bounds([(0.0, 1.0), (-1.0, 1.0)])
///     .index_set([2])
///     .random_start(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.sampling().random_start);
/// assert!(config.sampling().random_permute);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SuperSobolConfigBuilder {
    dim: Option<usize>,
    n_mc: Option<usize>,
    index_set: Vec<usize>,
    uncertainties: Option<Vec<UncertaintyDistribution>>,
    constants: Vec<f64>,
    sampling: SamplingOptions,
}

impl SuperSobolConfigBuilder {
    /// Sets the number of model parameters.
    #[inline]
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = Some(dim);
        self
    }

    /// Sets the number of Monte Carlo iterations.
    ///
    /// # Arguments
    ///
    /// * `n_mc` - Iterations in [1, 100_000_000]
    #[inline]
    pub fn n_mc(mut self, n_mc: usize) -> Self {
        self.n_mc = Some(n_mc);
        self
    }

    /// Sets the 1-based indices of the parameters under study.
    pub fn index_set<I>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.index_set = indices.into_iter().collect();
        self
    }

    /// Sets one distribution per parameter.
    #[inline]
    pub fn uncertainties(mut self, uncertainties: Vec<UncertaintyDistribution>) -> Self {
        self.uncertainties = Some(uncertainties);
        self
    }

    /// Sets uniform distributions from `(a, b)` bounds, one per parameter.
    pub fn uniform_bounds<I>(self, bounds: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.uncertainties(
            bounds
                .into_iter()
                .map(|(a, b)| UncertaintyDistribution::uniform(a, b))
                .collect(),
        )
    }

    /// Sets the model constants.
    #[inline]
    pub fn constants(mut self, constants: Vec<f64>) -> Self {
        self.constants = constants;
        self
    }

    /// Sets all sequence randomisation options at once.
    #[inline]
    pub fn sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    /// Enables or disables the random start offset.
    #[inline]
    pub fn random_start(mut self, enabled: bool) -> Self {
        self.sampling.random_start = enabled;
        self
    }

    /// Enables or disables random digit permutation.
    #[inline]
    pub fn random_permute(mut self, enabled: bool) -> Self {
        self.sampling.random_permute = enabled;
        self
    }

    /// Sets the randomisation seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.sampling.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_mc` or the distributions are not set
    /// - the index set repeats an index
    /// - any check of [`SuperSobolConfig::validate`] fails
    pub fn build(self) -> Result<SuperSobolConfig, ConfigError> {
        let n_mc = self.n_mc.ok_or(ConfigError::InvalidParameter {
            name: "n_mc",
            value: "must be specified".to_string(),
        })?;

        let uncertainties = self.uncertainties.ok_or(ConfigError::InvalidParameter {
            name: "uncertainties",
            value: "must be specified".to_string(),
        })?;

        let index_set = IndexSet::try_from_indices(self.index_set)?;

        let config = SuperSobolConfig {
            dim: self.dim.unwrap_or(uncertainties.len()),
            n_mc,
            index_set,
            uncertainties,
            constants: self.constants,
            sampling: self.sampling,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(dim: usize) -> Vec<UncertaintyDistribution> {
        vec![UncertaintyDistribution::uniform(0.0, 1.0); dim]
    }

    #[test]
    fn test_config_builder_valid() {
        let config = SuperSobolConfig::builder()
            .dim(2)
            .n_mc(10_000)
            .index_set([1])
            .uncertainties(unit(2))
            .build()
            .unwrap();

        assert_eq!(config.dim(), 2);
        assert_eq!(config.n_mc(), 10_000);
        assert_eq!(config.index_set().len(), 1);
        assert!(config.constants().is_empty());
        assert_eq!(config.sampling(), HaltonOptions::default());
        assert_eq!(config.seed(), 0);
    }

    #[test]
    fn test_config_dim_inferred() {
        let config = SuperSobolConfig::builder()
            .n_mc(10)
            .uniform_bounds([(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)])
            .build()
            .unwrap();
        assert_eq!(config.dim(), 3);
        assert!(config.index_set().is_empty());
    }

    #[test]
    fn test_config_invalid_zero_samples() {
        let result = SuperSobolConfig::builder()
            .n_mc(0)
            .uncertainties(unit(2))
            .build();
        assert_eq!(result, Err(ConfigError::InvalidSampleCount(0)));
    }

    #[test]
    fn test_config_invalid_too_many_samples() {
        let result = SuperSobolConfig::builder()
            .n_mc(MAX_SAMPLES + 1)
            .uncertainties(unit(2))
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_dimension() {
        let result = SuperSobolConfig::builder()
            .n_mc(10)
            .uncertainties(Vec::new())
            .build();
        assert_eq!(result, Err(ConfigError::InvalidDimension(0)));
    }

    #[test]
    fn test_config_dimension_mismatch() {
        let result = SuperSobolConfig::builder()
            .dim(3)
            .n_mc(10)
            .uncertainties(unit(2))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::DimensionMismatch {
                expected: 3,
                got: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_config_index_out_of_range() {
        let result = SuperSobolConfig::builder()
            .n_mc(10)
            .index_set([1, 3])
            .uncertainties(unit(2))
            .build();
        assert_eq!(
            result,
            Err(ConfigError::IndexOutOfRange { index: 3, dim: 2 })
        );
    }

    #[test]
    fn test_config_duplicate_index() {
        let result = SuperSobolConfig::builder()
            .n_mc(10)
            .index_set([2, 2])
            .uncertainties(unit(2))
            .build();
        assert_eq!(result, Err(ConfigError::DuplicateIndex(2)));
    }

    #[test]
    fn test_config_missing_samples() {
        let result = SuperSobolConfig::builder().uncertainties(unit(2)).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "n_mc", .. })
        ));
    }

    #[test]
    fn test_config_missing_uncertainties() {
        let result = SuperSobolConfig::builder().n_mc(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "uncertainties",
                ..
            })
        ));
    }

    #[test]
    fn test_config_reversed_bounds_accepted_until_sampling() {
        // Value constraints surface during the run, not at construction
        let config = SuperSobolConfig::builder()
            .n_mc(10)
            .uniform_bounds([(2.0, 1.0)])
            .build();
        assert!(config.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_wrong_arity_rejected() {
        use sobol_core::math::DistributionFamily;
        use sobol_core::types::SamplingError;

        let bad: UncertaintyDistribution =
            serde_json::from_str(r#"{"family": "triangular", "params": [0.0, 1.0]}"#).unwrap();
        let result = SuperSobolConfig::builder()
            .n_mc(10)
            .uncertainties(vec![UncertaintyDistribution::uniform(0.0, 1.0), bad])
            .build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidDistribution {
                index: 2,
                source: SamplingError::WrongArity {
                    family: DistributionFamily::Triangular.name(),
                    expected: 3,
                    got: 2,
                },
            })
        );
    }

    #[test]
    fn test_with_seed_and_index_set() {
        let config = SuperSobolConfig::builder()
            .n_mc(10)
            .uncertainties(unit(3))
            .seed(7)
            .build()
            .unwrap();

        let reseeded = config.with_seed(8);
        assert_eq!(reseeded.seed(), 8);
        assert_eq!(reseeded.n_mc(), config.n_mc());

        let other = config.with_index_set([2, 3].into_iter().collect()).unwrap();
        assert!(other.index_set().contains(2));
        assert!(config
            .with_index_set([4].into_iter().collect())
            .is_err());
    }
}
