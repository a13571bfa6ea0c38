//! Independent estimators run in parallel.
//!
//! A single estimation is strictly sequential; parallelism comes from
//! running several estimators, each with its own sequence and accumulators:
//!
//! - [`replicate`]: the same study under `R` randomisation seeds, giving a
//!   spread of the indices
//! - [`analyze_index_sets`]: one study per index set

use super::accumulator::SuperSobolIndices;
use super::config::SuperSobolConfig;
use super::error::{ConfigError, EstimationError};
use super::estimator::SuperSobolEstimator;
use super::index_set::IndexSet;
use rayon::prelude::*;
use sobol_core::traits::SensitivityModel;
use tracing::{debug, info};

/// Indices of `R` randomised replications with their spread.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicatedIndices {
    /// Per-replication indices, in seed order.
    pub replications: Vec<SuperSobolIndices>,
    /// Mean lower index.
    pub lower_mean: f64,
    /// Standard error of the mean lower index.
    pub lower_std_error: f64,
    /// Mean total index.
    pub total_mean: f64,
    /// Standard error of the mean total index.
    pub total_std_error: f64,
}

impl ReplicatedIndices {
    /// Summarises per-replication indices.
    ///
    /// Standard errors are zero for a single replication.
    pub fn from_replications(replications: Vec<SuperSobolIndices>) -> Self {
        let (lower_mean, lower_std_error) = mean_and_std_error(replications.iter().map(|i| i.lower));
        let (total_mean, total_std_error) = mean_and_std_error(replications.iter().map(|i| i.total));
        Self {
            replications,
            lower_mean,
            lower_std_error,
            total_mean,
            total_std_error,
        }
    }

    /// Number of replications.
    #[inline]
    pub fn len(&self) -> usize {
        self.replications.len()
    }

    /// Whether there are no replications.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.replications.is_empty()
    }
}

fn mean_and_std_error(values: impl ExactSizeIterator<Item = f64> + Clone) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (f64::NAN, f64::NAN);
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }
    let sum_sq: f64 = values.map(|v| (v - mean) * (v - mean)).sum();
    let sample_var = sum_sq / (n - 1) as f64;
    (mean, (sample_var / n as f64).sqrt())
}

/// Runs `replications` independent estimations of the same study.
///
/// Replication `r` uses seed `config.seed() + r` (wrapping).
///
/// # Errors
///
/// - `Config` if `replications` is 0
/// - The first error any replication reports
///
/// # Examples
///
/// ```rust
/// use sobol_core::models::AdditiveModel;
/// use sobol_engine::sensitivity::{replicate, SuperSobolConfig};
///
/// let config = SuperSobolConfig::builder()
///     .n_mc(4_000)
///     .index_set([1])
///     .uniform_bounds([(0.0, 1.0), (0.0, 1.0)])
///     .build()
///     .unwrap();
///
/// let result = replicate(&AdditiveModel, &config, 4).unwrap();
/// assert_eq!(result.len(), 4);
/// assert!((result.lower_mean - 0.5).abs() < 0.1);
/// ```
pub fn replicate<M>(
    model: &M,
    config: &SuperSobolConfig,
    replications: usize,
) -> Result<ReplicatedIndices, EstimationError>
where
    M: SensitivityModel + Sync + ?Sized,
{
    if replications == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "replications",
            value: "must be at least 1".to_string(),
        }
        .into());
    }

    let results = (0..replications as u64)
        .into_par_iter()
        .map(|r| -> Result<SuperSobolIndices, EstimationError> {
            let seed = config.seed().wrapping_add(r);
            let mut estimator = SuperSobolEstimator::new(model, config.with_seed(seed))?;
            let indices = estimator.run()?;
            debug!(replication = r, seed, lower = indices.lower, total = indices.total, "Replication finished");
            Ok(indices)
        })
        .collect::<Result<Vec<_>, EstimationError>>()?;

    let summary = ReplicatedIndices::from_replications(results);
    info!(
        replications,
        index_set = %config.index_set(),
        lower_mean = summary.lower_mean,
        lower_std_error = summary.lower_std_error,
        total_mean = summary.total_mean,
        total_std_error = summary.total_std_error,
        "Replicated Super Sobol indices"
    );
    Ok(summary)
}

/// Estimates the indices of several index sets, one estimator each.
///
/// Every estimator shares `config` apart from its index set, including the
/// seed. Results are in the order of `index_sets`.
///
/// # Errors
///
/// - `Config` if an index set does not fit `config.dim()`
/// - The first error any estimation reports
pub fn analyze_index_sets<M>(
    model: &M,
    config: &SuperSobolConfig,
    index_sets: &[IndexSet],
) -> Result<Vec<SuperSobolIndices>, EstimationError>
where
    M: SensitivityModel + Sync + ?Sized,
{
    let configs = index_sets
        .iter()
        .map(|set| config.with_index_set(set.clone()))
        .collect::<Result<Vec<_>, ConfigError>>()?;

    configs
        .into_par_iter()
        .map(|cfg| -> Result<SuperSobolIndices, EstimationError> {
            SuperSobolEstimator::new(model, cfg)?.run()
        })
        .collect()
}
