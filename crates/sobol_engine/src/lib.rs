//! # Sobol Engine (L3: Estimation Engine)
//!
//! Quasi-Monte Carlo estimation of Super Sobol sensitivity indices.
//!
//! This crate provides:
//! - Low-discrepancy sequences with randomised start and digit permutation (`rng`)
//! - Pick-freeze realization building and argument assembly (`sensitivity`)
//! - The Super Sobol estimator and its moment accumulators (`sensitivity`)
//! - Replicated and multi-index-set estimation over independent estimators
//!
//! ## Architecture
//!
//! ```text
//! SuperSobolEstimator
//! ├── SuperSobolConfig        (immutable study parameters)
//! ├── HaltonSequence          (owned; 2·dim coordinates per point)
//! ├── UncertaintyRealization  (s1, s2 via inverse transform)
//! ├── ArgumentPair            (pick-freeze swap rule)
//! └── MomentAccumulators      (running sums → lower / total indices)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sobol_core::math::UncertaintyDistribution;
//! use sobol_engine::sensitivity::{SuperSobolConfig, SuperSobolEstimator};
//!
//! let config = SuperSobolConfig::builder()
//!     .dim(2)
//!     .n_mc(20_000)
//!     .index_set([1])
//!     .uncertainties(vec![UncertaintyDistribution::uniform(0.0, 1.0); 2])
//!     .build()
//!     .unwrap();
//!
//! let model = |p: &[f64], _c: &[f64]| p[0] + p[1];
//! let mut estimator = SuperSobolEstimator::new(&model, config).unwrap();
//! estimator.run().unwrap();
//!
//! let lower = estimator.lower_super_index().unwrap();
//! assert!((lower - 0.5).abs() < 0.05);
//! ```

#![warn(missing_docs)]

pub mod rng;
pub mod sensitivity;
