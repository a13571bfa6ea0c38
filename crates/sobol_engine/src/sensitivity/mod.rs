//! Super Sobol sensitivity estimation.
//!
//! This module estimates how much of a model's output variance is explained
//! by a chosen set of its uncertain parameters:
//!
//! - **Lower index**: closed first-order effect of the set
//! - **Total index**: everything the set takes part in, interactions included
//!
//! # Architecture
//!
//! ```text
//! SuperSobolEstimator
//! ├── SuperSobolConfig       (dim, n_mc, index set, distributions, constants)
//! ├── HaltonSequence         (2·dim coordinates per iteration)
//! ├── UncertaintyRealization (s1, s2)
//! ├── ArgumentPair           (arg1, arg2 by the pick-freeze rule)
//! └── MomentAccumulators     (→ SuperSobolIndices)
//! ```
//!
//! [`replicate`] and [`analyze_index_sets`] run several independent
//! estimators in parallel.
//!
//! # Examples
//!
//! ```rust
//! use sobol_core::models::IshigamiModel;
//! use sobol_engine::sensitivity::{SuperSobolConfig, SuperSobolEstimator};
//! use std::f64::consts::PI;
//!
//! let config = SuperSobolConfig::builder()
//!     .n_mc(20_000)
//!     .index_set([2])
//!     .uniform_bounds([(-PI, PI); 3])
//!     .constants(vec![7.0, 0.1])
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! let mut estimator = SuperSobolEstimator::new(&IshigamiModel, config).unwrap();
//! let indices = estimator.run().unwrap();
//!
//! let expected = IshigamiModel::analytic_indices(7.0, 0.1)[1];
//! assert!((indices.lower - expected.0).abs() < 0.02);
//! assert!((indices.total - expected.1).abs() < 0.02);
//! ```

mod accumulator;
mod config;
mod error;
mod estimator;
mod index_set;
mod pick_freeze;
mod realization;
mod replication;

pub use accumulator::{MomentAccumulators, SuperSobolIndices, DEGENERATE_VARIANCE_TOLERANCE};
pub use config::{SamplingOptions, SuperSobolConfig, SuperSobolConfigBuilder, MAX_SAMPLES};
pub use error::{ConfigError, EstimationError, RealizationError};
pub use estimator::{IterationView, SuperSobolEstimator};
pub use index_set::IndexSet;
pub use pick_freeze::{assemble, ArgumentPair};
pub use realization::UncertaintyRealization;
pub use replication::{analyze_index_sets, replicate, ReplicatedIndices};
