//! # sobol_core: Foundation Layer for Super Sobol Sensitivity Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! sobol_core is the bottom layer of the workspace, providing:
//! - Inverse-transform sampling from uniform draws (`math::inverse_transform`)
//! - Per-parameter uncertainty distributions (`math::distribution`)
//! - The model capability evaluated by the estimator (`traits::model`)
//! - Reference models with known sensitivity structure (`models`)
//! - Error types: `SamplingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sobol_core::math::{InverseTransform, UncertaintyDistribution};
//! use sobol_core::traits::SensitivityModel;
//!
//! // Map a uniform draw into U(2, 4)
//! let x = InverseTransform::uniform(0.25, 2.0, 4.0).unwrap();
//! assert_eq!(x, 2.5);
//!
//! // Distributions couple a family with its hyperparameters
//! let dist = UncertaintyDistribution::uniform(0.0, 1.0);
//! assert_eq!(dist.sample(0.5).unwrap(), 0.5);
//!
//! // Any closure `(parameters, constants) -> f64` is a model
//! let model = |p: &[f64], c: &[f64]| p[0] * c[0];
//! assert_eq!(model.evaluate(&[2.0], &[3.0]), 6.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for distributions and families

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod models;
pub mod traits;
pub mod types;
