//! Mathematical building blocks for uncertainty sampling.
//!
//! This module provides:
//! - `inverse_transform`: Stateless mapping of uniform(0,1) draws into a target family
//! - `distribution`: Distribution families and per-parameter uncertainty distributions
//!
//! Both are pure: they own no state beyond their inputs and are safe to share
//! across iterations and threads.

pub mod distribution;
pub mod inverse_transform;

pub use distribution::{DistributionFamily, UncertaintyDistribution};
pub use inverse_transform::InverseTransform;
