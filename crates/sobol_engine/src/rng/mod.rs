//! # Random Number Generation Infrastructure
//!
//! This module provides the draw sources for quasi-Monte Carlo sensitivity
//! estimation: low-discrepancy sequences and the seeded generator that
//! randomises them.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: all randomisation flows from an explicit seed held by
//!   the sequence instance; there is no global random state
//! - **Efficiency**: points are written into an internal buffer and borrowed as
//!   `&[f64]`; no allocation per point
//! - **Static dispatch**: estimators are generic over [`LowDiscrepancySequence`]
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded PRNG wrapper used for start offsets and digit permutations
//! - [`qmc`]: Low-discrepancy sequence trait
//! - [`halton`]: Randomised Halton sequence (random start, random permutation)
//!
//! ## Usage Example
//!
//! ```rust
//! use sobol_engine::rng::{HaltonOptions, HaltonSequence, LowDiscrepancySequence};
//!
//! let mut halton = HaltonSequence::new(4, HaltonOptions::deterministic()).unwrap();
//! let point = halton.next_point().to_vec();
//! assert_eq!(point, vec![0.5, 1.0 / 3.0, 0.2, 1.0 / 7.0]);
//!
//! // 1-based access to the most recent point
//! assert_eq!(halton.coordinate(1).unwrap(), 0.5);
//! ```

mod error;
mod halton;
mod prng;
mod qmc;

// Public re-exports
pub use error::SequenceError;
pub use halton::{first_primes, HaltonOptions, HaltonSequence, MAX_RANDOM_START};
pub use prng::SequenceRng;
pub use qmc::LowDiscrepancySequence;
