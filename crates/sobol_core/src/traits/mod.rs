//! Core traits for models under sensitivity analysis.
//!
//! This module defines:
//! - Generic floating-point operations (`Float` trait)
//! - Model evaluation (`SensitivityModel` trait)

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use sobol_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod model;

pub use model::SensitivityModel;
