//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for inverse-transform sampling and model lookup
//!
//! # Re-exports
//!
//! - [`SamplingError`], [`ModelError`] from `error`

pub mod error;

pub use error::{ModelError, SamplingError};
