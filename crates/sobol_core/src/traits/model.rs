//! Model capability evaluated by the sensitivity estimator.

/// A scalar model of random parameters and fixed constants.
///
/// Implementations must be deterministic and side-effect free, and total over
/// every parameter vector the estimator can construct from the declared
/// uncertainty distributions. The estimator never inspects a model beyond
/// calling [`evaluate`](Self::evaluate).
///
/// Any closure `Fn(&[f64], &[f64]) -> f64` is a model.
///
/// # Examples
///
/// ```rust
/// use sobol_core::traits::SensitivityModel;
///
/// struct Discounted;
///
/// impl SensitivityModel for Discounted {
///     fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64 {
///         parameters[0] * (-constants[0]).exp()
///     }
/// }
///
/// assert_eq!(Discounted.evaluate(&[2.0], &[0.0]), 2.0);
///
/// let sum = |p: &[f64], _c: &[f64]| p.iter().sum::<f64>();
/// assert_eq!(sum.evaluate(&[1.0, 2.0], &[]), 3.0);
/// ```
pub trait SensitivityModel {
    /// Evaluates the model at `parameters` with the fixed `constants`.
    fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64;
}

impl<F> SensitivityModel for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    #[inline]
    fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64 {
        self(parameters, constants)
    }
}
