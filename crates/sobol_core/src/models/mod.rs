//! Reference models with known sensitivity structure.
//!
//! These models are used to validate the estimator against analytical
//! indices and as built-in targets for the command-line service:
//!
//! | Model | Parameters | Constants |
//! |-------|------------|-----------|
//! | [`AdditiveModel`] | any `x_1..x_d` | unused |
//! | [`ProductModel`] | any `x_1..x_d` | unused |
//! | [`IshigamiModel`] | `x_1, x_2, x_3` | `[a, b]` |
//! | [`BlackScholesCall`] | `[spot, volatility]` | `[strike, rate, maturity]` |
//!
//! [`ReferenceModel`] is an enum over all of them for name-based lookup.

mod normal;

pub use normal::norm_cdf;

use crate::traits::SensitivityModel;
use crate::types::ModelError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Sum of all parameters: `f(x) = x_1 + ... + x_d`.
///
/// With independent inputs of equal variance, each parameter explains `1/d`
/// of the output variance and there are no interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdditiveModel;

impl SensitivityModel for AdditiveModel {
    #[inline]
    fn evaluate(&self, parameters: &[f64], _constants: &[f64]) -> f64 {
        parameters.iter().sum()
    }
}

/// Product of all parameters: `f(x) = x_1 · ... · x_d`.
///
/// Purely interactive for zero-mean inputs: first-order indices vanish while
/// total indices are one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductModel;

impl SensitivityModel for ProductModel {
    #[inline]
    fn evaluate(&self, parameters: &[f64], _constants: &[f64]) -> f64 {
        parameters.iter().product()
    }
}

/// Ishigami function `sin x_1 + a sin² x_2 + b x_3⁴ sin x_1`.
///
/// Constants are `[a, b]`; when absent the customary `a = 7`, `b = 0.1` are
/// used. Inputs are conventionally uniform on `[-π, π]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IshigamiModel;

impl IshigamiModel {
    /// Default `a` coefficient.
    pub const DEFAULT_A: f64 = 7.0;
    /// Default `b` coefficient.
    pub const DEFAULT_B: f64 = 0.1;

    /// Analytical `(first_order, total)` indices of each input for inputs
    /// uniform on `[-π, π]`.
    ///
    /// # Examples
    /// ```
    /// use sobol_core::models::IshigamiModel;
    ///
    /// let indices = IshigamiModel::analytic_indices(7.0, 0.1);
    /// assert!((indices[0].0 - 0.3139).abs() < 1e-3);
    /// assert_eq!(indices[2].0, 0.0);
    /// ```
    pub fn analytic_indices(a: f64, b: f64) -> [(f64, f64); 3] {
        let pi4 = PI.powi(4);
        let pi8 = PI.powi(8);
        let v1 = 0.5 * (1.0 + b * pi4 / 5.0).powi(2);
        let v2 = a * a / 8.0;
        let v13 = 8.0 * b * b * pi8 / 225.0;
        let variance = v1 + v2 + v13;
        [
            (v1 / variance, (v1 + v13) / variance),
            (v2 / variance, v2 / variance),
            (0.0, v13 / variance),
        ]
    }
}

impl SensitivityModel for IshigamiModel {
    fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64 {
        let a = constants.first().copied().unwrap_or(Self::DEFAULT_A);
        let b = constants.get(1).copied().unwrap_or(Self::DEFAULT_B);
        let x1 = parameters.first().copied().unwrap_or(0.0);
        let x2 = parameters.get(1).copied().unwrap_or(0.0);
        let x3 = parameters.get(2).copied().unwrap_or(0.0);
        x1.sin() + a * x2.sin().powi(2) + b * x3.powi(4) * x1.sin()
    }
}

/// Black–Scholes European call price.
///
/// Parameters are `[spot, volatility]`, constants `[strike, rate, maturity]`
/// (maturity defaults to one year). A vanishing `volatility · √maturity`
/// returns the discounted intrinsic value so the model stays total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlackScholesCall;

impl BlackScholesCall {
    /// Prices a call with explicit arguments.
    ///
    /// # Examples
    /// ```
    /// use sobol_core::models::BlackScholesCall;
    ///
    /// let price = BlackScholesCall::price(100.0, 0.2, 100.0, 0.05, 1.0);
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    pub fn price(spot: f64, volatility: f64, strike: f64, rate: f64, maturity: f64) -> f64 {
        let discount = (-rate * maturity).exp();
        let vol_sqrt_t = volatility.abs() * maturity.max(0.0).sqrt();
        if spot <= 0.0 || strike <= 0.0 || vol_sqrt_t < 1e-12 {
            return (spot - strike * discount).max(0.0);
        }
        let d1 = ((spot / strike).ln() + rate * maturity) / vol_sqrt_t + 0.5 * vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }
}

impl SensitivityModel for BlackScholesCall {
    fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64 {
        let spot = parameters.first().copied().unwrap_or(0.0);
        let volatility = parameters.get(1).copied().unwrap_or(0.0);
        let strike = constants.first().copied().unwrap_or(spot);
        let rate = constants.get(1).copied().unwrap_or(0.0);
        let maturity = constants.get(2).copied().unwrap_or(1.0);
        Self::price(spot, volatility, strike, rate, maturity)
    }
}

/// Name-addressable reference model (static dispatch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReferenceModel {
    /// [`AdditiveModel`]
    Additive,
    /// [`ProductModel`]
    Product,
    /// [`IshigamiModel`]
    Ishigami,
    /// [`BlackScholesCall`]
    BlackScholesCall,
}

impl ReferenceModel {
    /// All reference models.
    pub const ALL: [ReferenceModel; 4] = [
        ReferenceModel::Additive,
        ReferenceModel::Product,
        ReferenceModel::Ishigami,
        ReferenceModel::BlackScholesCall,
    ];

    /// Returns the model's name.
    pub fn name(self) -> &'static str {
        match self {
            ReferenceModel::Additive => "additive",
            ReferenceModel::Product => "product",
            ReferenceModel::Ishigami => "ishigami",
            ReferenceModel::BlackScholesCall => "black_scholes_call",
        }
    }

    /// One-line description of parameters and constants.
    pub fn description(self) -> &'static str {
        match self {
            ReferenceModel::Additive => "sum of all parameters; constants unused",
            ReferenceModel::Product => "product of all parameters; constants unused",
            ReferenceModel::Ishigami => {
                "sin x1 + a sin^2 x2 + b x3^4 sin x1; constants [a, b]"
            }
            ReferenceModel::BlackScholesCall => {
                "call price of [spot, volatility]; constants [strike, rate, maturity]"
            }
        }
    }

    /// Required parameter dimension, if fixed.
    pub fn fixed_dimension(self) -> Option<usize> {
        match self {
            ReferenceModel::Additive | ReferenceModel::Product => None,
            ReferenceModel::Ishigami => Some(3),
            ReferenceModel::BlackScholesCall => Some(2),
        }
    }
}

impl SensitivityModel for ReferenceModel {
    #[inline]
    fn evaluate(&self, parameters: &[f64], constants: &[f64]) -> f64 {
        match self {
            ReferenceModel::Additive => AdditiveModel.evaluate(parameters, constants),
            ReferenceModel::Product => ProductModel.evaluate(parameters, constants),
            ReferenceModel::Ishigami => IshigamiModel.evaluate(parameters, constants),
            ReferenceModel::BlackScholesCall => BlackScholesCall.evaluate(parameters, constants),
        }
    }
}

impl fmt::Display for ReferenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        ReferenceModel::ALL
            .into_iter()
            .find(|m| m.name() == normalised)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_additive_and_product() {
        assert_eq!(AdditiveModel.evaluate(&[1.0, 2.0, 3.5], &[99.0]), 6.5);
        assert_eq!(ProductModel.evaluate(&[1.5, 2.0, -1.0], &[]), -3.0);
    }

    #[test]
    fn test_ishigami_known_point() {
        let x = [PI / 2.0, PI / 2.0, 1.0];
        // 1 + 7 + 0.1
        assert_relative_eq!(IshigamiModel.evaluate(&x, &[]), 8.1, epsilon = 1e-12);
        assert_relative_eq!(IshigamiModel.evaluate(&x, &[2.0, 0.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ishigami_analytic_indices() {
        let indices = IshigamiModel::analytic_indices(7.0, 0.1);
        assert_relative_eq!(indices[0].0, 0.3139, epsilon = 1e-3);
        assert_relative_eq!(indices[1].0, 0.4424, epsilon = 1e-3);
        assert_relative_eq!(indices[0].1, 0.5576, epsilon = 1e-3);
        assert_relative_eq!(indices[2].1, 0.2437, epsilon = 1e-3);
        let first_order_sum: f64 = indices.iter().map(|(s, _)| s).sum();
        assert!(first_order_sum < 1.0);
    }

    #[test]
    fn test_black_scholes_reference_price() {
        let price = BlackScholesCall.evaluate(&[100.0, 0.2], &[100.0, 0.05, 1.0]);
        assert_relative_eq!(price, 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_black_scholes_zero_volatility_is_intrinsic() {
        let price = BlackScholesCall::price(110.0, 0.0, 100.0, 0.0, 1.0);
        assert_eq!(price, 10.0);
        assert_eq!(BlackScholesCall::price(90.0, 0.0, 100.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_reference_model_from_str() {
        assert_eq!(
            "Black-Scholes-Call".parse::<ReferenceModel>().unwrap(),
            ReferenceModel::BlackScholesCall
        );
        assert_eq!("ishigami".parse::<ReferenceModel>().unwrap(), ReferenceModel::Ishigami);
        assert_eq!(
            "unknown".parse::<ReferenceModel>(),
            Err(ModelError::UnknownModel("unknown".to_string()))
        );
    }

    #[test]
    fn test_reference_model_dispatch() {
        for model in ReferenceModel::ALL {
            let dim = model.fixed_dimension().unwrap_or(2);
            let value = model.evaluate(&vec![0.5; dim], &[]);
            assert!(value.is_finite(), "{} produced {}", model, value);
            assert_eq!(model.to_string(), model.name());
        }
    }
}
