//! Coefficient inference for OLS fits.
//!
//! ## Purpose
//!
//! This module turns estimated coefficients and the unscaled covariance
//! `pinv(X'X)` into the coefficient table of a regression summary: standard
//! errors, t statistics, two-sided p-values and confidence intervals.
//!
//! ## Design notes
//!
//! * **Covariance**: Nonrobust, `cov = scale * pinv(X'X)` with `scale = SSR / df_resid`.
//! * **Distribution**: Student's t with `df_resid` degrees of freedom.
//! * **Degenerate fits**: Without residual degrees of freedom every inferential
//!   value is NaN; the coefficients themselves are still reported.
//!
//! ## Invariants
//!
//! * Standard errors are non-negative (or NaN).
//! * `conf_lower <= coef <= conf_upper` whenever the bounds are finite.
//!
//! ## Non-goals
//!
//! * This module does not provide heteroskedasticity-robust covariances.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distributions::{students_t_quantile, students_t_two_sided_p};

// ============================================================================
// Coefficient Row
// ============================================================================

/// One row of the coefficient table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficient<T> {
    /// Regressor name.
    pub name: String,

    /// Point estimate.
    pub coef: T,

    /// Standard error of the estimate.
    pub std_err: T,

    /// `coef / std_err`.
    pub t_value: T,

    /// Two-sided p-value of `H0: coef = 0`.
    pub p_value: T,

    /// Lower confidence bound.
    pub conf_lower: T,

    /// Upper confidence bound.
    pub conf_upper: T,
}

// ============================================================================
// Coefficient Table
// ============================================================================

/// Coefficient table at a given confidence level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientTable<T> {
    /// Rows in design-column order.
    pub rows: Vec<Coefficient<T>>,

    /// Confidence level of the interval bounds (e.g., 0.95).
    pub level: T,
}

impl<T: Float> CoefficientTable<T> {
    /// Build the table from fit output.
    ///
    /// `normalized_cov` is the row-major `p × p` matrix `pinv(X'X)` and `scale`
    /// the residual variance estimate.
    pub fn compute(
        names: &[String],
        params: &[T],
        normalized_cov: &[T],
        scale: T,
        df_resid: usize,
        level: T,
    ) -> Self {
        let std_errs = Self::standard_errors(normalized_cov, scale, params.len());
        let bounds = Self::confidence_bounds(params, &std_errs, df_resid, level);
        let df = df_resid as f64;

        let rows = names
            .iter()
            .zip(params.iter())
            .zip(std_errs.iter().zip(bounds))
            .map(|((name, &coef), (&std_err, (lo, hi)))| {
                let t_value = coef / std_err;
                let p_value = t_value
                    .to_f64()
                    .map(|t| students_t_two_sided_p(t, df))
                    .and_then(T::from)
                    .unwrap_or_else(T::nan);
                Coefficient {
                    name: name.clone(),
                    coef,
                    std_err,
                    t_value,
                    p_value,
                    conf_lower: lo,
                    conf_upper: hi,
                }
            })
            .collect();

        Self { rows, level }
    }

    /// `sqrt(diag(scale * pinv(X'X)))`.
    pub fn standard_errors(normalized_cov: &[T], scale: T, p: usize) -> Vec<T> {
        (0..p)
            .map(|j| (scale * normalized_cov[j * p + j]).max(T::zero()).sqrt())
            .map(|se| if scale.is_nan() { T::nan() } else { se })
            .collect()
    }

    /// `coef ∓ t_{1-α/2, df} * se` for each coefficient.
    pub fn confidence_bounds(params: &[T], std_errs: &[T], df_resid: usize, level: T) -> Vec<(T, T)> {
        let q = level
            .to_f64()
            .map(|l| students_t_quantile(0.5 + l / 2.0, df_resid as f64))
            .and_then(T::from)
            .unwrap_or_else(T::nan);

        params
            .iter()
            .zip(std_errs.iter())
            .map(|(&b, &se)| (b - q * se, b + q * se))
            .collect()
    }

    /// Estimates in design-column order.
    pub fn params(&self) -> Vec<T> {
        self.rows.iter().map(|r| r.coef).collect()
    }

    /// Look up a row by regressor name.
    pub fn get(&self, name: &str) -> Option<&Coefficient<T>> {
        self.rows.iter().find(|r| r.name == name)
    }
}
