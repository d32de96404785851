//! Ordinary least squares fitting.
//!
//! ## Purpose
//!
//! This module fits `y = X b + e` by minimizing the residual sum of squares
//! and keeps the quantities later layers derive inference from: fitted values,
//! residuals, the numerical rank and the unscaled covariance `pinv(X'X)`.
//!
//! ## Design notes
//!
//! * **Solver**: Delegates to [`FloatLinalg::least_squares`] (truncated SVD).
//! * **Rank deficiency**: Collinear columns are not an error; the minimum-norm
//!   solution is returned and `rank < n_cols`.
//!
//! ## Invariants
//!
//! * `params.len() == design.n_cols()`.
//! * `fitted.len() == residuals.len() == design.n_rows()`.
//! * `fitted[i] + residuals[i] == y[i]` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see the engine's validator).
//! * This module does not compute standard errors or test statistics.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;

// ============================================================================
// Fit
// ============================================================================

/// Raw result of an OLS solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresFit<T> {
    /// Estimated coefficients, one per design column.
    pub params: Vec<T>,

    /// `X b`.
    pub fitted: Vec<T>,

    /// `y - X b`.
    pub residuals: Vec<T>,

    /// Numerical rank of the design.
    pub rank: usize,

    /// Singular values of the design, descending.
    pub singular_values: Vec<T>,

    /// `pinv(X'X)`, row-major.
    pub normalized_cov: Vec<T>,
}

impl<T: FloatLinalg> LeastSquaresFit<T> {
    /// Fit the coefficients of `y` on the columns of `design`.
    pub fn fit(design: &DesignMatrix<T>, y: &[T], rcond: Option<T>) -> Result<Self, OlsError> {
        let (n, p) = design.shape();
        let solution =
            T::least_squares(design.as_slice(), y, n, p, rcond).ok_or(OlsError::SingularDesign)?;

        let params = solution.coefficients;
        let fitted: Vec<T> = design.rows().map(|row| dot(row, &params)).collect();
        let residuals = y
            .iter()
            .zip(fitted.iter())
            .map(|(&yi, &fi)| yi - fi)
            .collect();

        Ok(Self {
            params,
            fitted,
            residuals,
            rank: solution.rank,
            singular_values: solution.singular_values,
            normalized_cov: solution.normalized_cov,
        })
    }

    /// Residual sum of squares.
    pub fn ssr(&self) -> T {
        self.residuals.iter().fold(T::zero(), |acc, &r| acc + r * r)
    }

    /// Prediction for a single row of regressors.
    pub fn predict_row(&self, row: &[T]) -> T {
        dot(row, &self.params)
    }

    /// Diagonal of the hat matrix `X pinv(X'X) X'`.
    pub fn leverage(&self, design: &DesignMatrix<T>) -> Vec<T> {
        let p = design.n_cols();
        design
            .rows()
            .map(|row| T::compute_leverage(row, &self.normalized_cov, p))
            .collect()
    }
}

#[inline]
fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &w)| acc + x * w)
}
