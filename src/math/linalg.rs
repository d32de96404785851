//! Linear algebra backend abstraction for OLS.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the linear algebra
//! needed by least squares, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses a single SVD of the design matrix for the coefficients, the rank,
//!   the condition number and `pinv(X'X)`, so all of them agree on which
//!   directions were truncated.
//! * The minimum-norm solution is returned for rank-deficient designs.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use num_traits::Float;

// ============================================================================
// Solution Type
// ============================================================================

/// Output of a least-squares solve.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresSolution<T> {
    /// Minimum-norm coefficients, one per design column.
    pub coefficients: Vec<T>,

    /// Singular values of the design matrix, descending.
    pub singular_values: Vec<T>,

    /// Number of singular values above tolerance.
    pub rank: usize,

    /// `pinv(X'X)`, row-major `p × p`.
    pub normalized_cov: Vec<T>,
}

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Display + Send + Sync + 'static {
    /// Solve `min ||y - X b||` for a row-major `n_rows × n_cols` design.
    ///
    /// Singular values below `rcond * max(s)` are discarded. When `rcond` is
    /// `None` it defaults to `max(n_rows, n_cols) * EPSILON`.
    fn least_squares(
        design: &[Self],
        y: &[Self],
        n_rows: usize,
        n_cols: usize,
        rcond: Option<Self>,
    ) -> Option<LeastSquaresSolution<Self>>;

    /// Compute leverage (hat matrix diagonal element) for one design row.
    fn compute_leverage(design_vec: &[Self], xtx_inv: &[Self], n: usize) -> Self;
}

impl FloatLinalg for f64 {
    #[inline]
    fn least_squares(
        design: &[Self],
        y: &[Self],
        n_rows: usize,
        n_cols: usize,
        rcond: Option<Self>,
    ) -> Option<LeastSquaresSolution<Self>> {
        let rcond = rcond.unwrap_or(f64::EPSILON * n_rows.max(n_cols) as f64);
        nalgebra_backend::least_squares(design, y, n_rows, n_cols, rcond)
    }
    #[inline]
    fn compute_leverage(design_vec: &[Self], xtx_inv: &[Self], n: usize) -> Self {
        nalgebra_backend::compute_leverage(design_vec, xtx_inv, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn least_squares(
        design: &[Self],
        y: &[Self],
        n_rows: usize,
        n_cols: usize,
        rcond: Option<Self>,
    ) -> Option<LeastSquaresSolution<Self>> {
        let rcond = rcond.unwrap_or(f32::EPSILON * n_rows.max(n_cols) as f32);
        nalgebra_backend::least_squares(design, y, n_rows, n_cols, rcond)
    }
    #[inline]
    fn compute_leverage(design_vec: &[Self], xtx_inv: &[Self], n: usize) -> Self {
        nalgebra_backend::compute_leverage(design_vec, xtx_inv, n)
    }
}

/// Ratio of the largest to the smallest singular value.
///
/// Infinite when the smallest singular value is zero, NaN for an empty slice.
pub fn condition_number<T: Float>(singular_values: &[T]) -> T {
    let max = singular_values.iter().copied().fold(T::nan(), T::max);
    let min = singular_values.iter().copied().fold(T::nan(), T::min);
    if min == T::zero() {
        T::infinity()
    } else {
        max / min
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Minimum-norm least squares through a truncated SVD.
    pub fn least_squares<N: RealField + Copy>(
        design: &[N],
        y: &[N],
        n_rows: usize,
        n_cols: usize,
        rcond: N,
    ) -> Option<LeastSquaresSolution<N>> {
        let x = DMatrix::from_row_slice(n_rows, n_cols, design);
        let rhs = DVector::from_column_slice(y);

        let svd = x.svd(true, true);
        let u = svd.u.as_ref()?;
        let v_t = svd.v_t.as_ref()?;
        let s = &svd.singular_values;

        let s_max = s
            .iter()
            .copied()
            .fold(N::zero(), |acc, v| if v > acc { v } else { acc });
        if s_max <= N::zero() {
            return None;
        }
        let tol = s_max * rcond;

        let mut coefficients = vec![N::zero(); n_cols];
        let mut normalized_cov = vec![N::zero(); n_cols * n_cols];
        let mut rank = 0;

        for (k, &sk) in s.iter().enumerate() {
            if sk <= tol {
                continue;
            }
            rank += 1;

            // b += v_k (u_k . y) / s_k
            let proj = u.column(k).dot(&rhs) / sk;
            for (j, c) in coefficients.iter_mut().enumerate() {
                *c = *c + v_t[(k, j)] * proj;
            }

            // pinv(X'X) += v_k v_k' / s_k^2
            let inv_s2 = N::one() / (sk * sk);
            for a in 0..n_cols {
                let va = v_t[(k, a)] * inv_s2;
                for b in 0..n_cols {
                    let idx = a * n_cols + b;
                    normalized_cov[idx] = normalized_cov[idx] + va * v_t[(k, b)];
                }
            }
        }

        let mut singular_values: Vec<N> = s.iter().copied().collect();
        singular_values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        Some(LeastSquaresSolution {
            coefficients,
            singular_values,
            rank,
            normalized_cov,
        })
    }

    /// Compute `x' (X'X)^+ x` for one design row.
    pub fn compute_leverage<N: RealField + Copy>(
        design_vec: &[N],
        xtx_inv: &[N],
        n_coeffs: usize,
    ) -> N {
        let x = DVector::from_column_slice(design_vec);
        let inv = DMatrix::from_row_slice(n_coeffs, n_coeffs, xtx_inv);
        (x.transpose() * &inv * &x)[(0, 0)]
    }
}
