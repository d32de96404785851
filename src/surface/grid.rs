//! Evaluation grids for fitted regression planes.
//!
//! ## Purpose
//!
//! This module samples a fitted OLS model over two chosen regressors so the
//! result can be drawn as a surface. Every other regressor is held at its
//! sample mean, and the intercept (if any) is folded into the plane's offset.
//!
//! ## Design notes
//!
//! * **Layout**: `meshgrid` follows the usual convention, rows follow the
//!   second axis and columns the first, so `z[i][j] = plane(xs[j], ys[i])`.
//! * **Ranges**: Each axis spans the observed range of its regressor.
//!
//! ## Invariants
//!
//! * `linspace(a, b, n)` has exactly `n` points, starting at `a` and ending at `b`.
//! * Grid rows have `xs.len()` entries; there are `ys.len()` rows.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::OlsResult;
use crate::engine::validator::Validator;
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;

// ============================================================================
// Grid Helpers
// ============================================================================

/// `n` evenly spaced points from `start` to `stop`, both included.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let steps = T::from(n - 1).unwrap_or_else(T::one);
            let step = (stop - start) / steps;
            let mut out: Vec<T> = (0..n)
                .map(|i| start + step * T::from(i).unwrap_or_else(T::zero))
                .collect();
            // Pin the endpoint against rounding drift.
            out[n - 1] = stop;
            out
        }
    }
}

/// Coordinate matrices from two coordinate vectors.
///
/// Returns `(xx, yy)` with `xx[i][j] = xs[j]` and `yy[i][j] = ys[i]`.
pub fn meshgrid<T: Copy>(xs: &[T], ys: &[T]) -> (Vec<Vec<T>>, Vec<Vec<T>>) {
    let xx = ys.iter().map(|_| xs.to_vec()).collect();
    let yy = ys.iter().map(|&y| vec![y; xs.len()]).collect();
    (xx, yy)
}

// ============================================================================
// Regression Plane
// ============================================================================

/// Fitted response as a function of two regressors.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionPlane<T> {
    /// Name of the regressor on the first axis.
    pub x_name: String,

    /// Name of the regressor on the second axis.
    pub y_name: String,

    /// Intercept plus the other regressors' contributions at their means.
    pub offset: T,

    /// Coefficient of the first-axis regressor.
    pub x_coef: T,

    /// Coefficient of the second-axis regressor.
    pub y_coef: T,
}

impl<T: Float> RegressionPlane<T> {
    /// Slice a fitted model along two regressors.
    pub fn from_result(result: &OlsResult<T>, x_name: &str, y_name: &str) -> Result<Self, OlsError> {
        if x_name == y_name {
            return Err(OlsError::InvalidInput(format!(
                "plane axes must differ, got '{x_name}' twice"
            )));
        }

        let index_of = |name: &str| {
            result
                .column_names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| OlsError::UnknownColumn(name.to_string()))
        };
        let xi = index_of(x_name)?;
        let yi = index_of(y_name)?;
        if Some(xi) == result.constant_index || Some(yi) == result.constant_index {
            return Err(OlsError::InvalidInput(
                "the constant column cannot be a plane axis".to_string(),
            ));
        }

        let offset = result
            .params
            .iter()
            .zip(result.regressor_means.iter())
            .enumerate()
            .filter(|(j, _)| *j != xi && *j != yi)
            .fold(T::zero(), |acc, (_, (&b, &m))| acc + b * m);

        Ok(Self {
            x_name: x_name.to_string(),
            y_name: y_name.to_string(),
            offset,
            x_coef: result.params[xi],
            y_coef: result.params[yi],
        })
    }

    /// Height of the plane at `(a, b)`.
    #[inline]
    pub fn evaluate(&self, a: T, b: T) -> T {
        self.offset + self.x_coef * a + self.y_coef * b
    }
}

// ============================================================================
// Surface Grid
// ============================================================================

/// Plane sampled on a regular grid over the observed regressor ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid<T> {
    /// First-axis coordinates.
    pub xs: Vec<T>,

    /// Second-axis coordinates.
    pub ys: Vec<T>,

    /// Heights, `z[i][j] = plane(xs[j], ys[i])`.
    pub z: Vec<Vec<T>>,

    /// The sampled plane.
    pub plane: RegressionPlane<T>,
}

impl<T: Float> SurfaceGrid<T> {
    /// Sample `result` over regressors `x_name` and `y_name` of `design`.
    pub fn new(
        design: &DesignMatrix<T>,
        result: &OlsResult<T>,
        x_name: &str,
        y_name: &str,
        resolution: usize,
    ) -> Result<Self, OlsError> {
        Validator::validate_resolution(resolution)?;
        let plane = RegressionPlane::from_result(result, x_name, y_name)?;

        let (x_lo, x_hi) = design.column_range(design.column_index(x_name)?);
        let (y_lo, y_hi) = design.column_range(design.column_index(y_name)?);
        let xs = linspace(x_lo, x_hi, resolution);
        let ys = linspace(y_lo, y_hi, resolution);

        let (xx, yy) = meshgrid(&xs, &ys);
        let z = xx
            .iter()
            .zip(yy.iter())
            .map(|(xr, yr)| {
                xr.iter()
                    .zip(yr.iter())
                    .map(|(&a, &b)| plane.evaluate(a, b))
                    .collect()
            })
            .collect();

        Ok(Self { xs, ys, z, plane })
    }

    /// (min, max) of the sampled heights.
    pub fn z_range(&self) -> (T, T) {
        self.z
            .iter()
            .flatten()
            .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
