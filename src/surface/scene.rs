//! Plot-ready description of a fitted regression in three dimensions.
//!
//! ## Purpose
//!
//! This module gathers what a 3D view of a multiple regression needs: the
//! observed points over two regressors and the response, plus the fitted
//! plane sampled on a grid. Values are converted to `f64` for the renderer.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::OlsResult;
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;
use crate::surface::grid::{RegressionPlane, SurfaceGrid};

/// Observations and fitted surface over two regressors.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene3d {
    /// First regressor, per observation.
    pub x: Vec<f64>,

    /// Second regressor, per observation.
    pub y: Vec<f64>,

    /// Response, per observation.
    pub response: Vec<f64>,

    /// Fitted plane sampled over the observed ranges.
    pub grid: SurfaceGrid<f64>,

    /// Axis names: (first regressor, second regressor, response).
    pub labels: (String, String, String),
}

impl Scene3d {
    /// Build a scene from a design, its response and the fitted result.
    pub fn new<T: Float>(
        design: &DesignMatrix<T>,
        response: &[T],
        result: &OlsResult<T>,
        x_name: &str,
        y_name: &str,
        resolution: usize,
    ) -> Result<Self, OlsError> {
        if response.len() != design.n_rows() {
            return Err(OlsError::MismatchedInputs {
                rows: design.n_rows(),
                y_len: response.len(),
            });
        }

        let grid = SurfaceGrid::new(design, result, x_name, y_name, resolution)?;
        let to_f64 = |v: &[T]| -> Vec<f64> {
            v.iter().map(|x| x.to_f64().unwrap_or(f64::NAN)).collect()
        };
        let plane = &grid.plane;

        Ok(Self {
            x: to_f64(&design.column_by_name(x_name)?),
            y: to_f64(&design.column_by_name(y_name)?),
            response: to_f64(response),
            grid: SurfaceGrid {
                xs: to_f64(&grid.xs),
                ys: to_f64(&grid.ys),
                z: grid.z.iter().map(|row| to_f64(row)).collect(),
                plane: RegressionPlane {
                    x_name: plane.x_name.clone(),
                    y_name: plane.y_name.clone(),
                    offset: plane.offset.to_f64().unwrap_or(f64::NAN),
                    x_coef: plane.x_coef.to_f64().unwrap_or(f64::NAN),
                    y_coef: plane.y_coef.to_f64().unwrap_or(f64::NAN),
                },
            },
            labels: (
                x_name.to_string(),
                y_name.to_string(),
                result.dependent_name.clone(),
            ),
        })
    }

    /// (min, max) over the observed response and the fitted surface.
    pub fn response_range(&self) -> (f64, f64) {
        let (z_lo, z_hi) = self.grid.z_range();
        self.response
            .iter()
            .fold((z_lo, z_hi), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}
