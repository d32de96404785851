//! Reproducible synthetic regression data.
//!
//! ## Purpose
//!
//! This module generates regressors and responses for demonstrations,
//! tests and benchmarks:
//! - `uniform`: every column and the response drawn independently from U[0, 1)
//! - `linear`: U[0, 1) regressors and a response from a known linear model
//!   plus Gaussian noise
//!
//! ## Design notes
//!
//! * **Reproducibility**: A seeded `StdRng` drives every draw.
//! * **Layout**: Columns are drawn one after another, `x1` first, then the
//!   response last; regressors are named `x1..xk`.
//! * **No intercept**: The design has no constant column; call
//!   [`DesignMatrix::with_constant`] before fitting.

// External dependencies
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, Uniform};

// Internal dependencies
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;

/// A generated design and its response.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData {
    /// Regressors `x1..xk`, without a constant column.
    pub design: DesignMatrix<f64>,

    /// Response, one value per row.
    pub response: Vec<f64>,
}

impl SyntheticData {
    /// Independent U[0, 1) regressors and response.
    pub fn uniform(n_obs: usize, n_regressors: usize, seed: u64) -> Result<Self, OlsError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let unit = Self::unit_uniform()?;

        let columns = Self::draw_columns(&mut rng, &unit, n_obs, n_regressors);
        let response = (0..n_obs).map(|_| unit.sample(&mut rng)).collect();
        let design = Self::assemble(&columns)?;

        Ok(Self { design, response })
    }

    /// U[0, 1) regressors with `y = intercept + sum slope_j x_j + N(0, noise_sd)`.
    pub fn linear(
        n_obs: usize,
        intercept: f64,
        slopes: &[f64],
        noise_sd: f64,
        seed: u64,
    ) -> Result<Self, OlsError> {
        if !noise_sd.is_finite() || noise_sd < 0.0 {
            return Err(OlsError::InvalidInput(format!(
                "noise_sd must be finite and non-negative, got {noise_sd}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let unit = Self::unit_uniform()?;
        let noise = Normal::new(0.0, noise_sd)
            .map_err(|e| OlsError::InvalidInput(format!("noise distribution: {e}")))?;

        let columns = Self::draw_columns(&mut rng, &unit, n_obs, slopes.len());
        let response = (0..n_obs)
            .map(|i| {
                let signal = columns
                    .iter()
                    .zip(slopes)
                    .fold(intercept, |acc, (col, &b)| acc + b * col[i]);
                signal + noise.sample(&mut rng)
            })
            .collect();
        let design = Self::assemble(&columns)?;

        Ok(Self { design, response })
    }

    fn unit_uniform() -> Result<Uniform<f64>, OlsError> {
        Uniform::new(0.0, 1.0).map_err(|e| OlsError::InvalidInput(format!("uniform distribution: {e}")))
    }

    fn draw_columns(
        rng: &mut StdRng,
        unit: &Uniform<f64>,
        n_obs: usize,
        n_cols: usize,
    ) -> Vec<Vec<f64>> {
        (0..n_cols)
            .map(|_| (0..n_obs).map(|_| unit.sample(rng)).collect())
            .collect()
    }

    fn assemble(columns: &[Vec<f64>]) -> Result<DesignMatrix<f64>, OlsError> {
        let names: Vec<String> = (1..=columns.len()).map(|j| format!("x{j}")).collect();
        let refs: Vec<&[f64]> = columns.iter().map(Vec::as_slice).collect();
        DesignMatrix::from_columns(&names, &refs)
    }
}
