//! Execution engine for OLS fits.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates an OLS fit: it
//! validates the inputs, solves the least-squares problem, and assembles the
//! coefficient table, fit statistics and residual diagnostics into an
//! [`OlsResult`].
//!
//! ## Design notes
//!
//! * Configuration is a plain struct produced by the API builder.
//! * Rank deficiency and missing residual degrees of freedom are reported
//!   through `tracing` warnings and reflected in the result, not as errors.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.

// External dependencies
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::ols::LeastSquaresFit;
use crate::engine::output::OlsResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::{FitStatistics, ResidualDiagnostics};
use crate::evaluation::inference::CoefficientTable;
use crate::math::linalg::FloatLinalg;
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved OLS configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsConfig<T> {
    /// Confidence level of coefficient intervals.
    pub confidence_level: T,

    /// Relative singular-value cutoff (`None` = `max(n, p) * EPSILON`).
    pub rcond: Option<T>,

    /// Compute the hat-matrix diagonal.
    pub return_leverage: bool,

    /// Name of the response shown in the summary.
    pub dependent_name: String,
}

impl<T: FloatLinalg> Default for OlsConfig<T> {
    fn default() -> Self {
        Self {
            confidence_level: T::from(0.95).unwrap_or_else(T::nan),
            rcond: None,
            return_leverage: false,
            dependent_name: "y".to_string(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs an OLS fit end to end.
pub struct OlsExecutor;

impl OlsExecutor {
    /// Fit `y` on `design` and assemble the full result.
    pub fn run<T: FloatLinalg>(
        config: &OlsConfig<T>,
        design: &DesignMatrix<T>,
        y: &[T],
    ) -> Result<OlsResult<T>, OlsError> {
        Validator::validate_inputs(design, y)?;

        let (n_obs, n_cols) = design.shape();
        debug!(n_obs, n_cols, "fitting OLS");

        let fit = LeastSquaresFit::fit(design, y, config.rcond)?;
        if fit.rank < n_cols {
            warn!(
                rank = fit.rank,
                n_cols, "design matrix is rank deficient; returning the minimum-norm solution"
            );
        }

        let constant_index = design.constant_column();
        let statistics =
            FitStatistics::compute(y, &fit.residuals, fit.rank, constant_index.is_some());
        if statistics.df_resid == 0 {
            warn!(n_obs, rank = fit.rank, "no residual degrees of freedom; inference is undefined");
        }

        let coefficients = CoefficientTable::compute(
            design.names(),
            &fit.params,
            &fit.normalized_cov,
            statistics.scale,
            statistics.df_resid,
            config.confidence_level,
        );
        let residual_diagnostics =
            ResidualDiagnostics::compute(&fit.residuals, &fit.singular_values);
        let leverage = config.return_leverage.then(|| fit.leverage(design));

        debug!(
            r_squared = %statistics.r_squared,
            rank = fit.rank,
            "OLS fit complete"
        );

        Ok(OlsResult {
            dependent_name: config.dependent_name.clone(),
            column_names: design.names().to_vec(),
            regressor_means: design.column_means(),
            constant_index,
            rank: fit.rank,
            singular_values: fit.singular_values,
            normalized_cov: fit.normalized_cov,
            params: fit.params,
            coefficients,
            statistics,
            residual_diagnostics,
            fitted: fit.fitted,
            residuals: fit.residuals,
            leverage,
        })
    }
}
