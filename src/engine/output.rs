//! Output types and result structures for OLS operations.
//!
//! ## Purpose
//!
//! This module defines the `OlsResult` struct which encapsulates all outputs
//! of an OLS fit: coefficients with their inference, fit statistics, residual
//! diagnostics, fitted values and residuals. Its `Display` implementation
//! renders the familiar "OLS Regression Results" summary table.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Deterministic**: The summary has no date/time lines.
//!
//! ## Invariants
//!
//! * `params`, `column_names`, `regressor_means` and `coefficients.rows` have
//!   one entry per design column.
//! * `fitted` and `residuals` have one entry per observation.
//!
//! ## Non-goals
//!
//! * This module does not fit models; it only stores and presents results.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::{FitStatistics, ResidualDiagnostics};
use crate::evaluation::inference::CoefficientTable;
use crate::primitives::errors::OlsError;

/// Width of the summary table.
const SUMMARY_WIDTH: usize = 78;

/// Condition numbers above this get a multicollinearity note.
const LARGE_CONDITION_NUMBER: f64 = 1000.0;

// ============================================================================
// Result Structure
// ============================================================================

/// Complete OLS output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OlsResult<T> {
    /// Name of the response variable.
    pub dependent_name: String,

    /// Regressor names in design order.
    pub column_names: Vec<String>,

    /// Sample mean of every regressor.
    pub regressor_means: Vec<T>,

    /// Position of the intercept column, if any.
    pub constant_index: Option<usize>,

    /// Numerical rank of the design.
    pub rank: usize,

    /// Singular values of the design, descending.
    pub singular_values: Vec<T>,

    /// `pinv(X'X)`, row-major.
    pub normalized_cov: Vec<T>,

    /// Estimated coefficients in design order.
    pub params: Vec<T>,

    /// Coefficient table with standard errors, tests and intervals.
    pub coefficients: CoefficientTable<T>,

    /// Goodness-of-fit statistics.
    pub statistics: FitStatistics<T>,

    /// Residual normality, autocorrelation and conditioning checks.
    pub residual_diagnostics: ResidualDiagnostics<T>,

    /// Fitted values `X b`.
    pub fitted: Vec<T>,

    /// Residuals `y - X b`.
    pub residuals: Vec<T>,

    /// Hat-matrix diagonal, when requested.
    pub leverage: Option<Vec<T>>,
}

impl<T: Float> OlsResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Intercept estimate, if the design has a constant column.
    pub fn intercept(&self) -> Option<T> {
        self.constant_index.map(|j| self.params[j])
    }

    /// Coefficients of the non-constant regressors.
    pub fn slopes(&self) -> Vec<T> {
        self.params
            .iter()
            .enumerate()
            .filter(|(j, _)| Some(*j) != self.constant_index)
            .map(|(_, &b)| b)
            .collect()
    }

    /// Coefficient of a regressor by name.
    pub fn param(&self, name: &str) -> Result<T, OlsError> {
        self.column_names
            .iter()
            .position(|n| n == name)
            .map(|j| self.params[j])
            .ok_or_else(|| OlsError::UnknownColumn(name.to_string()))
    }

    /// Check whether some design columns were linearly dependent.
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < self.params.len()
    }

    /// Predict the response for full design rows (including any constant).
    pub fn predict(&self, rows: &[Vec<T>]) -> Result<Vec<T>, OlsError> {
        let p = self.params.len();
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != p {
                    return Err(OlsError::InvalidInput(format!(
                        "row {} has {} values, expected {}",
                        i,
                        row.len(),
                        p
                    )));
                }
                Ok(row
                    .iter()
                    .zip(self.params.iter())
                    .fold(T::zero(), |acc, (&x, &b)| acc + x * b))
            })
            .collect()
    }

    /// Scaled coefficient covariance `scale * pinv(X'X)`, row-major.
    pub fn cov_params(&self) -> Vec<T> {
        let scale = self.statistics.scale;
        self.normalized_cov.iter().map(|&v| v * scale).collect()
    }

    /// Confidence intervals at another level.
    pub fn conf_int(&self, level: T) -> Result<Vec<(T, T)>, OlsError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(OlsError::InvalidConfidenceLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        let std_errs: Vec<T> = self.coefficients.rows.iter().map(|r| r.std_err).collect();
        Ok(CoefficientTable::confidence_bounds(
            &self.params,
            &std_errs,
            self.statistics.df_resid,
            level,
        ))
    }

    /// Render the regression summary table.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Fixed decimals, switching to scientific notation for tiny or huge values.
fn num<T: Float>(v: T, decimals: usize) -> String {
    let v = v.to_f64().unwrap_or(f64::NAN);
    if v.is_nan() {
        return "nan".to_string();
    }
    let a = v.abs();
    if a != 0.0 && (a < 10f64.powi(-(decimals as i32)) || a >= 1e9) {
        format!("{:.*e}", decimals.saturating_sub(1).max(1), v)
    } else {
        format!("{:.*}", decimals, v)
    }
}

fn pair_line(f: &mut Formatter<'_>, left: (&str, String), right: (&str, String)) -> fmt::Result {
    writeln!(
        f,
        "{:<22}{:>15}   {:<22}{:>16}",
        left.0, left.1, right.0, right.1
    )
}

impl<T: Float> Display for OlsResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;
        let diag = &self.residual_diagnostics;
        let heavy = "=".repeat(SUMMARY_WIDTH);
        let light = "-".repeat(SUMMARY_WIDTH);

        writeln!(f, "{:^width$}", "OLS Regression Results", width = SUMMARY_WIDTH)?;
        writeln!(f, "{heavy}")?;

        // Model block
        pair_line(
            f,
            ("Dep. Variable:", self.dependent_name.clone()),
            ("R-squared:", num(stats.r_squared, 3)),
        )?;
        pair_line(
            f,
            ("Model:", "OLS".to_string()),
            ("Adj. R-squared:", num(stats.adj_r_squared, 3)),
        )?;
        pair_line(
            f,
            ("Method:", "Least Squares".to_string()),
            ("F-statistic:", num(stats.f_statistic, 4)),
        )?;
        pair_line(
            f,
            ("No. Observations:", stats.n_obs.to_string()),
            ("Prob (F-statistic):", num(stats.f_p_value, 3)),
        )?;
        pair_line(
            f,
            ("Df Residuals:", stats.df_resid.to_string()),
            ("Log-Likelihood:", num(stats.log_likelihood, 3)),
        )?;
        pair_line(
            f,
            ("Df Model:", stats.df_model.to_string()),
            ("AIC:", num(stats.aic, 2)),
        )?;
        pair_line(
            f,
            ("Covariance Type:", "nonrobust".to_string()),
            ("BIC:", num(stats.bic, 2)),
        )?;
        writeln!(f, "{heavy}")?;

        // Coefficient block
        let level = self.coefficients.level.to_f64().unwrap_or(f64::NAN);
        let alpha = 1.0 - level;
        writeln!(
            f,
            "{:<11}{:>10}{:>11}{:>11}{:>11}{:>12}{:>12}",
            "",
            "coef",
            "std err",
            "t",
            "P>|t|",
            format!("[{:.3}", alpha / 2.0),
            format!("{:.3}]", 1.0 - alpha / 2.0)
        )?;
        writeln!(f, "{light}")?;
        for row in &self.coefficients.rows {
            writeln!(
                f,
                "{:<11}{:>10}{:>11}{:>11}{:>11}{:>12}{:>12}",
                row.name,
                num(row.coef, 4),
                num(row.std_err, 3),
                num(row.t_value, 3),
                num(row.p_value, 3),
                num(row.conf_lower, 3),
                num(row.conf_upper, 3)
            )?;
        }
        writeln!(f, "{heavy}")?;

        // Residual block
        let opt = |v: Option<T>| v.map_or_else(|| "nan".to_string(), |v| num(v, 3));
        pair_line(
            f,
            ("Omnibus:", opt(diag.omnibus)),
            ("Durbin-Watson:", num(diag.durbin_watson, 3)),
        )?;
        pair_line(
            f,
            ("Prob(Omnibus):", opt(diag.omnibus_p_value)),
            ("Jarque-Bera (JB):", num(diag.jarque_bera, 3)),
        )?;
        pair_line(
            f,
            ("Skew:", num(diag.skew, 3)),
            ("Prob(JB):", num(diag.jarque_bera_p_value, 3)),
        )?;
        pair_line(
            f,
            ("Kurtosis:", num(diag.kurtosis, 3)),
            ("Cond. No.", num(diag.condition_number, 3)),
        )?;
        writeln!(f, "{heavy}")?;

        // Notes
        writeln!(f)?;
        writeln!(f, "Notes:")?;
        writeln!(
            f,
            "[1] Standard Errors assume that the covariance matrix of the errors is correctly specified."
        )?;
        let cond = diag.condition_number.to_f64().unwrap_or(f64::NAN);
        if self.is_rank_deficient() {
            let smallest = self
                .singular_values
                .last()
                .and_then(|s| s.to_f64())
                .map_or(f64::NAN, |s| s * s);
            writeln!(
                f,
                "[2] The smallest eigenvalue is {smallest:.3e}. This might indicate that there are\nstrong multicollinearity problems or that the design matrix is singular."
            )?;
        } else if cond > LARGE_CONDITION_NUMBER {
            writeln!(
                f,
                "[2] The condition number is large, {cond:.3e}. This might indicate that there are\nstrong multicollinearity or other numerical problems."
            )?;
        }

        Ok(())
    }
}
