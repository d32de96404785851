//! Goodness-of-fit statistics and residual diagnostics for OLS fits.
//!
//! ## Purpose
//!
//! This module computes the statistics reported around the coefficient table
//! of a regression summary: R^2 and adjusted R^2, the overall F test,
//! log-likelihood and information criteria, and residual checks for
//! normality (Omnibus, Jarque-Bera), autocorrelation (Durbin-Watson) and
//! multicollinearity (condition number).
//!
//! ## Design notes
//!
//! * **Intercept aware**: With a constant column, R^2 and the F test use the
//!   centered total sum of squares; without one they use the uncentered sum.
//! * **Degrees of freedom**: `df_model = rank - k_constant`, `df_resid = n - rank`.
//! * **Normality tests**: D'Agostino-Pearson K^2 needs at least 8 residuals and
//!   is omitted below that.
//!
//! ## Key concepts
//!
//! * **Log-likelihood**: Gaussian, evaluated at the MLE of the error variance.
//! * **AIC/BIC**: `-2 llf + 2 k` and `-2 llf + ln(n) k` with `k = rank`.
//!
//! ## Invariants
//!
//! * RMSE, MAE and SSR are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not perform the fit.
//! * This module does not compute influence measures beyond leverage.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::math::distributions::{chi_squared_survival, f_survival};
use crate::math::linalg::condition_number;
use crate::math::moments::{durbin_watson, kurtosis, mean, skewness};

// ============================================================================
// Fit Statistics
// ============================================================================

/// Goodness-of-fit statistics of an OLS fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitStatistics<T> {
    /// Number of observations.
    pub n_obs: usize,

    /// Model degrees of freedom (rank minus intercept).
    pub df_model: usize,

    /// Residual degrees of freedom (observations minus rank).
    pub df_resid: usize,

    /// 1 when the design holds a constant column, else 0.
    pub k_constant: usize,

    /// Coefficient of determination.
    pub r_squared: T,

    /// R^2 adjusted for the number of regressors.
    pub adj_r_squared: T,

    /// F statistic of the regression against the intercept-only model.
    pub f_statistic: T,

    /// Upper-tail probability of `f_statistic`.
    pub f_p_value: T,

    /// Gaussian log-likelihood.
    pub log_likelihood: T,

    /// Akaike information criterion.
    pub aic: T,

    /// Bayesian information criterion.
    pub bic: T,

    /// Sum of squared residuals.
    pub ssr: T,

    /// Explained sum of squares.
    pub ess: T,

    /// Total sum of squares around the mean of `y`.
    pub centered_tss: T,

    /// Total sum of squares around zero.
    pub uncentered_tss: T,

    /// Residual variance estimate `SSR / df_resid`.
    pub scale: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,
}

impl<T: Float> FitStatistics<T> {
    /// Compute fit statistics from the response and the residuals.
    pub fn compute(y: &[T], residuals: &[T], rank: usize, has_constant: bool) -> Self {
        let n_obs = y.len();
        let n = T::from(n_obs).unwrap_or_else(T::nan);
        let k_constant = usize::from(has_constant);
        let df_model = rank.saturating_sub(k_constant);
        let df_resid = n_obs.saturating_sub(rank);

        let ssr = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let sum_abs = residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs());
        let y_mean = mean(y);
        let centered_tss = y
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - y_mean) * (v - y_mean));
        let uncentered_tss = y.iter().fold(T::zero(), |acc, &v| acc + v * v);

        let tss = if has_constant {
            centered_tss
        } else {
            uncentered_tss
        };
        let ess = tss - ssr;
        let r_squared = T::one() - ssr / tss;

        let df_resid_t = T::from(df_resid).unwrap_or_else(T::nan);
        let df_model_t = T::from(df_model).unwrap_or_else(T::nan);
        let k_const_t = T::from(k_constant).unwrap_or_else(T::zero);

        let (scale, adj_r_squared) = if df_resid == 0 {
            (T::nan(), T::nan())
        } else {
            (
                ssr / df_resid_t,
                T::one() - (n - k_const_t) / df_resid_t * (T::one() - r_squared),
            )
        };

        let (f_statistic, f_p_value) = if df_model == 0 || df_resid == 0 {
            (T::nan(), T::nan())
        } else {
            let f = (ess / df_model_t) / (ssr / df_resid_t);
            let p = f
                .to_f64()
                .map(|f| f_survival(f, df_model as f64, df_resid as f64))
                .and_then(T::from)
                .unwrap_or_else(T::nan);
            (f, p)
        };

        let log_likelihood = Self::calculate_log_likelihood(ssr, n_obs);
        let k = T::from(rank).unwrap_or_else(T::nan);
        let two = T::from(2.0).unwrap_or_else(T::nan);
        let aic = -two * log_likelihood + two * k;
        let bic = -two * log_likelihood + n.ln() * k;

        Self {
            n_obs,
            df_model,
            df_resid,
            k_constant,
            r_squared,
            adj_r_squared,
            f_statistic,
            f_p_value,
            log_likelihood,
            aic,
            bic,
            ssr,
            ess,
            centered_tss,
            uncentered_tss,
            scale,
            rmse: (ssr / n).sqrt(),
            mae: sum_abs / n,
        }
    }

    /// `-n/2 ln(2 pi) - n/2 ln(SSR / n) - n/2`.
    pub fn calculate_log_likelihood(ssr: T, n_obs: usize) -> T {
        let n = T::from(n_obs).unwrap_or_else(T::nan);
        let half_n = n / T::from(2.0).unwrap_or_else(T::nan);
        let two_pi = T::from(2.0 * PI).unwrap_or_else(T::nan);
        -half_n * two_pi.ln() - half_n * (ssr / n).ln() - half_n
    }
}

// ============================================================================
// Residual Diagnostics
// ============================================================================

/// Normality, autocorrelation and conditioning checks on an OLS fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidualDiagnostics<T> {
    /// D'Agostino-Pearson K^2 (requires at least 8 residuals).
    pub omnibus: Option<T>,

    /// Chi-squared(2) upper tail of `omnibus`.
    pub omnibus_p_value: Option<T>,

    /// Biased skewness of the residuals.
    pub skew: T,

    /// Biased Pearson kurtosis of the residuals.
    pub kurtosis: T,

    /// Durbin-Watson statistic.
    pub durbin_watson: T,

    /// Jarque-Bera statistic.
    pub jarque_bera: T,

    /// Chi-squared(2) upper tail of `jarque_bera`.
    pub jarque_bera_p_value: T,

    /// Ratio of the largest to the smallest singular value of the design.
    pub condition_number: T,
}

impl<T: Float> ResidualDiagnostics<T> {
    /// Minimum sample size for the skewness test inside the omnibus statistic.
    const OMNIBUS_MIN_OBS: usize = 8;

    /// Compute residual diagnostics.
    pub fn compute(residuals: &[T], singular_values: &[T]) -> Self {
        let n = residuals.len();
        let skew = skewness(residuals);
        let kurt = kurtosis(residuals);

        let (omnibus, omnibus_p_value) = match (skew.to_f64(), kurt.to_f64()) {
            (Some(s), Some(k)) if n >= Self::OMNIBUS_MIN_OBS => {
                let k2 = Self::omnibus_statistic(s, k, n);
                (T::from(k2), T::from(chi_squared_survival(k2, 2.0)))
            }
            _ => (None, None),
        };

        let (jarque_bera, jarque_bera_p_value) = Self::jarque_bera(skew, kurt, n);

        Self {
            omnibus,
            omnibus_p_value,
            skew,
            kurtosis: kurt,
            durbin_watson: durbin_watson(residuals),
            jarque_bera,
            jarque_bera_p_value,
            condition_number: condition_number(singular_values),
        }
    }

    /// Jarque-Bera statistic `n/6 (S^2 + (K - 3)^2 / 4)` and its p-value.
    pub fn jarque_bera(skew: T, kurt: T, n: usize) -> (T, T) {
        let jb = match (skew.to_f64(), kurt.to_f64()) {
            (Some(s), Some(k)) => n as f64 / 6.0 * (s * s + (k - 3.0).powi(2) / 4.0),
            _ => f64::NAN,
        };
        let p = chi_squared_survival(jb, 2.0);
        (
            T::from(jb).unwrap_or_else(T::nan),
            T::from(p).unwrap_or_else(T::nan),
        )
    }

    /// `Z_skew^2 + Z_kurt^2` from the D'Agostino skewness and Anscombe-Glynn
    /// kurtosis tests.
    pub fn omnibus_statistic(skew: f64, kurt: f64, n: usize) -> f64 {
        let zs = Self::skew_z(skew, n as f64);
        let zk = Self::kurtosis_z(kurt, n as f64);
        zs * zs + zk * zk
    }

    fn skew_z(b2: f64, n: f64) -> f64 {
        let mut y = b2 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
        let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
            / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
        let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
        let delta = 1.0 / (0.5 * w2.ln()).sqrt();
        let alpha = (2.0 / (w2 - 1.0)).sqrt();
        if y == 0.0 {
            y = 1.0;
        }
        delta * (y / alpha + ((y / alpha).powi(2) + 1.0).sqrt()).ln()
    }

    fn kurtosis_z(b2: f64, n: f64) -> f64 {
        let e = 3.0 * (n - 1.0) / (n + 1.0);
        let var_b2 =
            24.0 * n * (n - 2.0) * (n - 3.0) / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
        let x = (b2 - e) / var_b2.sqrt();
        let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
            * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
        let a = 6.0
            + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());
        let term1 = 1.0 - 2.0 / (9.0 * a);
        let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
        if denom == 0.0 {
            return f64::NAN;
        }
        let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).powf(1.0 / 3.0);
        (term1 - term2) / (2.0 / (9.0 * a)).sqrt()
    }
}
