#![cfg(feature = "dev")]
//! Tests for fit statistics and residual diagnostics.
//!
//! ## Test Organization
//!
//! 1. **Fit Statistics** - R^2, F test, likelihood and information criteria
//! 2. **Degenerate Fits** - No residual or model degrees of freedom
//! 3. **Residual Diagnostics** - Normality, autocorrelation, conditioning

use approx::assert_relative_eq;

use ols_rs::internals::evaluation::diagnostics::{FitStatistics, ResidualDiagnostics};

// Reference fit y = 2.2 + 0.6 x on x = 1..5.
const Y: [f64; 5] = [2.0, 4.0, 5.0, 4.0, 5.0];
const RESIDUALS: [f64; 5] = [-0.8, 0.6, 1.0, -0.6, -0.2];

// ============================================================================
// Fit Statistics
// ============================================================================

#[test]
fn test_reference_statistics() {
    let stats = FitStatistics::compute(&Y, &RESIDUALS, 2, true);

    assert_eq!(stats.n_obs, 5);
    assert_eq!(stats.df_model, 1);
    assert_eq!(stats.df_resid, 3);
    assert_eq!(stats.k_constant, 1);

    assert_relative_eq!(stats.ssr, 2.4, epsilon = 1e-12);
    assert_relative_eq!(stats.centered_tss, 6.0, epsilon = 1e-12);
    assert_relative_eq!(stats.uncentered_tss, 86.0, epsilon = 1e-12);
    assert_relative_eq!(stats.ess, 3.6, epsilon = 1e-12);
    assert_relative_eq!(stats.r_squared, 0.6, epsilon = 1e-12);
    assert_relative_eq!(stats.adj_r_squared, 1.0 - 4.0 / 3.0 * 0.4, epsilon = 1e-12);
    assert_relative_eq!(stats.scale, 0.8, epsilon = 1e-12);
    assert_relative_eq!(stats.rmse, 0.48f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(stats.mae, 0.64, epsilon = 1e-12);
}

/// For a single regressor, F = t^2 and shares its p-value.
#[test]
fn test_reference_f_test() {
    let stats = FitStatistics::compute(&Y, &RESIDUALS, 2, true);
    assert_relative_eq!(stats.f_statistic, 4.5, epsilon = 1e-12);
    assert_relative_eq!(stats.f_p_value, 0.1240270626575547, epsilon = 1e-7);
}

#[test]
fn test_reference_information_criteria() {
    let stats = FitStatistics::compute(&Y, &RESIDUALS, 2, true);
    assert_relative_eq!(stats.log_likelihood, -5.259769728322862, epsilon = 1e-10);
    assert_relative_eq!(stats.aic, 14.519539456645724, epsilon = 1e-10);
    assert_relative_eq!(stats.bic, 13.738415281513925, epsilon = 1e-10);

    assert_relative_eq!(
        FitStatistics::calculate_log_likelihood(2.4, 5),
        stats.log_likelihood,
        epsilon = 1e-12
    );
}

/// Without an intercept, R^2 uses the uncentered total sum of squares.
#[test]
fn test_statistics_without_constant() {
    let stats = FitStatistics::compute(&Y, &RESIDUALS, 2, false);
    assert_eq!(stats.k_constant, 0);
    assert_eq!(stats.df_model, 2);
    assert_relative_eq!(stats.r_squared, 1.0 - 2.4 / 86.0, epsilon = 1e-12);
    assert_relative_eq!(stats.adj_r_squared, 1.0 - 5.0 / 3.0 * (2.4 / 86.0), epsilon = 1e-12);
    assert_relative_eq!(stats.f_statistic, (83.6 / 2.0) / 0.8, epsilon = 1e-10);
}

// ============================================================================
// Degenerate Fits
// ============================================================================

/// A saturated fit has no residual degrees of freedom.
#[test]
fn test_no_residual_dof() {
    let stats = FitStatistics::<f64>::compute(&[1.0, 3.0], &[0.0, 0.0], 2, true);
    assert_eq!(stats.df_resid, 0);
    assert!(stats.scale.is_nan());
    assert!(stats.adj_r_squared.is_nan());
    assert!(stats.f_statistic.is_nan());
    assert!(stats.f_p_value.is_nan());
    assert_relative_eq!(stats.r_squared, 1.0);
}

/// An intercept-only model has no model degrees of freedom.
#[test]
fn test_no_model_dof() {
    let resid = [-1.0, 0.0, 1.0];
    let stats = FitStatistics::<f64>::compute(&[1.0, 2.0, 3.0], &resid, 1, true);
    assert_eq!(stats.df_model, 0);
    assert_relative_eq!(stats.r_squared, 0.0, epsilon = 1e-12);
    assert!(stats.f_statistic.is_nan());
    assert_relative_eq!(stats.scale, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Residual Diagnostics
// ============================================================================

#[test]
fn test_reference_residual_diagnostics() {
    let sv = [(30.0 + 850f64.sqrt()).sqrt(), (30.0 - 850f64.sqrt()).sqrt()];
    let diag = ResidualDiagnostics::compute(&RESIDUALS, &sv);

    // Too few residuals for the omnibus test
    assert!(diag.omnibus.is_none());
    assert!(diag.omnibus_p_value.is_none());

    assert_relative_eq!(diag.skew, 0.2886751345948128, epsilon = 1e-12);
    assert_relative_eq!(diag.kurtosis, 1.45, epsilon = 1e-12);
    assert_relative_eq!(diag.durbin_watson, 2.0166666666666666, epsilon = 1e-12);
    assert_relative_eq!(diag.jarque_bera, 0.5699652777777776, epsilon = 1e-12);
    assert_relative_eq!(diag.jarque_bera_p_value, 0.7520273102357413, epsilon = 1e-9);
    assert_relative_eq!(diag.condition_number, 8.365746312736944, epsilon = 1e-9);
}

#[test]
fn test_jarque_bera_normal_moments() {
    // Skew 0 and kurtosis 3 give JB = 0 and p = 1
    let (jb, p) = ResidualDiagnostics::jarque_bera(0.0, 3.0, 50);
    assert_relative_eq!(jb, 0.0);
    assert_relative_eq!(p, 1.0, epsilon = 1e-12);
}

/// The omnibus p-value is the chi-squared(2) tail of the statistic.
#[test]
fn test_omnibus_with_enough_residuals() {
    let resid = [
        0.3, -1.2, 0.8, 0.1, -0.4, 1.9, -0.7, 0.2, -0.1, 0.6, -1.5, 0.4,
    ];
    let diag = ResidualDiagnostics::<f64>::compute(&resid, &[3.0, 1.0]);

    let k2 = diag.omnibus.unwrap();
    let p = diag.omnibus_p_value.unwrap();
    assert_relative_eq!(k2, 0.5561527672849886, epsilon = 1e-9);
    assert_relative_eq!(p, (-k2 / 2.0).exp(), epsilon = 1e-10);
    assert_relative_eq!(
        k2,
        ResidualDiagnostics::<f64>::omnibus_statistic(diag.skew, diag.kurtosis, resid.len()),
        epsilon = 1e-12
    );
}

/// Strongly skewed, heavy-tailed residuals are flagged as non-normal.
#[test]
fn test_omnibus_detects_outlier() {
    let mut resid = vec![0.1, -0.1, 0.2, -0.2, 0.05, -0.05, 0.15, -0.15, 0.0, 0.1, -0.1, 0.0];
    resid.push(10.0);
    let diag = ResidualDiagnostics::compute(&resid, &[1.0]);

    assert!(diag.skew > 2.0);
    assert!(diag.kurtosis > 6.0);
    assert!(diag.omnibus_p_value.unwrap() < 0.01);
    assert!(diag.jarque_bera_p_value < 0.05);
}
