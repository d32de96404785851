//! Sampling distributions used for regression inference.
//!
//! ## Purpose
//!
//! Thin wrappers over `statrs` for the tail probabilities and quantiles an OLS
//! summary needs: Student's t (coefficient tests and intervals), Fisher-Snedecor
//! F (overall regression test) and chi-squared (normality tests).
//!
//! ## Design notes
//!
//! * All functions work in `f64`; callers convert from their float type.
//! * Undefined inputs (non-positive degrees of freedom, NaN statistics) return
//!   NaN instead of an error, so a degenerate fit still produces a summary.

// External dependencies
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

/// Two-sided p-value `2 * P(T > |t|)` for Student's t with `df` degrees of freedom.
pub fn students_t_two_sided_p(t: f64, df: f64) -> f64 {
    if t.is_nan() {
        return f64::NAN;
    }
    if t.is_infinite() {
        return if df > 0.0 { 0.0 } else { f64::NAN };
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) if df > 0.0 => 2.0 * dist.sf(t.abs()),
        _ => f64::NAN,
    }
}

/// Quantile `q` such that `P(T <= q) = p`.
pub fn students_t_quantile(p: f64, df: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) if df > 0.0 => dist.inverse_cdf(p),
        _ => f64::NAN,
    }
}

/// Upper tail `P(F > f)` for the F distribution with `(d1, d2)` degrees of freedom.
pub fn f_survival(f: f64, d1: f64, d2: f64) -> f64 {
    if f.is_nan() {
        return f64::NAN;
    }
    if f.is_infinite() && d1 > 0.0 && d2 > 0.0 {
        return 0.0;
    }
    match FisherSnedecor::new(d1, d2) {
        Ok(dist) if d1 > 0.0 && d2 > 0.0 => dist.sf(f.max(0.0)),
        _ => f64::NAN,
    }
}

/// Upper tail `P(X > x)` for chi-squared with `k` degrees of freedom.
pub fn chi_squared_survival(x: f64, k: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    match ChiSquared::new(k) {
        Ok(dist) => dist.sf(x.max(0.0)),
        Err(_) => f64::NAN,
    }
}
