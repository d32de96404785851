//! Sample moments of residual series.
//!
//! ## Purpose
//!
//! This module computes the population (biased) moments used by the residual
//! diagnostics of an OLS fit: mean, central moments, skewness, Pearson
//! kurtosis and the Durbin-Watson statistic.
//!
//! ## Invariants
//!
//! * Moments are biased (divide by `n`), matching the usual regression summaries.
//! * Kurtosis is Pearson's (a normal sample gives ~3, not ~0).
//! * Empty or constant inputs yield NaN for ratios rather than panicking.

// External dependencies
use num_traits::Float;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean<T: Float>(vals: &[T]) -> T {
    let n = T::from(vals.len()).unwrap_or_else(T::zero);
    vals.iter().fold(T::zero(), |acc, &v| acc + v) / n
}

/// Central moment of order `k`, divided by `n`.
pub fn central_moment<T: Float>(vals: &[T], k: i32) -> T {
    let m = mean(vals);
    let n = T::from(vals.len()).unwrap_or_else(T::zero);
    vals.iter().fold(T::zero(), |acc, &v| acc + (v - m).powi(k)) / n
}

/// Biased sample skewness, `m3 / m2^1.5`.
pub fn skewness<T: Float>(vals: &[T]) -> T {
    let m2 = central_moment(vals, 2);
    let m3 = central_moment(vals, 3);
    m3 / m2.powf(T::from(1.5).unwrap_or_else(T::nan))
}

/// Biased Pearson kurtosis, `m4 / m2^2`.
pub fn kurtosis<T: Float>(vals: &[T]) -> T {
    let m2 = central_moment(vals, 2);
    let m4 = central_moment(vals, 4);
    m4 / (m2 * m2)
}

/// Durbin-Watson statistic, `sum (e_t - e_{t-1})^2 / sum e_t^2`.
///
/// Values near 2 indicate no first-order autocorrelation.
pub fn durbin_watson<T: Float>(residuals: &[T]) -> T {
    let num = residuals
        .windows(2)
        .fold(T::zero(), |acc, w| acc + (w[1] - w[0]).powi(2));
    let den = residuals.iter().fold(T::zero(), |acc, &e| acc + e * e);
    num / den
}
