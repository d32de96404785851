#![cfg(feature = "dev")]
//! Tests for distribution tail probabilities and quantiles.
//!
//! Reference values use closed forms where they exist: the t distribution
//! with 3 degrees of freedom and the chi-squared distribution with 2.

use approx::assert_relative_eq;

use ols_rs::internals::math::distributions::{
    chi_squared_survival, f_survival, students_t_quantile, students_t_two_sided_p,
};

/// Closed-form upper tail of Student's t with 3 degrees of freedom.
fn t3_sf(t: f64) -> f64 {
    let u = t / 3f64.sqrt();
    0.5 - (u / (1.0 + u * u) + u.atan()) / std::f64::consts::PI
}

// ============================================================================
// Student's t
// ============================================================================

#[test]
fn test_t_two_sided_p() {
    for t in [0.5, 1.0, 2.1213203435596424, 3.0] {
        assert_relative_eq!(students_t_two_sided_p(t, 3.0), 2.0 * t3_sf(t), epsilon = 1e-9);
        // Symmetric in t
        assert_relative_eq!(
            students_t_two_sided_p(-t, 3.0),
            students_t_two_sided_p(t, 3.0),
            epsilon = 1e-12
        );
    }
    assert_relative_eq!(students_t_two_sided_p(0.0, 10.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_t_two_sided_p_edge_cases() {
    assert!(students_t_two_sided_p(f64::NAN, 3.0).is_nan());
    assert_eq!(students_t_two_sided_p(f64::INFINITY, 3.0), 0.0);
    assert!(students_t_two_sided_p(1.0, 0.0).is_nan());
}

#[test]
fn test_t_quantile() {
    assert_relative_eq!(students_t_quantile(0.975, 3.0), 3.182446305284263, epsilon = 1e-6);
    assert_relative_eq!(students_t_quantile(0.5, 7.0), 0.0, epsilon = 1e-6);
    // Approaches the normal quantile for large df
    assert_relative_eq!(students_t_quantile(0.975, 1e6), 1.959966, epsilon = 1e-4);

    assert!(students_t_quantile(1.0, 3.0).is_nan());
    assert!(students_t_quantile(0.0, 3.0).is_nan());
    assert!(students_t_quantile(0.9, 0.0).is_nan());
}

// ============================================================================
// F and Chi-Squared
// ============================================================================

/// With one numerator degree of freedom, `P(F > t^2) = P(|T| > t)`.
#[test]
fn test_f_survival_matches_t() {
    let t: f64 = 2.1213203435596424;
    assert_relative_eq!(
        f_survival(t * t, 1.0, 3.0),
        students_t_two_sided_p(t, 3.0),
        epsilon = 1e-8
    );
}

#[test]
fn test_f_survival_edge_cases() {
    assert_relative_eq!(f_survival(0.0, 2.0, 5.0), 1.0, epsilon = 1e-12);
    assert_eq!(f_survival(f64::INFINITY, 2.0, 5.0), 0.0);
    assert!(f_survival(f64::NAN, 2.0, 5.0).is_nan());
    assert!(f_survival(1.0, 0.0, 5.0).is_nan());
}

/// Chi-squared with 2 degrees of freedom has `P(X > x) = exp(-x / 2)`.
#[test]
fn test_chi_squared_survival() {
    for x in [0.0, 0.5, 0.5699652777777776, 3.0, 10.0] {
        assert_relative_eq!(chi_squared_survival(x, 2.0), (-x / 2.0).exp(), epsilon = 1e-10);
    }
    assert!(chi_squared_survival(f64::NAN, 2.0).is_nan());
    assert!(chi_squared_survival(1.0, -1.0).is_nan());
}
