#![cfg(feature = "dev")]
//! Tests for the ordinary least squares fit.
//!
//! ## Test Organization
//!
//! 1. **Reference Fit** - Hand-computable simple regression
//! 2. **Exact Recovery** - Noise-free multiple regression
//! 3. **Degenerate Designs** - Collinear and all-zero designs

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ols_rs::internals::algorithms::ols::LeastSquaresFit;
use ols_rs::internals::primitives::design::DesignMatrix;
use ols_rs::internals::primitives::errors::OlsError;

fn reference() -> (DesignMatrix<f64>, Vec<f64>) {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let design = DesignMatrix::from_columns(&["x"], &[&x[..]])
        .unwrap()
        .with_constant()
        .unwrap();
    (design, vec![2.0, 4.0, 5.0, 4.0, 5.0])
}

// ============================================================================
// Reference Fit
// ============================================================================

#[test]
fn test_fit_reference() {
    let (design, y) = reference();
    let fit = LeastSquaresFit::fit(&design, &y, None).unwrap();

    assert_eq!(fit.rank, 2);
    assert_relative_eq!(fit.params[0], 2.2, epsilon = 1e-12);
    assert_relative_eq!(fit.params[1], 0.6, epsilon = 1e-12);
    assert_relative_eq!(fit.ssr(), 2.4, epsilon = 1e-12);

    let expected = [-0.8, 0.6, 1.0, -0.6, -0.2];
    for (r, e) in fit.residuals.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*r, *e, epsilon = 1e-12);
    }
}

/// Fitted values and residuals add back up to the response.
#[test]
fn test_fitted_plus_residuals() {
    let (design, y) = reference();
    let fit = LeastSquaresFit::fit(&design, &y, None).unwrap();

    assert_eq!(fit.fitted.len(), y.len());
    for ((f, r), yi) in fit.fitted.iter().zip(&fit.residuals).zip(&y) {
        assert_relative_eq!(f + r, *yi, epsilon = 1e-12);
    }

    // Residuals are orthogonal to every design column
    for j in 0..design.n_cols() {
        let dot: f64 = design
            .column(j)
            .iter()
            .zip(&fit.residuals)
            .map(|(x, r)| x * r)
            .sum();
        assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_predict_row() {
    let (design, y) = reference();
    let fit = LeastSquaresFit::fit(&design, &y, None).unwrap();
    assert_relative_eq!(fit.predict_row(&[1.0, 6.0]), 5.8, epsilon = 1e-12);
    assert_relative_eq!(fit.predict_row(&[1.0, 0.0]), 2.2, epsilon = 1e-12);
}

#[test]
fn test_leverage() {
    let (design, y) = reference();
    let fit = LeastSquaresFit::fit(&design, &y, None).unwrap();
    let h = fit.leverage(&design);

    let expected = [0.6, 0.3, 0.2, 0.3, 0.6];
    for (got, want) in h.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

// ============================================================================
// Exact Recovery
// ============================================================================

/// Noise-free data is recovered to numerical precision.
#[test]
fn test_fit_exact_multiple_regression() {
    let x1 = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let x2 = [1.0, 0.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0];
    let x3 = [2.0, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0, 8.0];
    let y: Vec<f64> = (0..8)
        .map(|i| 1.5 + 2.0 * x1[i] - 3.0 * x2[i] + 0.25 * x3[i])
        .collect();

    let design = DesignMatrix::from_columns(&["x1", "x2", "x3"], &[&x1[..], &x2[..], &x3[..]])
        .unwrap()
        .with_constant()
        .unwrap();
    let fit = LeastSquaresFit::fit(&design, &y, None).unwrap();

    assert_eq!(fit.rank, 4);
    let expected = [1.5, 2.0, -3.0, 0.25];
    for (got, want) in fit.params.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-10);
    }
    assert_abs_diff_eq!(fit.ssr(), 0.0, epsilon = 1e-18);
}

// ============================================================================
// Degenerate Designs
// ============================================================================

/// Collinear columns reduce the rank but still fit the data.
#[test]
fn test_fit_rank_deficient() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let twice: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
    let design = DesignMatrix::from_columns(&["x", "x_twice"], &[&x[..], &twice[..]])
        .unwrap()
        .with_constant()
        .unwrap();
    let y = [2.0, 4.0, 5.0, 4.0, 5.0];

    let fit = LeastSquaresFit::fit(&design, &y, Some(1e-10)).unwrap();
    assert_eq!(fit.rank, 2);
    assert_eq!(fit.params.len(), 3);
    assert_relative_eq!(fit.ssr(), 2.4, epsilon = 1e-10);
    assert_relative_eq!(fit.params[1] + 2.0 * fit.params[2], 0.6, epsilon = 1e-10);
}

#[test]
fn test_fit_zero_design() {
    let zeros = [0.0, 0.0, 0.0];
    let design = DesignMatrix::from_columns(&["z"], &[&zeros[..]]).unwrap();
    let err = LeastSquaresFit::fit(&design, &[1.0, 2.0, 3.0], None).unwrap_err();
    assert_eq!(err, OlsError::SingularDesign);
}
