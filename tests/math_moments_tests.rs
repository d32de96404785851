#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use ols_rs::internals::math::moments::{central_moment, durbin_watson, kurtosis, mean, skewness};

// Residuals of the reference fit y = 2.2 + 0.6 x on x = 1..5.
const RESIDUALS: [f64; 5] = [-0.8, 0.6, 1.0, -0.6, -0.2];

#[test]
fn test_mean_and_central_moments() {
    assert_relative_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert!(mean::<f64>(&[]).is_nan());

    assert_relative_eq!(central_moment(&RESIDUALS, 2), 0.48, epsilon = 1e-12);
    assert_relative_eq!(central_moment(&RESIDUALS, 3), 0.096, epsilon = 1e-12);
    assert_relative_eq!(central_moment(&RESIDUALS, 4), 0.334, epsilon = 1e-12);
}

#[test]
fn test_skewness() {
    assert_relative_eq!(skewness(&RESIDUALS), 0.2886751345948128, epsilon = 1e-12);

    // Symmetric sample
    assert_relative_eq!(skewness(&[1.0, 2.0, 3.0]), 0.0, epsilon = 1e-12);

    // Mirroring flips the sign
    let mirrored: Vec<f64> = RESIDUALS.iter().map(|v| -v).collect();
    assert_relative_eq!(skewness(&mirrored), -skewness(&RESIDUALS), epsilon = 1e-12);

    // Constant sample is undefined
    assert!(skewness::<f64>(&[2.0, 2.0, 2.0]).is_nan());
}

/// Kurtosis is Pearson's, not excess.
#[test]
fn test_kurtosis() {
    assert_relative_eq!(kurtosis(&RESIDUALS), 1.45, epsilon = 1e-12);
    assert_relative_eq!(kurtosis(&[-1.0, 1.0]), 1.0, epsilon = 1e-12);
    assert!(kurtosis::<f64>(&[5.0, 5.0]).is_nan());
}

#[test]
fn test_durbin_watson() {
    assert_relative_eq!(durbin_watson(&RESIDUALS), 4.84 / 2.4, epsilon = 1e-12);

    // Alternating signs: strong negative autocorrelation, DW near 4
    assert_relative_eq!(durbin_watson(&[1.0, -1.0, 1.0, -1.0]), 3.0);

    // Smooth series: strong positive autocorrelation, DW near 0
    let smooth = [1.0, 1.0, 1.0, 1.0];
    assert_relative_eq!(durbin_watson(&smooth), 0.0);
}
