#![cfg(feature = "dev")]

use approx::assert_relative_eq;

use ols_rs::internals::data::synthetic::SyntheticData;
use ols_rs::internals::primitives::errors::OlsError;

#[test]
fn test_uniform_shape_and_names() {
    let data = SyntheticData::uniform(100, 3, 42).unwrap();

    assert_eq!(data.design.shape(), (100, 3));
    assert_eq!(data.response.len(), 100);
    assert_eq!(
        data.design.names(),
        &["x1".to_string(), "x2".to_string(), "x3".to_string()]
    );
    assert!(data.design.constant_column().is_none());
}

/// Every draw lies in [0, 1).
#[test]
fn test_uniform_range() {
    let data = SyntheticData::uniform(200, 2, 1).unwrap();
    let in_unit = |v: &f64| (0.0..1.0).contains(v);

    assert!(data.design.as_slice().iter().all(in_unit));
    assert!(data.response.iter().all(in_unit));

    let mean = data.response.iter().sum::<f64>() / 200.0;
    assert_relative_eq!(mean, 0.5, epsilon = 0.1);
}

#[test]
fn test_uniform_reproducible() {
    let a = SyntheticData::uniform(50, 3, 7).unwrap();
    let b = SyntheticData::uniform(50, 3, 7).unwrap();
    let c = SyntheticData::uniform(50, 3, 8).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_uniform_empty() {
    assert_eq!(
        SyntheticData::uniform(0, 3, 1).unwrap_err(),
        OlsError::EmptyInput
    );
    assert_eq!(
        SyntheticData::uniform(10, 0, 1).unwrap_err(),
        OlsError::EmptyInput
    );
}

/// Without noise the response is exactly the linear model.
#[test]
fn test_linear_noise_free() {
    let slopes = [2.0, -1.0];
    let data = SyntheticData::linear(20, 0.5, &slopes, 0.0, 3).unwrap();

    for (i, row) in data.design.rows().enumerate() {
        let expected = 0.5 + 2.0 * row[0] - row[1];
        assert_relative_eq!(data.response[i], expected, epsilon = 1e-12);
    }
}

#[test]
fn test_linear_noise_scale() {
    let data = SyntheticData::linear(2000, 0.0, &[1.0], 0.5, 9).unwrap();
    let resid: Vec<f64> = data
        .design
        .rows()
        .zip(&data.response)
        .map(|(row, y)| y - row[0])
        .collect();

    let n = resid.len() as f64;
    let mean = resid.iter().sum::<f64>() / n;
    let sd = (resid.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert_relative_eq!(mean, 0.0, epsilon = 0.05);
    assert_relative_eq!(sd, 0.5, epsilon = 0.05);
}

#[test]
fn test_linear_invalid_noise() {
    for bad in [-0.1, f64::NAN, f64::INFINITY] {
        let err = SyntheticData::linear(10, 0.0, &[1.0], bad, 1).unwrap_err();
        assert!(matches!(err, OlsError::InvalidInput(_)));
    }
}
