#![cfg(feature = "dev")]

use std::error::Error;

use ols_rs::internals::primitives::errors::OlsError;

#[test]
fn test_ols_error_display() {
    // EmptyInput
    let err = OlsError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // InvalidInput
    let err = OlsError::InvalidInput("test error".to_string());
    assert_eq!(format!("{}", err), "Invalid input: test error");

    // MismatchedInputs
    let err = OlsError::MismatchedInputs { rows: 10, y_len: 5 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: design has 10 rows, y has 5"
    );

    // RaggedColumns
    let err = OlsError::RaggedColumns {
        column: "x2".to_string(),
        len: 4,
        expected: 5,
    };
    assert_eq!(format!("{}", err), "Column 'x2' has 4 values, expected 5");

    // InvalidNumericValue
    let err = OlsError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // TooFewPoints
    let err = OlsError::TooFewPoints { got: 3, min: 5 };
    assert_eq!(format!("{}", err), "Too few points: got 3, need at least 5");

    // InvalidConfidenceLevel
    let err = OlsError::InvalidConfidenceLevel(1.5);
    assert_eq!(
        format!("{}", err),
        "Invalid confidence level: 1.5 (must be > 0 and < 1)"
    );

    // InvalidTolerance
    let err = OlsError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be > 0 and finite)"
    );

    // InvalidResolution
    let err = OlsError::InvalidResolution(1);
    assert_eq!(
        format!("{}", err),
        "Invalid grid resolution: 1 (must be at least 2)"
    );

    // UnknownColumn
    let err = OlsError::UnknownColumn("x9".to_string());
    assert_eq!(format!("{}", err), "Unknown column: 'x9'");

    // DuplicateColumn
    let err = OlsError::DuplicateColumn("const".to_string());
    assert_eq!(format!("{}", err), "Duplicate column name: 'const'");

    // DuplicateParameter
    let err = OlsError::DuplicateParameter {
        parameter: "confidence_level",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'confidence_level' was set multiple times. Each parameter can only be configured once."
    );

    // SingularDesign
    let err = OlsError::SingularDesign;
    assert_eq!(
        format!("{}", err),
        "Design matrix has no usable singular values"
    );

    // Render
    let err = OlsError::Render("backend closed".to_string());
    assert_eq!(format!("{}", err), "Render failed: backend closed");
}

#[test]
fn test_ols_error_traits() {
    let err = OlsError::TooFewPoints { got: 1, min: 2 };

    // Clone and PartialEq
    assert_eq!(err.clone(), err);
    assert_ne!(err, OlsError::EmptyInput);

    // Usable as a boxed std error
    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "Too few points: got 1, need at least 2");
}
