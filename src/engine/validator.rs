//! Input validation for OLS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for OLS configuration parameters
//! and input data. It checks requirements such as input lengths, finite values,
//! and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like confidence level in (0, 1).
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Regression Requirements**: At least as many observations as regressors.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the fit itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::design::DesignMatrix;
use crate::primitives::errors::OlsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for OLS configuration and input data.
///
/// Provides static methods for validating OLS parameters and input data.
/// All methods return `Result<(), OlsError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a design matrix and response for fitting.
    pub fn validate_inputs<T: Float>(design: &DesignMatrix<T>, y: &[T]) -> Result<(), OlsError> {
        let (n_rows, n_cols) = design.shape();

        // Check 1: Non-empty arrays
        if y.is_empty() || n_rows == 0 || n_cols == 0 {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Matching lengths
        if n_rows != y.len() {
            return Err(OlsError::MismatchedInputs {
                rows: n_rows,
                y_len: y.len(),
            });
        }

        // Check 3: Sufficient observations for the number of regressors
        if n_rows < n_cols {
            return Err(OlsError::TooFewPoints {
                got: n_rows,
                min: n_cols,
            });
        }

        // Check 4: All values finite
        for (i, row) in design.rows().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                if !val.is_finite() {
                    return Err(OlsError::InvalidNumericValue(format!(
                        "{}[{}]={}",
                        design.names()[j],
                        i,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the confidence level of coefficient intervals.
    pub fn validate_confidence_level<T: Float>(level: T) -> Result<(), OlsError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(OlsError::InvalidConfidenceLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the relative singular-value cutoff.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), OlsError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(OlsError::InvalidTolerance(tol.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the number of grid points per surface axis.
    pub fn validate_resolution(resolution: usize) -> Result<(), OlsError> {
        if resolution < 2 {
            return Err(OlsError::InvalidResolution(resolution));
        }
        Ok(())
    }

    /// Validate that a builder parameter was not set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), OlsError> {
        match duplicate {
            Some(parameter) => Err(OlsError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
