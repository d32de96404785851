//! Error types for OLS operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while building a
//! design matrix, fitting an OLS model, evaluating a regression surface or
//! rendering it.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Design validation**: Ragged or duplicated columns, unknown column names.
//! 3. **Parameter validation**: Confidence levels, tolerances, grid resolutions.
//! 4. **Output failures**: Errors raised by the plotting backend.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for OLS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum OlsError {
    /// Input arrays are empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The design matrix and the response must have the same number of rows.
    MismatchedInputs {
        /// Number of rows in the design matrix.
        rows: usize,
        /// Number of elements in the response.
        y_len: usize,
    },

    /// A column does not have as many values as the other columns.
    RaggedColumns {
        /// Name of the offending column.
        column: String,
        /// Number of values it holds.
        len: usize,
        /// Number of values expected.
        expected: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of observations is below the number of regressors.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// Confidence level must be strictly between 0 and 1.
    InvalidConfidenceLevel(f64),

    /// Tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Surface grids need at least two points per axis.
    InvalidResolution(usize),

    /// Requested column name is not part of the design.
    UnknownColumn(String),

    /// Two columns share the same name.
    DuplicateColumn(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The design matrix has no singular value above tolerance.
    SingularDesign,

    /// The plotting backend failed.
    Render(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OlsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedInputs { rows, y_len } => {
                write!(f, "Length mismatch: design has {rows} rows, y has {y_len}")
            }
            Self::RaggedColumns {
                column,
                len,
                expected,
            } => {
                write!(f, "Column '{column}' has {len} values, expected {expected}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidConfidenceLevel(level) => {
                write!(
                    f,
                    "Invalid confidence level: {level} (must be > 0 and < 1)"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidResolution(n) => {
                write!(f, "Invalid grid resolution: {n} (must be at least 2)")
            }
            Self::UnknownColumn(name) => write!(f, "Unknown column: '{name}'"),
            Self::DuplicateColumn(name) => write!(f, "Duplicate column name: '{name}'"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::SingularDesign => write!(f, "Design matrix has no usable singular values"),
            Self::Render(msg) => write!(f, "Render failed: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for OlsError {}
