//! High-level API for OLS regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring an OLS fit and produces a reusable model
//! that fits a design matrix against a response.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`OlsBuilder`] via `Ols::new()`.
//! 2. Chain configuration methods (`.add_constant()`, `.confidence_level()`, etc.).
//! 3. Call `.build()` to get an [`OlsModel`], then `.fit(&design, &y)`.

// Internal dependencies
use crate::engine::executor::{OlsConfig, OlsExecutor};
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::engine::output::OlsResult;
pub use crate::evaluation::diagnostics::{FitStatistics, ResidualDiagnostics};
pub use crate::evaluation::inference::{Coefficient, CoefficientTable};
pub use crate::primitives::design::{CONSTANT_NAME, DesignMatrix};
pub use crate::primitives::errors::OlsError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring OLS fits.
#[derive(Debug, Clone)]
pub struct OlsBuilder<T: FloatLinalg> {
    /// Prepend an intercept column before fitting.
    pub add_constant: Option<bool>,

    /// Confidence level of coefficient intervals (default: 0.95).
    pub confidence_level: Option<T>,

    /// Relative singular-value cutoff for the rank.
    pub rcond: Option<T>,

    /// Name of the response in the summary (default: "y").
    pub dependent_name: Option<String>,

    /// Compute the hat-matrix diagonal.
    pub return_leverage: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for OlsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> OlsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            add_constant: None,
            confidence_level: None,
            rcond: None,
            dependent_name: None,
            return_leverage: None,
            duplicate_param: None,
        }
    }

    /// Prepend a `const` column of ones unless the design already has one.
    pub fn add_constant(mut self) -> Self {
        if self.add_constant.is_some() {
            self.duplicate_param = Some("add_constant");
        }
        self.add_constant = Some(true);
        self
    }

    /// Set the confidence level of coefficient intervals (e.g., 0.95).
    pub fn confidence_level(mut self, level: T) -> Self {
        if self.confidence_level.is_some() {
            self.duplicate_param = Some("confidence_level");
        }
        self.confidence_level = Some(level);
        self
    }

    /// Set the relative singular-value cutoff used to determine the rank.
    pub fn rcond(mut self, rcond: T) -> Self {
        if self.rcond.is_some() {
            self.duplicate_param = Some("rcond");
        }
        self.rcond = Some(rcond);
        self
    }

    /// Set the response name shown in the summary.
    pub fn dependent_name(mut self, name: impl Into<String>) -> Self {
        if self.dependent_name.is_some() {
            self.duplicate_param = Some("dependent_name");
        }
        self.dependent_name = Some(name.into());
        self
    }

    /// Include the hat-matrix diagonal (leverage) in the output.
    pub fn return_leverage(mut self) -> Self {
        if self.return_leverage.is_some() {
            self.duplicate_param = Some("return_leverage");
        }
        self.return_leverage = Some(true);
        self
    }

    /// Validate the configuration and produce a model.
    pub fn build(self) -> Result<OlsModel<T>, OlsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mut config = OlsConfig::default();
        if let Some(level) = self.confidence_level {
            Validator::validate_confidence_level(level)?;
            config.confidence_level = level;
        }
        if let Some(rcond) = self.rcond {
            Validator::validate_tolerance(rcond)?;
            config.rcond = Some(rcond);
        }
        if let Some(name) = self.dependent_name {
            if name.is_empty() {
                return Err(OlsError::InvalidInput(
                    "dependent_name must not be empty".to_string(),
                ));
            }
            config.dependent_name = name;
        }
        config.return_leverage = self.return_leverage.unwrap_or(false);

        Ok(OlsModel {
            config,
            add_constant: self.add_constant.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// Configured OLS model, reusable across datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsModel<T> {
    config: OlsConfig<T>,
    add_constant: bool,
}

impl<T: FloatLinalg> OlsModel<T> {
    /// Fit `y` on the columns of `design`.
    pub fn fit(&self, design: &DesignMatrix<T>, y: &[T]) -> Result<OlsResult<T>, OlsError> {
        if self.add_constant {
            let design = design.clone().with_constant()?;
            OlsExecutor::run(&self.config, &design, y)
        } else {
            OlsExecutor::run(&self.config, design, y)
        }
    }

    /// Column-stack `columns` under `names` and fit `y` on them.
    pub fn fit_columns<S: AsRef<str>>(
        &self,
        names: &[S],
        columns: &[&[T]],
        y: &[T],
    ) -> Result<OlsResult<T>, OlsError> {
        let design = DesignMatrix::from_columns(names, columns)?;
        self.fit(&design, y)
    }

    /// The design the model would actually fit for `design`.
    ///
    /// Equal to `design` unless an intercept is added.
    pub fn prepare(&self, design: &DesignMatrix<T>) -> Result<DesignMatrix<T>, OlsError> {
        if self.add_constant {
            design.clone().with_constant()
        } else {
            Ok(design.clone())
        }
    }

    /// Resolved configuration.
    pub fn config(&self) -> &OlsConfig<T> {
        &self.config
    }
}
