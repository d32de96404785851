//! # OLS: Ordinary Least Squares Regression for Rust
//!
//! A multiple linear regression toolkit: fit a response on several
//! regressors by ordinary least squares, inspect the full inferential summary,
//! and visualize the fitted plane against the observations in 3D.
//!
//! ## What is OLS?
//!
//! Ordinary least squares estimates the coefficients `b` of the linear model
//! `y = X b + e` by minimizing the sum of squared residuals `||y - X b||^2`.
//! With an intercept column in `X`, the fitted model is a hyperplane; restricted
//! to two regressors (others held at their means) it is a plane that can be
//! drawn over the scatter of the data.
//!
//! **What you get from a fit:**
//! - Coefficients with standard errors, t-statistics, p-values and confidence intervals
//! - R-squared, adjusted R-squared and the overall F-test
//! - Log-likelihood, AIC and BIC
//! - Residual diagnostics: Omnibus, Jarque-Bera, skew, kurtosis, Durbin-Watson
//! - Condition number of the design, with a note when it signals collinearity
//!
//! **How it works:**
//!
//! 1. Decompose the design with an SVD and drop singular values below the cutoff
//! 2. Solve for the minimum-norm coefficients through the pseudo-inverse
//! 3. Derive residual variance and coefficient covariance `scale * pinv(X'X)`
//! 4. Compute tests and diagnostics from the residuals
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
//!
//! // Build the model
//! let model = Ols::new()
//!     .add_constant()           // Prepend an intercept column
//!     .confidence_level(0.95)   // 95% coefficient intervals
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit_columns(&["x"], &[&x], &y)?;
//!
//! println!("{}", result);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ```text
//!                             OLS Regression Results
//! ==============================================================================
//! Dep. Variable:                      y   R-squared:                       0.600
//! Model:                            OLS   Adj. R-squared:                  0.467
//! Method:                 Least Squares   F-statistic:                    4.5000
//! No. Observations:                   5   Prob (F-statistic):              0.124
//! Df Residuals:                       3   Log-Likelihood:                 -5.260
//! Df Model:                           1   AIC:                             14.52
//! Covariance Type:            nonrobust   BIC:                             13.74
//! ==============================================================================
//!                  coef    std err          t      P>|t|      [0.025      0.975]
//! ------------------------------------------------------------------------------
//! const          2.2000      0.938      2.345      0.101      -0.785       5.185
//! x              0.6000      0.283      2.121      0.124      -0.300       1.500
//! ==============================================================================
//! Omnibus:                          nan   Durbin-Watson:                   2.017
//! Prob(Omnibus):                    nan   Jarque-Bera (JB):                0.570
//! Skew:                           0.289   Prob(JB):                        0.752
//! Kurtosis:                       1.450   Cond. No.                        8.366
//! ==============================================================================
//!
//! Notes:
//! [1] Standard Errors assume that the covariance matrix of the errors is correctly specified.
//! ```
//!
//! ### Query Individual Results
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let x1 = vec![0.0, 1.0, 0.0, 1.0, 2.0, 2.0];
//! let x2 = vec![0.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! let y: Vec<f64> = x1.iter().zip(&x2).map(|(a, b)| 1.0 + 2.0 * a - 3.0 * b).collect();
//!
//! let result = Ols::new()
//!     .add_constant()
//!     .build()?
//!     .fit_columns(&["x1", "x2"], &[&x1, &x2], &y)?;
//!
//! assert!((result.intercept().unwrap() - 1.0).abs() < 1e-10);
//! assert!((result.param("x1")? - 2.0).abs() < 1e-10);
//! assert!((result.param("x2")? + 3.0).abs() < 1e-10);
//! assert!(result.statistics.r_squared > 0.999_999);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ### Visualizing a Fit in 3D
//!
//! With the `plot` feature (enabled by default), a fit over two regressors can
//! be rendered as an SVG with the observations as a scatter and the fitted
//! plane as a surface:
//!
//! ```rust,no_run
//! use ols_rs::prelude::*;
//!
//! let data = SyntheticData::uniform(100, 3, 42)?;
//! let design = data.design.with_constant()?;
//! let result = Ols::new().build()?.fit(&design, &data.response)?;
//!
//! let scene = Scene3d::new(&design, &data.response, &result, "x1", "x2", 10)?;
//! render_regression_3d("ols_3d.svg", &scene, &PlotOptions::default())?;
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ## Builder Parameters
//!
//! | Method                  | Default     | Meaning                                            |
//! |-------------------------|-------------|----------------------------------------------------|
//! | `.add_constant()`       | off         | Prepend a `const` column of ones                   |
//! | `.confidence_level(l)`  | 0.95        | Level of coefficient intervals, in (0, 1)          |
//! | `.rcond(t)`             | `max(n,p)·ε`| Relative singular-value cutoff for the rank        |
//! | `.dependent_name(s)`    | `"y"`       | Response name in the summary                       |
//! | `.return_leverage()`    | off         | Store the hat-matrix diagonal in the result        |
//!
//! Setting any parameter twice is an error reported by `.build()`.
//!
//! ## Rank Deficiency
//!
//! Linearly dependent columns do not fail the fit. The minimum-norm solution
//! is returned, `rank` is reported below the column count, a warning is
//! emitted through `tracing`, and the summary carries a note on the smallest
//! eigenvalue.
//!
//! ## Feature Flags
//!
//! - `plot` (default): SVG rendering with `plotters`
//! - `serde`: `Serialize`/`Deserialize` on result types
//! - `cli`: the `ols3d` demonstration binary
//! - `dev`: exposes internal modules for testing
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type and the named, row-major design matrix.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the SVD least-squares backend, sample moments, and
// distribution tail probabilities.
mod math;

// Layer 3: Algorithms - core OLS algorithm.
//
// Contains the least-squares fit producing coefficients, fitted values
// and residuals.
mod algorithms;

// Layer 4: Evaluation - inference and diagnostics.
//
// Contains the coefficient table (standard errors, t-tests, intervals),
// goodness-of-fit statistics, and residual diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, the fit executor, and result assembly
// with the summary table.
mod engine;

// Layer 6: Surface - plane sampling and rendering.
//
// Contains grid helpers, the plot-ready 3D scene, and the SVG renderer.
mod surface;

// Synthetic data generation for demonstrations and benchmarks.
mod data;

// High-level fluent API for OLS regression.
//
// Provides the `Ols` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard OLS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ols_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CONSTANT_NAME, Coefficient, CoefficientTable, DesignMatrix, FitStatistics,
        OlsBuilder as Ols, OlsError, OlsModel, OlsResult, ResidualDiagnostics,
    };
    pub use crate::data::synthetic::SyntheticData;
    pub use crate::surface::grid::{RegressionPlane, SurfaceGrid, linspace, meshgrid};
    #[cfg(feature = "plot")]
    pub use crate::surface::render::{
        PlotOptions, render_regression_3d, render_regression_3d_svg, viridis,
    };
    pub use crate::surface::scene::Scene3d;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal surface sampling and rendering.
    pub mod surface {
        pub use crate::surface::*;
    }
    /// Internal synthetic data generators.
    pub mod data {
        pub use crate::data::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
