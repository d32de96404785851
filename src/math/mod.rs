//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout OLS:
//! - Least squares and leverage through the nalgebra backend
//! - Sample moments of residual series
//! - Tail probabilities and quantiles of sampling distributions
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Surface
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Sample moments and serial-correlation statistics.
pub mod moments;

/// Student's t, F and chi-squared distributions (statrs).
pub mod distributions;
