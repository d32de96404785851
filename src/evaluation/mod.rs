//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns a raw least-squares fit into the statistics of a
//! regression summary:
//! - Coefficient standard errors, t tests and confidence intervals
//! - Goodness-of-fit statistics and information criteria
//! - Residual normality, autocorrelation and conditioning checks
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Coefficient table.
pub mod inference;

/// Fit statistics and residual diagnostics.
pub mod diagnostics;
