//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core fitting algorithm: ordinary least squares
//! of a response on the columns of a design matrix.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Ordinary least squares fit.
pub mod ols;
