//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates an OLS fit: input validation, the least-squares
//! solve, evaluation, and assembly of the result and its summary table.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Surface
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Fit orchestration.
pub mod executor;

/// Result structure and summary rendering.
pub mod output;
