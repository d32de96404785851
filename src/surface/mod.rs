//! Layer 6: Surface
//!
//! # Purpose
//!
//! This layer turns a fitted model into something that can be looked at:
//! evaluation grids over two regressors, a plot-ready scene, and (with the
//! `plot` feature) an SVG rendering of observations and the fitted plane.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Surface ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// linspace, meshgrid and regression planes.
pub mod grid;

/// Observations plus sampled plane, in f64.
pub mod scene;

/// SVG rendering via plotters.
#[cfg(feature = "plot")]
pub mod render;
