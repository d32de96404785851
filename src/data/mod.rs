//! Synthetic data generation.
//!
//! Seeded generators for regressors and responses, used by the demo binary,
//! the benchmarks and the tests.

/// Uniform and linear-model data generators.
pub mod synthetic;
