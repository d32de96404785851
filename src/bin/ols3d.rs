//! Multiple linear regression demo.
//!
//! Generates a synthetic dataset with three regressors, fits OLS with an
//! intercept, prints the regression summary and writes a 3D SVG of the
//! observations and the fitted plane over `x1` and `x2` (with `x3` held at
//! its mean).
//!
//! Usage: `ols3d [config.json]`
//!
//! Every config field is optional:
//!
//! ```json
//! {
//!   "observations": 100,
//!   "seed": 42,
//!   "confidence_level": 0.95,
//!   "grid_resolution": 10,
//!   "output": "ols_3d.svg",
//!   "intercept": 1.0,
//!   "slopes": [2.0, -1.0, 0.5],
//!   "noise_sd": 0.1
//! }
//! ```
//!
//! Without `slopes` the response is pure U[0, 1) noise. Set `RUST_LOG=debug`
//! for progress logs on stderr.

// External dependencies
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Internal dependencies
use ols_rs::prelude::*;

/// Regressors generated when no slopes are given.
const DEFAULT_REGRESSORS: usize = 3;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DemoConfig {
    observations: usize,
    seed: u64,
    confidence_level: f64,
    grid_resolution: usize,
    output: PathBuf,
    intercept: f64,
    slopes: Option<Vec<f64>>,
    noise_sd: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            observations: 100,
            seed: 42,
            confidence_level: 0.95,
            grid_resolution: 10,
            output: PathBuf::from("ols_3d.svg"),
            intercept: 0.0,
            slopes: None,
            noise_sd: 1.0,
        }
    }
}

impl DemoConfig {
    fn load() -> Result<Self, Box<dyn Error>> {
        match std::env::args().nth(1) {
            Some(path) => {
                let text = fs::read_to_string(&path)?;
                let config = serde_json::from_str(&text)?;
                info!(%path, "loaded config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn generate(&self) -> Result<SyntheticData, OlsError> {
        match &self.slopes {
            Some(slopes) => {
                if slopes.len() < 2 {
                    return Err(OlsError::InvalidInput(format!(
                        "need at least 2 slopes to draw a plane, got {}",
                        slopes.len()
                    )));
                }
                SyntheticData::linear(
                    self.observations,
                    self.intercept,
                    slopes,
                    self.noise_sd,
                    self.seed,
                )
            }
            None => SyntheticData::uniform(self.observations, DEFAULT_REGRESSORS, self.seed),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::load()?;
    let data = config.generate()?;
    info!(
        observations = config.observations,
        regressors = data.design.n_cols(),
        seed = config.seed,
        "generated data"
    );

    let model = Ols::new()
        .add_constant()
        .confidence_level(config.confidence_level)
        .build()?;
    let design = model.prepare(&data.design)?;
    let result = model.fit(&design, &data.response)?;

    println!("{}", result);

    let scene = Scene3d::new(
        &design,
        &data.response,
        &result,
        "x1",
        "x2",
        config.grid_resolution,
    )?;
    render_regression_3d(&config.output, &scene, &PlotOptions::default())?;
    info!(path = %config.output.display(), "wrote plot");

    Ok(())
}
