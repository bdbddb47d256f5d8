//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`EngineConfig`]     – integration method and Verlet compatibility switch
//! - [`ParametersConfig`] – total simulated time and step size
//! - [`OutputConfig`]     – optional trajectory file path
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   method: "Verlet"          # "Euler", "Verlet" or "VerletREL"
//!   per_body_reeval: false    # optional legacy Verlet mode
//!
//! parameters:
//!   t_end: 1.0                # total simulated time [yr]
//!   dt: 0.001                 # fixed step size [yr]
//!
//! output:
//!   trajectory: "orbits.xyz"  # optional; omit to skip trajectory output
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]    # position [AU]
//!     v: [ 0.0, 0.0, 0.0 ]    # velocity [AU/yr]
//!     m: 1.0                  # mass [solar masses]
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; see [`crate::simulation::scenario`].

use std::path::PathBuf;

use serde::Deserialize;

/// Which integration method the engine uses.
/// `method: "Euler"`, `"Verlet"` or `"VerletREL"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodConfig {
    #[serde(rename = "Euler")] // Forward Euler, first order, non-conserving
    Euler,

    #[serde(rename = "Verlet")] // Velocity Verlet, second order, good long-term energy behavior
    Verlet,

    #[serde(rename = "VerletREL")] // Velocity Verlet with the relativistic-corrected force law
    VerletRelativistic,
}

/// High-level engine configuration.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub method: MethodConfig, // time integrator used for advancing the system
    #[serde(default)]
    pub per_body_reeval: bool, // legacy Verlet: full force pass after each body's position update
}

/// Global numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time [yr]
    pub dt: f64,    // fixed step size [yr]
}

/// Output settings; the trajectory file is skipped when absent.
#[derive(Deserialize, Debug, Default)]
pub struct OutputConfig {
    pub trajectory: Option<PathBuf>,
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, exactly 3 components [AU]
    pub v: Vec<f64>, // initial velocity, exactly 3 components [AU/yr]
    pub m: f64,      // mass [solar masses]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub bodies: Vec<BodyConfig>,
}
