//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – time step, run length and gravitational constant
//! - [`OutputConfig`]     – how often and how precisely to report positions
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 25000.0             # fixed step size (s)
//!   t_end: 157788000.0      # total simulation time, or
//!   steps: 6312             # number of steps (wins over t_end)
//!   G: 6.67e-11             # optional gravitational constant
//!
//! output:
//!   every: 100              # report every 100th step
//!   precision: 4            # digits after the decimal point
//!
//! bodies:
//!   - x: [ 1.4960e+11, 0.0 ]
//!     v: [ 0.0, 2.9800e+04 ]
//!     m: 5.9740e+24
//!     label: earth.gif
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.9890e+30
//!     label: sun.gif
//! ```
//!
//! [`Scenario::build_scenario`](crate::Scenario::build_scenario) validates
//! this configuration and maps it into the runtime types.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::forces::GRAVITATIONAL_CONSTANT;

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_every() -> u64 {
    1
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64, // time step size
    #[serde(default)]
    pub steps: Option<u64>, // number of steps to run
    #[serde(default)]
    pub t_end: Option<f64>, // time end, used when `steps` is absent
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

/// Reporting options for the console output
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_every")]
    pub every: u64, // report every n-th step
    #[serde(default)]
    pub precision: Option<usize>, // digits after the decimal point
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            every: default_every(),
            precision: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 2], // Initial position
    pub v: [f64; 2], // Initial velocity
    pub m: f64,      // Mass of the body
    #[serde(default)]
    pub label: String, // Display label, e.g. an image file name
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub output: OutputConfig, // Reporting options
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
