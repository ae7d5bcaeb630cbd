//! Error types for planetsim.
//!
//! Loading a scenario file can fail with a [`ConfigError`]; turning a
//! loaded configuration into a runnable scenario can fail with a
//! [`ScenarioError`] when the initial conditions break a precondition of
//! the force model or integrator.

use std::fmt;

/// Errors that can occur while reading a scenario file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// The file is not a valid scenario document.
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read scenario file: {}", e),
            ConfigError::Yaml(e) => write!(f, "Failed to parse scenario: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

/// Invalid initial conditions, rejected before the first step.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// A body's mass is zero, negative or not finite.
    NonPositiveMass { index: usize, mass: f64 },
    /// A body's position or velocity has a NaN or infinite component.
    NonFiniteState { index: usize },
    /// Two distinct bodies start at exactly the same position.
    CoincidentBodies { first: usize, second: usize },
    /// The time step is zero, negative or not finite.
    InvalidTimeStep(f64),
    /// The end time is negative, not finite, or needs too many steps.
    InvalidDuration(f64),
    /// Neither a step count nor an end time was given.
    MissingDuration,
    /// The gravitational constant is negative or not finite.
    InvalidGravitationalConstant(f64),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::NonPositiveMass { index, mass } => {
                write!(f, "Body {} has non-positive mass {}", index, mass)
            }
            ScenarioError::NonFiniteState { index } => {
                write!(f, "Body {} has a non-finite position or velocity", index)
            }
            ScenarioError::CoincidentBodies { first, second } => {
                write!(f, "Bodies {} and {} start at the same position", first, second)
            }
            ScenarioError::InvalidTimeStep(dt) => {
                write!(f, "Time step must be finite and positive, got {}", dt)
            }
            ScenarioError::InvalidDuration(t_end) => {
                write!(f, "End time must be finite, non-negative and reachable in a bounded number of steps, got {}", t_end)
            }
            ScenarioError::MissingDuration => {
                write!(f, "Scenario needs either `steps` or `t_end`")
            }
            ScenarioError::InvalidGravitationalConstant(g) => {
                write!(f, "Gravitational constant must be finite and non-negative, got {}", g)
            }
        }
    }
}

impl std::error::Error for ScenarioError {}
