//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the force law (`NewtonianGravity`)
//! - reporting options (`OutputConfig`)
//!
//! Initial conditions are validated here, so a `Scenario` that exists is
//! one the force model can evaluate without dividing by zero.

use log::{debug, info, warn};

use crate::configuration::config::{BodyConfig, OutputConfig, ParametersConfig, ScenarioConfig};
use crate::error::ScenarioError;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Validated runtime bundle consumed by the [`Engine`](crate::Engine)
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
    pub output: OutputConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
            label: bc.label.clone(),
        }).collect();

        let parameters = resolve_parameters(&cfg.parameters)?;

        let mut scenario = Self::from_bodies(bodies, parameters)?;
        scenario.output = cfg.output;
        Ok(scenario)
    }

    /// Bundle already-built bodies and parameters, validating both
    pub fn from_bodies(bodies: Vec<Body>, parameters: Parameters) -> Result<Self, ScenarioError> {
        validate_parameters(&parameters)?;
        validate_bodies(&bodies)?;

        info!(
            "scenario: {} bodies, dt = {:e}, {} steps ({:e} s)",
            bodies.len(),
            parameters.dt,
            parameters.steps,
            parameters.duration()
        );

        let gravity = NewtonianGravity::new(parameters.G);

        Ok(Self {
            parameters,
            system: System::new(bodies),
            gravity,
            output: OutputConfig::default(),
        })
    }
}

/// Upper bound on the step count derived from `t_end`
pub const MAX_STEPS: u64 = 1 << 32;

/// Turn the YAML parameters into runtime `Parameters`
///
/// `steps` wins over `t_end`, but a given `t_end` must still be valid.
fn resolve_parameters(p_cfg: &ParametersConfig) -> Result<Parameters, ScenarioError> {
    let dt = p_cfg.dt;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ScenarioError::InvalidTimeStep(dt));
    }

    if let Some(t_end) = p_cfg.t_end {
        if !(t_end.is_finite() && t_end >= 0.0) {
            return Err(ScenarioError::InvalidDuration(t_end));
        }
    }

    let steps = match (p_cfg.steps, p_cfg.t_end) {
        (Some(steps), Some(t_end)) => {
            warn!("both `steps` ({}) and `t_end` ({}) given, using `steps`", steps, t_end);
            steps
        }
        (Some(steps), None) => steps,
        (None, Some(t_end)) => steps_until(t_end, dt)?,
        (None, None) => return Err(ScenarioError::MissingDuration),
    };

    Ok(Parameters {
        dt,
        steps,
        G: p_cfg.G,
    })
}

/// Number of steps taken while elapsed time is below `t_end`
///
/// Time is accumulated as `t += dt`, exactly as the integrator advances
/// `System::t`, so rounding in the sum decides the last step.
fn steps_until(t_end: f64, dt: f64) -> Result<u64, ScenarioError> {
    if t_end / dt > MAX_STEPS as f64 {
        return Err(ScenarioError::InvalidDuration(t_end));
    }

    let mut t = 0.0;
    let mut steps = 0;
    while t < t_end {
        t += dt;
        steps += 1;
    }
    Ok(steps)
}

fn validate_parameters(p: &Parameters) -> Result<(), ScenarioError> {
    if !(p.dt.is_finite() && p.dt > 0.0) {
        return Err(ScenarioError::InvalidTimeStep(p.dt));
    }
    if !(p.G.is_finite() && p.G >= 0.0) {
        return Err(ScenarioError::InvalidGravitationalConstant(p.G));
    }
    Ok(())
}

fn validate_bodies(bodies: &[Body]) -> Result<(), ScenarioError> {
    for (index, b) in bodies.iter().enumerate() {
        if !(b.m.is_finite() && b.m > 0.0) {
            return Err(ScenarioError::NonPositiveMass { index, mass: b.m });
        }
        if !(b.x.iter().all(|c| c.is_finite()) && b.v.iter().all(|c| c.is_finite())) {
            return Err(ScenarioError::NonFiniteState { index });
        }
    }

    // Exact coincidence only
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if bodies[i].x == bodies[j].x {
                return Err(ScenarioError::CoincidentBodies { first: i, second: j });
            }
        }
    }

    debug!("validated {} bodies", bodies.len());
    Ok(())
}
