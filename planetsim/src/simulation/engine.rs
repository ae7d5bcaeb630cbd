//! Runtime driver for a `Scenario`
//!
//! Owns the scenario exclusively and advances it step by step, handing
//! each post-step state to an observer

use log::trace;

use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, System};

/// State of the system right after a step
#[derive(Debug, Clone, Copy)]
pub struct StepReport<'a> {
    pub step: u64, // 1-based index of the step just taken
    pub t: f64, // elapsed simulation time
    pub bodies: &'a [Body], // bodies in input order
}

#[derive(Debug, Clone)]
pub struct Engine {
    scenario: Scenario,
    steps_taken: u64,
}

impl Engine {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            steps_taken: 0,
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn system(&self) -> &System {
        &self.scenario.system
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Steps left before `parameters.steps` is reached
    pub fn steps_remaining(&self) -> u64 {
        self.scenario.parameters.steps.saturating_sub(self.steps_taken)
    }

    /// Advance one step and report the new state
    pub fn step(&mut self) -> StepReport<'_> {
        let Scenario {
            system,
            parameters,
            gravity,
            ..
        } = &mut self.scenario;

        euler_integrator(system, &*gravity, &*parameters);
        self.steps_taken += 1;
        trace!("step {} t = {:e}", self.steps_taken, system.t);

        StepReport {
            step: self.steps_taken,
            t: system.t,
            bodies: &system.bodies,
        }
    }

    /// Run the remaining steps, calling `observer` after each one
    pub fn run<F>(&mut self, mut observer: F)
    where
        F: FnMut(&StepReport<'_>),
    {
        while self.steps_remaining() > 0 {
            let report = self.step();
            observer(&report);
        }
    }

    /// Run the remaining steps, stopping early on the first observer error
    pub fn try_run<F, E>(&mut self, mut observer: F) -> Result<(), E>
    where
        F: FnMut(&StepReport<'_>) -> Result<(), E>,
    {
        while self.steps_remaining() > 0 {
            let report = self.step();
            observer(&report)?;
        }
        Ok(())
    }
}
