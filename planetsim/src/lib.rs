pub mod simulation;
pub mod configuration;
pub mod report;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{distance, Axis, ForceLaw, NewtonianGravity, GRAVITATIONAL_CONSTANT};
pub use simulation::integrator::{euler_integrator, step};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{Engine, StepReport};

pub use configuration::config::{ParametersConfig, OutputConfig, BodyConfig, ScenarioConfig};
pub use error::{ConfigError, ScenarioError};

pub use report::console::{run_console, ConsoleReporter};

pub use benchmark::benchmark::bench_direct_sum;
