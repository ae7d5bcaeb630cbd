//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - number of steps to run,
//! - gravitational constant `G`

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps: u64, // number of steps
    pub G: f64, // gravitational constant
}

impl Parameters {
    /// Total simulated time covered by `steps` steps of `dt`
    pub fn duration(&self) -> f64 {
        self.dt * self.steps as f64
    }
}
