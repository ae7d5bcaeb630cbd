//! Core state types for the planet simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   a point mass using `NVec2` position and velocity
//! - `System` the ordered list of bodies and the elapsed simulation time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub label: String, // display name, e.g. an image asset
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            v,
            m,
            label: label.into(),
        }
    }

    /// Momentum `m * v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Kinetic energy `1/2 m |v|^2`
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, order only matters for reporting
    pub t: f64, // elapsed time
}

impl System {
    /// Bodies at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sum of `m * v` over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    /// Sum of kinetic energies over all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
