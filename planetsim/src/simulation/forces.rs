//! Force contributors for the planet engine
//!
//! Defines the pairwise Newtonian force model (distance, magnitude,
//! per-axis components) and the [`ForceLaw`] trait the integrator uses
//! to fill a per-body net force buffer

use crate::simulation::states::{Body, System, NVec2};

/// Gravitational constant in SI units
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Coordinate axis of a 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component index into an `NVec2`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Euclidean distance between the positions of `a` and `b`
///
/// Zero when the two bodies coincide, which turns every force derived
/// from it into NaN/Inf. `Scenario` rejects such inputs up front.
pub fn distance(a: &Body, b: &Body) -> f64 {
    let dx = a.x.x - b.x.x;
    let dy = a.x.y - b.x.y;
    (dx * dx + dy * dy).sqrt()
}

/// Trait for force sources operating on [`System`]
/// Implementations write the net force on body `i` into `out[i]`
pub trait ForceLaw {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]);
}

/// Newtonian point-mass gravity, direct O(n^2) summation without softening
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G }
    }

    /// |F| = G * m_a * m_b / r^2, always non-negative
    pub fn force_magnitude(&self, a: &Body, b: &Body) -> f64 {
        let r = distance(a, b);
        self.G * a.m * b.m / (r * r)
    }

    /// Force on `a` from `b` along `axis`
    /// Positive when `b` lies in the positive axis direction from `a`
    pub fn force_component(&self, a: &Body, b: &Body, axis: Axis) -> f64 {
        let k = axis.index();
        let f = self.force_magnitude(a, b);
        let r = distance(a, b);
        f * (b.x[k] - a.x[k]) / r
    }

    /// Both components of the force on `a` from `b`
    pub fn force_vector(&self, a: &Body, b: &Body) -> NVec2 {
        NVec2::new(
            self.force_component(a, b, Axis::X),
            self.force_component(a, b, Axis::Y),
        )
    }

    /// Net force along `axis` on `bodies[i]` from every other body
    ///
    /// Bodies are excluded by index, so two distinct bodies that happen to
    /// share the same state still act on each other.
    pub fn net_force(&self, i: usize, bodies: &[Body], axis: Axis) -> f64 {
        let bi = &bodies[i];
        bodies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, bj)| self.force_component(bi, bj, axis))
            .sum()
    }

    /// Net force on `bodies[i]` along both axes
    pub fn net_force_vector(&self, i: usize, bodies: &[Body]) -> NVec2 {
        NVec2::new(
            self.net_force(i, bodies, Axis::X),
            self.net_force(i, bodies, Axis::Y),
        )
    }

    /// Gravitational potential energy -sum_{i<j} G m_i m_j / r_ij
    pub fn potential_energy(&self, sys: &System) -> f64 {
        let n = sys.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let bi = &sys.bodies[i];
                let bj = &sys.bodies[j];
                u -= self.G * bi.m * bj.m / distance(bi, bj);
            }
        }
        u
    }

    /// Kinetic plus potential energy of `sys`
    pub fn total_energy(&self, sys: &System) -> f64 {
        sys.kinetic_energy() + self.potential_energy(sys)
    }
}

impl ForceLaw for NewtonianGravity {
    fn accumulate(&self, sys: &System, out: &mut [NVec2]) {
        debug_assert_eq!(out.len(), sys.bodies.len());

        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // One net force per axis per body, all read from the same snapshot
        for (i, f) in out.iter_mut().enumerate().take(sys.bodies.len()) {
            *f = self.net_force_vector(i, &sys.bodies);
        }
    }
}
