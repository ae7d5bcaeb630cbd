//! Fixed-step time integrator for the planet system
//!
//! Provides the per-body semi-implicit Euler update and the
//! whole-system step driven by a [`ForceLaw`] and `Parameters`

use super::states::{Body, System, NVec2};
use super::forces::ForceLaw;
use super::params::Parameters;

/// Advance one body by `dt` under the net force `(fx, fy)`
///
/// Velocity is updated first and the position step uses the new velocity.
pub fn step(body: &mut Body, dt: f64, fx: f64, fy: f64) {
    // a = F / m
    let ax = fx / body.m;
    let ay = fy / body.m;

    // v_n+1 = v_n + dt * a
    let vx = body.v.x + dt * ax;
    let vy = body.v.y + dt * ay;

    // x_n+1 = x_n + dt * v_n+1
    let px = body.x.x + dt * vx;
    let py = body.x.y + dt * vy;

    body.v = NVec2::new(vx, vy);
    body.x = NVec2::new(px, py);
}

/// Advance the whole system by one step of `params.dt`
///
/// Every net force is computed from the unmutated system before any body
/// moves; then each body is stepped and `sys.t` advances.
pub fn euler_integrator<F: ForceLaw>(sys: &mut System, forces: &F, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, only time moves
        sys.t += params.dt;
        return;
    }

    let dt = params.dt;

    // f[i] holds the net force on body i at t_n
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate(&*sys, &mut f);

    for (b, f) in sys.bodies.iter_mut().zip(f.iter()) {
        step(b, dt, f.x, f.y);
    }

    sys.t += dt;
}
