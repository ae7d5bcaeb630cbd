use std::time::Instant;
use crate::simulation::states::{Body, System, NVec2};
use crate::simulation::params::Parameters;
use crate::simulation::forces::{ForceLaw, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (i_f * 0.37).sin() * 1.0e11 + i_f,
            (i_f * 0.13).cos() * 1.0e11,
        );

        bodies.push(Body::new(x, NVec2::zeros(), 1.0e24, format!("b{i}")));
    }

    System::new(bodies)
}

fn make_params() -> Parameters {
    Parameters {
        dt: 25_000.0,
        steps: 1,
        G: 6.67e-11,
    }
}

/// Time the direct-sum force sweep and a full integrator step for a range of n
/// Prints CSV so it can be pasted into a spreadsheet
pub fn bench_direct_sum() {
    println!("N,forces_ms,step_ms");

    for n in [5, 10, 50, 100, 200, 400, 800, 1600] {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 200 { 50 } else { 3 };

        let params = make_params();
        let gravity = NewtonianGravity::new(params.G);
        let mut sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.accumulate(&sys, &mut out);

        let t0 = Instant::now();
        for _ in 0..steps {
            gravity.accumulate(&sys, &mut out);
        }
        let ms_forces = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let t1 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &gravity, &params);
        }
        let ms_step = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_forces, ms_step);
    }
}
