use std::time::Instant;

use tracing::info;

use crate::error::SimError;
use crate::simulation::integrator::step;
use crate::simulation::params::{DAY, G};
use crate::simulation::states::{Body, NVec2};

/// Deterministic ring of `n` equal-mass bodies, no rand needed
fn ring(n: usize) -> Result<Vec<Body>, SimError> {
    (0..n)
        .map(|i| {
            let phase = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = 1.0e11 * (1.0 + 0.1 * (i as f64 * 0.37).sin());
            let x = NVec2::new(radius * phase.cos(), radius * phase.sin());
            let v = NVec2::new(-phase.sin(), phase.cos()) * 1.0e3;
            Body::with_velocity(x, v, 1.0e24)
        })
        .collect()
}

/// Time `step` for growing body counts and log the per-step cost
pub fn bench_step() -> Result<(), SimError> {
    let ns = [50, 100, 200, 400, 800];
    let iters = 20;

    for n in ns {
        let mut bodies = ring(n)?;

        // Warm up
        step(&mut bodies, DAY, G)?;

        let t0 = Instant::now();
        for _ in 0..iters {
            step(&mut bodies, DAY, G)?;
        }
        let per_step = t0.elapsed().as_secs_f64() / iters as f64;

        info!("N = {n:4}, step = {per_step:10.6} s, pair evals/s = {:.3e}", (n * (n - 1)) as f64 / per_step);
    }

    Ok(())
}
