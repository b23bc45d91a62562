//! Fixed-step semi-implicit Euler integrator for the N-body system
//!
//! Direct O(n^2) force summation. Velocity is kicked by the net force first,
//! then the position drifts with the already updated velocity.

use tracing::{trace, warn};

use super::engine::{Engine, SingularityPolicy, UpdateOrder};
use super::forces::{attraction, separation};
use super::params::Parameters;
use super::states::{is_finite, Body, NVec2};
use crate::error::SimError;

/// Per-body result of the current step, held back until every body succeeded
struct Staged {
    position: NVec2,
    velocity: NVec2,
    distance_to_anchor: Option<f64>,
}

impl From<&Body> for Staged {
    fn from(b: &Body) -> Self {
        Self {
            position: b.position(),
            velocity: b.velocity(),
            distance_to_anchor: b.distance_to_anchor(),
        }
    }
}

/// Advance every body by one interval `dt` with gravitational constant `g`
///
/// Bodies are processed in slice order and each one moves right after its own
/// force sum, so body `k` sees bodies `0..k` at their new positions. A
/// coincident pair fails the step. On error no body is modified.
pub fn step(bodies: &mut [Body], dt: f64, g: f64) -> Result<(), SimError> {
    integrate(bodies, dt, g, &Engine::default())
}

/// [`step`] with the time step and `G` from `params` and the update order and
/// singularity policy from `engine`
pub fn step_with(bodies: &mut [Body], params: &Parameters, engine: &Engine) -> Result<(), SimError> {
    integrate(bodies, params.dt, params.G, engine)
}

fn integrate(bodies: &mut [Body], dt: f64, g: f64, engine: &Engine) -> Result<(), SimError> {
    let n = bodies.len();
    if n == 0 { // no bodies, nothing to do
        return Ok(());
    }
    trace!(bodies = n, dt, order = ?engine.order, "integrator step");

    // Working copy of the kinematic state; bodies stay untouched until commit
    let mut staged: Vec<Staged> = bodies.iter().map(Staged::from).collect();

    for i in 0..n {
        let xa = staged[i].position;
        let ma = bodies[i].mass();
        let mut total_force = NVec2::zeros();
        let mut distance_to_anchor = staged[i].distance_to_anchor;

        // Excluded by index, so two distinct bodies at the same point still meet
        for j in 0..n {
            if i == j {
                continue;
            }

            let other = &bodies[j];
            let xb = match engine.order {
                UpdateOrder::Sequential => staged[j].position, // already advanced if j < i
                UpdateOrder::Synchronized => other.position(), // start of the tick
            };

            if other.is_anchor() {
                distance_to_anchor = Some(separation(xa, xb));
            }

            match attraction(xa, ma, xb, other.mass(), g) {
                Some(pull) => total_force += pull.force,
                None => match engine.singularity {
                    SingularityPolicy::Fail => {
                        return Err(SimError::SingularConfiguration {
                            position: xa,
                            pair: Some((i, j)),
                        });
                    }
                    SingularityPolicy::ZeroForce => {
                        warn!(body = i, other = j, "coincident bodies, pair force treated as zero");
                    }
                },
            }
        }

        // v += F / m * dt, then x += v * dt
        let s = &mut staged[i];
        s.velocity += total_force / ma * dt;
        s.position += s.velocity * dt;
        s.distance_to_anchor = distance_to_anchor;

        if !is_finite(&s.velocity) || !is_finite(&s.position) {
            return Err(SimError::NonFiniteState { index: Some(i) });
        }
    }

    for (body, s) in bodies.iter_mut().zip(staged) {
        body.commit(s.position, s.velocity, s.distance_to_anchor);
    }

    Ok(())
}
