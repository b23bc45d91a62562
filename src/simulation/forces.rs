//! Newtonian force law for the n-body kernel
//!
//! One pair at a time, no softening: coincident bodies are reported as a
//! singular configuration instead of being smoothed away

use crate::error::SimError;
use crate::simulation::states::{Body, NVec2};

/// Force on one body from another, plus the separation it was computed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // N, pointing from the attracted body toward the source
    pub distance: f64, // m
}

/// Gravitational pull exerted on a body at `xa` (mass `ma`) by a body at `xb`
/// (mass `mb`)
///
/// Returns `None` when the bodies coincide, or are so close that the
/// magnitude is no longer finite
pub fn attraction(xa: NVec2, ma: f64, xb: NVec2, mb: f64, g: f64) -> Option<Attraction> {
    // Displacement from a to b; a is pulled along +d
    let dx = xb.x - xa.x;
    let dy = xb.y - xa.y;
    let distance = (dx.powi(2) + dy.powi(2)).sqrt();
    if distance == 0.0 {
        return None;
    }

    // |F| = G * ma * mb / r^2
    let magnitude = g * ma * mb / distance.powi(2);
    if !magnitude.is_finite() {
        return None;
    }

    // Direction through the angle of d, not a normalized d: axis-aligned
    // configurations must give exactly the same components as the reference
    let theta = dy.atan2(dx);
    let force = NVec2::new(theta.cos() * magnitude, theta.sin() * magnitude);

    Some(Attraction { force, distance })
}

/// Separation between two positions, computed the same way as in [`attraction`]
pub(crate) fn separation(xa: NVec2, xb: NVec2) -> f64 {
    let dx = xb.x - xa.x;
    let dy = xb.y - xa.y;
    (dx.powi(2) + dy.powi(2)).sqrt()
}

/// Gravitational force vector exerted by `b` on `a`
///
/// If `b` is an anchor, `a.distance_to_anchor` is updated to the current
/// separation, even when the force itself turns out to be singular.
pub fn pairwise_force(a: &mut Body, b: &Body, g: f64) -> Result<NVec2, SimError> {
    if b.is_anchor() {
        a.record_distance_to_anchor(separation(a.position(), b.position()));
    }

    attraction(a.position(), a.mass(), b.position(), b.mass(), g)
        .map(|pull| pull.force)
        .ok_or(SimError::SingularConfiguration {
            position: a.position(),
            pair: None,
        })
}
