//! Conserved quantities and orbit telemetry computed from a body slice.
//!
//! None of this feeds back into the integration; drivers and tests use it to
//! watch drift over long runs.

use super::forces::separation;
use super::states::{Body, NVec2};

/// Sum of 1/2 m |v|^2
pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity().norm_squared())
        .sum()
}

/// Sum over unordered pairs of -G mi mj / rij. Coincident pairs are skipped.
pub fn potential_energy(bodies: &[Body], g: f64) -> f64 {
    let mut total = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = separation(bi.position(), bj.position());
            if r > 0.0 {
                total -= g * bi.mass() * bj.mass() / r;
            }
        }
    }
    total
}

pub fn total_energy(bodies: &[Body], g: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g)
}

/// Sum of m v
pub fn total_momentum(bodies: &[Body]) -> NVec2 {
    bodies
        .iter()
        .fold(NVec2::zeros(), |p, b| p + b.velocity() * b.mass())
}

/// Mass-weighted mean position, `None` for an empty slice
pub fn center_of_mass(bodies: &[Body]) -> Option<NVec2> {
    let total_mass: f64 = bodies.iter().map(Body::mass).sum();
    if bodies.is_empty() || total_mass <= 0.0 {
        return None;
    }
    let weighted = bodies
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.position() * b.mass());
    Some(weighted / total_mass)
}

/// Running min/max of a body's distance to its anchor, fed once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceEnvelope {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub samples: usize,
}

impl DistanceEnvelope {
    /// Record the body's current `distance_to_anchor`, if it has one
    pub fn observe(&mut self, body: &Body) {
        if let Some(d) = body.distance_to_anchor() {
            self.min = Some(self.min.map_or(d, |m| m.min(d)));
            self.max = Some(self.max.map_or(d, |m| m.max(d)));
            self.samples += 1;
        }
    }

    /// max / min, `None` until something was observed
    pub fn ratio(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) if lo > 0.0 => Some(hi / lo),
            _ => None,
        }
    }
}
