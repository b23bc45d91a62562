//! Core state types for the N-body simulation.
//!
//! - `Body`   one point mass with its trajectory history
//! - `System` the driver-side collection plus elapsed time `t` and tick count
//!
//! The integrator never stores anything itself; every mutable value lives here.

use nalgebra::Vector2;

use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::integrator::step_with;
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: NVec2, // m
    velocity: NVec2, // m/s
    mass: f64, // kg, fixed at construction
    is_anchor: bool,
    distance_to_anchor: Option<f64>, // m, last value seen during force accumulation
    trajectory: Vec<NVec2>, // positions after each step, oldest first
    name: Option<String>,
}

impl Body {
    /// Body at rest at `position`.
    pub fn new(position: NVec2, mass: f64) -> Result<Self, SimError> {
        Self::with_velocity(position, NVec2::zeros(), mass)
    }

    /// Body with an initial velocity. Rejects non-positive or non-finite mass
    /// and non-finite vectors.
    pub fn with_velocity(position: NVec2, velocity: NVec2, mass: f64) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass { mass });
        }
        if !is_finite(&position) || !is_finite(&velocity) {
            return Err(SimError::NonFiniteState { index: None });
        }

        Ok(Self {
            position,
            velocity,
            mass,
            is_anchor: false,
            distance_to_anchor: None,
            trajectory: Vec::new(),
            name: None,
        })
    }

    /// Mark this body as the anchor others measure their distance to
    pub fn anchor(mut self) -> Self {
        self.is_anchor = true;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_anchor(&self) -> bool {
        self.is_anchor
    }

    pub fn distance_to_anchor(&self) -> Option<f64> {
        self.distance_to_anchor
    }

    pub fn trajectory(&self) -> &[NVec2] {
        &self.trajectory
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.velocity = velocity;
    }

    pub fn set_anchor(&mut self, is_anchor: bool) {
        self.is_anchor = is_anchor;
    }

    /// Drop the whole history. Driver-side only, the integrator never shrinks it.
    pub fn clear_trajectory(&mut self) {
        self.trajectory.clear();
    }

    /// Keep only the newest `max_len` points.
    pub fn trim_trajectory(&mut self, max_len: usize) {
        let len = self.trajectory.len();
        if len > max_len {
            self.trajectory.drain(..len - max_len);
        }
    }

    pub(crate) fn record_distance_to_anchor(&mut self, distance: f64) {
        self.distance_to_anchor = Some(distance);
    }

    /// Apply one integrated state: v, x, anchor distance, then the trail point.
    pub(crate) fn commit(&mut self, position: NVec2, velocity: NVec2, distance_to_anchor: Option<f64>) {
        self.velocity = velocity;
        self.position = position;
        self.distance_to_anchor = distance_to_anchor;
        self.trajectory.push(position);
    }
}

pub(crate) fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // caller order is iteration order
    pub t: f64, // elapsed simulated time, s
    pub steps: u64, // successful ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }

    /// One tick. Time and counter only move when the step succeeds.
    pub fn advance(&mut self, params: &Parameters, engine: &Engine) -> Result<(), SimError> {
        step_with(&mut self.bodies, params, engine)?;
        self.t += params.dt;
        self.steps += 1;
        Ok(())
    }

    /// `n` ticks, stopping at the first failure.
    pub fn run(&mut self, n: u64, params: &Parameters, engine: &Engine) -> Result<(), SimError> {
        for _ in 0..n {
            self.advance(params, engine)?;
        }
        Ok(())
    }

    /// First anchor in iteration order
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_anchor())
    }
}
