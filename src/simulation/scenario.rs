//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)

use tracing::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// Everything a driver needs to run a simulation
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Body`, rejecting bad values early
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameters, each key falls back to the kernel default
        let defaults = Parameters::default();
        let parameters = Parameters {
            dt: cfg.parameters.dt.unwrap_or(defaults.dt),
            G: cfg.parameters.G.unwrap_or(defaults.G),
            steps: cfg.parameters.steps.unwrap_or(defaults.steps),
        };
        if !(parameters.dt.is_finite() && parameters.dt > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "dt must be finite and positive, got {}",
                parameters.dt
            )));
        }
        if !parameters.G.is_finite() {
            return Err(SimError::InvalidConfig(format!("G must be finite, got {}", parameters.G)));
        }

        let engine = Engine {
            order: cfg.engine.order,
            singularity: cfg.engine.singularity,
        };

        debug!(bodies = bodies.len(), dt = parameters.dt, steps = parameters.steps, "scenario built");

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
        })
    }

    /// Sun, Earth, Mars, Mercury and Venus on the x axis with tangential
    /// velocities, the Sun as anchor. Default parameters (one-day step, G).
    pub fn inner_solar_system() -> Result<Self, SimError> {
        let sun = Body::new(NVec2::zeros(), 1.98892e30)?.anchor().named("Sun");
        let earth = planet("Earth", -1.0, 29.783e3, 5.9742e24)?;
        let mars = planet("Mars", -1.524, 24.077e3, 6.39e23)?;
        let mercury = planet("Mercury", 0.387, -47.4e3, 3.30e23)?;
        let venus = planet("Venus", 0.723, -35.02e3, 4.8685e24)?;

        Ok(Self {
            engine: Engine::default(),
            parameters: Parameters::default(),
            system: System::new(vec![sun, earth, mars, mercury, venus]),
        })
    }
}

/// Planet on the x axis at `x_au`, moving along y at `vy` m/s
fn planet(name: &str, x_au: f64, vy: f64, mass: f64) -> Result<Body, SimError> {
    Ok(Body::with_velocity(NVec2::new(x_au * AU, 0.0), NVec2::new(0.0, vy), mass)?.named(name))
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let x = vec2(index, "x", &bc.x)?;
    let v = match &bc.v {
        Some(v) => vec2(index, "v", v)?,
        None => NVec2::zeros(),
    };

    let mut body = Body::with_velocity(x, v, bc.m)?;
    body.set_anchor(bc.anchor);
    if let Some(name) = &bc.name {
        body = body.named(name.as_str());
    }
    Ok(body)
}

fn vec2(index: usize, field: &str, values: &[f64]) -> Result<NVec2, SimError> {
    match values {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidConfig(format!(
            "body {}: `{}` needs 2 components, got {}",
            index,
            field,
            values.len()
        ))),
    }
}
