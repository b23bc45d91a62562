//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – update order and singularity policy
//! - [`ParametersConfig`] – time step, gravitational constant, run length
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   order: "sequential"     # or "synchronized"
//!   singularity: "fail"     # or "zero_force"
//!
//! parameters:
//!   G: 6.674258e-11         # gravitational constant
//!   dt: 86400.0             # fixed step size, s
//!   steps: 365              # ticks to run
//!
//! bodies:
//!   - name: "Sun"
//!     x: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     anchor: true
//!   - name: "Earth"
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//! ```
//!
//! Every `engine` and `parameters` key is optional and falls back to the
//! kernel defaults. The scenario builder maps this into runtime types.

use serde::Deserialize;

use crate::simulation::engine::{SingularityPolicy, UpdateOrder};

/// Algorithm choices
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub order: UpdateOrder, // sequential (reference) or synchronized
    pub singularity: SingularityPolicy, // fail or zero_force on coincident bodies
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub G: Option<f64>, // gravitational constant
    pub dt: Option<f64>, // time step size, s
    pub steps: Option<u64>, // number of ticks
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: Vec<f64>, // initial position, m
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, m/s, zero when absent
    pub m: f64, // mass, kg
    #[serde(default)]
    pub anchor: bool, // distance to this body is tracked by the others
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scenario_uses_defaults() {
        let yaml = "bodies:\n  - x: [1.0, 2.0]\n    m: 3.0\n";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.engine.order, UpdateOrder::Sequential);
        assert_eq!(cfg.engine.singularity, SingularityPolicy::Fail);
        assert!(cfg.parameters.dt.is_none());
        assert_eq!(cfg.bodies.len(), 1);
        assert!(cfg.bodies[0].v.is_none());
        assert!(!cfg.bodies[0].anchor);
    }

    #[test]
    fn engine_options_parse() {
        let yaml = "\
engine:
  order: synchronized
  singularity: zero_force
parameters:
  G: 1.0
  dt: 0.5
bodies: []
";
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.engine.order, UpdateOrder::Synchronized);
        assert_eq!(cfg.engine.singularity, SingularityPolicy::ZeroForce);
        assert_eq!(cfg.parameters.G, Some(1.0));
        assert_eq!(cfg.parameters.dt, Some(0.5));
        assert!(cfg.parameters.steps.is_none());
    }

    #[test]
    fn unknown_order_is_rejected() {
        let yaml = "engine:\n  order: leapfrog\nbodies: []\n";
        assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
    }
}
