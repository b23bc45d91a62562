pub mod error;
pub mod simulation;
pub mod configuration;
pub mod io;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::{Parameters, AU, DAY, G};
pub use simulation::engine::{Engine, UpdateOrder, SingularityPolicy};
pub use simulation::forces::{attraction, pairwise_force, Attraction};
pub use simulation::integrator::{step, step_with};
pub use simulation::diagnostics::{center_of_mass, kinetic_energy, potential_energy, total_energy, total_momentum, DistanceEnvelope};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use io::csv::{write_trajectories, write_trajectories_file};

pub use benchmark::benchmark::bench_step;
