//! Error type for the simulation kernel.

use std::fmt;

use crate::simulation::states::NVec2;

/// Errors raised while building bodies or advancing the system.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Mass must be finite and strictly positive.
    InvalidMass { mass: f64 },
    /// Two bodies are (numerically) at the same point, so the force is undefined.
    /// `pair` holds the body indices when raised from a step.
    SingularConfiguration {
        position: NVec2,
        pair: Option<(usize, usize)>,
    },
    /// A state vector is or would become NaN/Infinity.
    NonFiniteState { index: Option<usize> },
    /// Malformed scenario values.
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { mass } => {
                write!(f, "Invalid mass {}: mass must be finite and greater than zero", mass)
            }
            SimError::SingularConfiguration { position, pair: Some((a, b)) } => write!(
                f,
                "Bodies {} and {} coincide at ({:e}, {:e}); gravitational force is undefined",
                a, b, position.x, position.y
            ),
            SimError::SingularConfiguration { position, pair: None } => write!(
                f,
                "Bodies coincide at ({:e}, {:e}); gravitational force is undefined",
                position.x, position.y
            ),
            SimError::NonFiniteState { index: Some(i) } => {
                write!(f, "Body {} would reach a non-finite position or velocity", i)
            }
            SimError::NonFiniteState { index: None } => {
                write!(f, "Position and velocity must be finite")
            }
            SimError::InvalidConfig(msg) => write!(f, "Invalid scenario configuration: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}
