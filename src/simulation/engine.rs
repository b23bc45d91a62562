//! High-level runtime engine settings
//!
//! Selects the update order and the policy for coincident bodies
//! used when advancing a `System`

use serde::Deserialize;

/// In which order force reads and state writes happen within one step
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Each body sums its force and moves immediately, so later bodies see the
    /// already advanced positions of earlier ones in the same tick.
    #[default]
    #[serde(rename = "sequential")]
    Sequential,

    /// Every force sum reads the positions from the start of the tick; all
    /// writes are applied afterwards.
    #[serde(rename = "synchronized")]
    Synchronized,
}

/// What a step does when two distinct bodies share a position
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SingularityPolicy {
    /// Abort the step with `SimError::SingularConfiguration`
    #[default]
    #[serde(rename = "fail")]
    Fail,

    /// The pair exerts no force on each other for this tick
    #[serde(rename = "zero_force")]
    ZeroForce,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    pub order: UpdateOrder,
    pub singularity: SingularityPolicy,
}
