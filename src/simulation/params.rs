//! Physical parameters for the simulation
//!
//! `Parameters` holds the values every step needs:
//! - fixed time step `dt`,
//! - gravitational constant `G`,
//! - number of ticks the driver should run
//!
//! The constants below are defaults only; the integrator always takes them
//! as arguments.

/// Gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.674258e-11;

/// One day, s. Default time step.
pub const DAY: f64 = 3600.0 * 24.0;

/// Astronomical unit, m
pub const AU: f64 = 149.6e6 * 1000.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // time step
    pub G: f64, // gravitational constant
    pub steps: u64, // ticks per run
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: DAY,
            G,
            steps: 365, // one Earth year at the default step
        }
    }
}
