//! Simulation configuration.
//!
//! One immutable value constructed at startup carries every constant
//! the kernel needs; nothing is read from ambient global state.

use serde::{Deserialize, Serialize};

use crate::forces::{G, SOFTENING};

/// Constants for one simulation run.
///
/// Units are whatever the caller picks, as long as positions, masses,
/// and `gravitational_constant` are consistent with each other. The
/// defaults use simulation units with G = 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Gravitational constant
    pub gravitational_constant: f64,
    /// Softening length added (squared) to the force denominator to
    /// keep close encounters finite
    pub softening: f64,
    /// Maximum number of positions retained per body trail
    pub trail_capacity: usize,
    /// A trail stores one position every `trail_stride` integration
    /// calls
    pub trail_stride: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            softening: SOFTENING,
            trail_capacity: 256,
            trail_stride: 4,
        }
    }
}
