//! Brute-force Newtonian N-body simulation kernel
//!
//! Point masses under mutual gravitational attraction, advanced in
//! discrete time steps with semi-implicit Euler integration. The kernel
//! owns the physics only: body state, pairwise softened gravity, the
//! O(n²) step, stride-sampled position trails, and the inelastic merge
//! rule. Rendering, input, and ownership of the body collection belong
//! to the external driver.

pub mod body;
pub mod config;
pub mod error;
pub mod forces;
pub mod scenario;
pub mod trail;
pub mod updater;

#[cfg(test)]
mod body_test;

pub use body::{Body, BodyId};
pub use config::SimConfig;
pub use error::SimError;
pub use forces::{DirectGravity, ForceModel};
pub use trail::Trail;
pub use updater::{BruteForceUpdater, Updater};
