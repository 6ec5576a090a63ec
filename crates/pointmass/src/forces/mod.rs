//! Force models for the N-body kernel.
//!
//! Provides the [`ForceModel`] trait and the direct pairwise gravity
//! implementation. The trait is the seam for alternative force
//! evaluation strategies (tree codes, parallel evaluation); any
//! implementation must produce the same per-body net force from the
//! same start-of-tick snapshot.

use nalgebra::Vector3;

use crate::body::Body;

pub mod gravity;


pub use gravity::DirectGravity;

/// Default gravitational constant, simulation units (G = 1).
///
/// The kernel is unit-agnostic: positions, masses, and G only need to
/// be consistent with each other.
pub const G: f64 = 1.0;

/// Default softening length.
pub const SOFTENING: f64 = 0.01;

/// A source of force on bodies in an N-body system.
///
/// # Examples
///
/// ```
/// use pointmass::body::{Body, BodyId};
/// use pointmass::forces::{DirectGravity, ForceModel};
/// use nalgebra::{Point3, Vector3};
///
/// let bodies = vec![
///     Body::new(BodyId(0), 0, 1.0, Point3::new(-1.0, 0.0, 0.0), Vector3::zeros()).unwrap(),
///     Body::new(BodyId(1), 0, 1.0, Point3::new(1.0, 0.0, 0.0), Vector3::zeros()).unwrap(),
/// ];
///
/// let gravity = DirectGravity::new();
/// let force = gravity.force(0, &bodies);
///
/// // Pulled toward the body at +x
/// assert!(force.x > 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Computes the net force on the body at index `idx` from the rest
    /// of the collection.
    ///
    /// Reads positions and masses only; it must see the values as they
    /// stood at the start of the tick, never a partially integrated
    /// state.
    fn force(&self, idx: usize, bodies: &[Body]) -> Vector3<f64>;

    /// Potential energy contribution of this force over the whole
    /// collection.
    ///
    /// Defaults to 0.0 for forces that do not define one.
    fn potential_energy(&self, _bodies: &[Body]) -> f64 {
        0.0
    }
}
