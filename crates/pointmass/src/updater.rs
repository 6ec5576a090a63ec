//! Step orchestration across a body collection.

use nalgebra::Vector3;

use crate::body::Body;
use crate::forces::ForceModel;

/// Advances a body collection through time.
///
/// The collection is a live view owned by the external driver; an
/// updater mutates body state in place and never adds or removes
/// bodies.
pub trait Updater: Send + Sync {
    /// Advances every body by exactly one time step.
    ///
    /// # Arguments
    ///
    /// * `bodies` - The driver's collection, mutated in place
    /// * `dt` - Time step, must be positive
    /// * `force` - Force model evaluated against the start-of-tick
    ///   snapshot
    fn advance(&self, bodies: &mut [Body], dt: f64, force: &dyn ForceModel);

    /// Advances the collection by `n_steps` equal time steps.
    fn run(&self, bodies: &mut [Body], dt: f64, n_steps: usize, force: &dyn ForceModel) {
        for _ in 0..n_steps {
            self.advance(bodies, dt, force);
        }
    }
}

/// Brute-force updater: every body against every other, O(n²) force
/// evaluations per step.
///
/// One `advance` is an explicit two-phase protocol:
///
/// 1. Compute every body's net force from the positions and masses as
///    they stood at the start of the tick. No body state is mutated in
///    this phase, so force reads never observe a partially integrated
///    body. This is the single invariant a parallel force pass must
///    keep.
/// 2. For each body: reset the accumulator, deposit the net force, and
///    integrate (semi-implicit Euler, trail sampling included).
///
/// An empty collection is a no-op; a body with no peers accumulates
/// zero force and drifts at constant velocity.
///
/// # Examples
///
/// ```
/// use pointmass::body::{Body, BodyId};
/// use pointmass::forces::DirectGravity;
/// use pointmass::updater::{BruteForceUpdater, Updater};
/// use nalgebra::{Point3, Vector3};
///
/// let mut bodies = vec![
///     Body::new(BodyId(0), 0, 1.0, Point3::origin(), Vector3::new(1.0, 0.0, 0.0)).unwrap(),
/// ];
///
/// let updater = BruteForceUpdater;
/// updater.advance(&mut bodies, 0.5, &DirectGravity::new());
///
/// // Isolated body: zero force, constant-velocity drift
/// assert_eq!(bodies[0].position(), Point3::new(0.5, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceUpdater;

impl Updater for BruteForceUpdater {
    fn advance(&self, bodies: &mut [Body], dt: f64, force: &dyn ForceModel) {
        debug_assert!(dt > 0.0, "time step must be positive, got {dt}");

        // Phase one: net forces from the start-of-tick snapshot
        let forces: Vec<Vector3<f64>> = (0..bodies.len()).map(|i| force.force(i, bodies)).collect();

        // Phase two: deposit and integrate
        bodies.iter_mut().zip(forces).for_each(|(body, net)| {
            body.reset_force();
            body.add_force(net);
            body.integrate(dt);
        });
    }
}
