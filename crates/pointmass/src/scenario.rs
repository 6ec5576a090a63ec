//! Deterministic initial conditions.
//!
//! Builders for driver-owned body collections. Everything random is
//! seeded, so the same seed reproduces the same collection exactly.

use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId};
use crate::config::SimConfig;
use crate::error::SimError;

/// Two equal masses at rest, placed symmetrically about the origin on
/// the x-axis, `separation` apart.
///
/// The classic head-on collapse case: both bodies accelerate toward
/// each other with mirror-image displacements.
///
/// # Errors
///
/// Returns [`SimError::NonPositiveMass`] if `mass <= 0`.
pub fn symmetric_pair(mass: f64, separation: f64) -> Result<Vec<Body>, SimError> {
    let half = separation / 2.0;
    Ok(vec![
        Body::new(
            BodyId(0),
            0,
            mass,
            Point3::new(-half, 0.0, 0.0),
            Vector3::zeros(),
        )?,
        Body::new(
            BodyId(1),
            0,
            mass,
            Point3::new(half, 0.0, 0.0),
            Vector3::zeros(),
        )?,
    ])
}

/// A seeded cloud of `n` bodies inside a sphere of the given radius,
/// with log-uniform masses, small random velocities, and trails
/// attached per the configuration.
///
/// Bodies get sequential ids and generation 0.
///
/// # Examples
///
/// ```
/// use pointmass::config::SimConfig;
/// use pointmass::scenario::random_cloud;
///
/// let config = SimConfig::default();
/// let cloud = random_cloud(64, 10.0, 42, &config).unwrap();
///
/// assert_eq!(cloud.len(), 64);
/// assert!(cloud.iter().all(|b| b.mass() > 0.0));
/// ```
pub fn random_cloud(
    n: usize,
    radius: f64,
    seed: u64,
    config: &SimConfig,
) -> Result<Vec<Body>, SimError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        // Uniform within the sphere: cube-root radial distribution
        let r = radius * rng.random::<f64>().cbrt();
        let position = Point3::origin() + unit_direction(&mut rng) * r;

        let speed = rng.random_range(0.0..0.1) * radius.max(1.0);
        let velocity = unit_direction(&mut rng) * speed;

        // Log-uniform over two decades
        let mass = 10.0_f64.powf(rng.random_range(-1.0..1.0));

        let body = Body::new(BodyId(i as u32), 0, mass, position, velocity)?
            .with_trail(config.trail_capacity, config.trail_stride);
        bodies.push(body);
    }

    Ok(bodies)
}

/// Uniformly distributed direction on the unit sphere.
fn unit_direction(rng: &mut ChaChaRng) -> Vector3<f64> {
    let theta = rng.random_range(0.0..std::f64::consts::TAU);
    let phi = rng.random_range(-1.0..1.0_f64).acos();

    Vector3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}
