//! Direct pairwise Newtonian gravity (O(n²)).

use nalgebra::Vector3;

use crate::body::Body;
use crate::config::SimConfig;
use crate::forces::{ForceModel, G, SOFTENING};

/// Direct O(n²) gravitational force computation with softening.
///
/// The force magnitude between two bodies is
/// `G · m_a · m_b / (d² + ε²)` where `ε` is the softening length,
/// applied along the unit displacement from one body to the other.
/// Softening keeps close encounters finite; it slightly weakens the
/// force at separations comparable to `ε` and is negligible beyond.
///
/// Simple and exact in its summation, but every body considers every
/// other: callers choosing large collections should expect quadratic
/// cost per step.
///
/// # Examples
///
/// ```
/// use pointmass::body::{Body, BodyId};
/// use pointmass::forces::DirectGravity;
/// use nalgebra::{Point3, Vector3};
///
/// let a = Body::new(BodyId(0), 0, 1.0, Point3::new(-1.0, 0.0, 0.0), Vector3::zeros()).unwrap();
/// let b = Body::new(BodyId(1), 0, 1.0, Point3::new(1.0, 0.0, 0.0), Vector3::zeros()).unwrap();
///
/// // Idealized constants: G = 1, no softening
/// let gravity = DirectGravity::with_constants(1.0, 0.0);
/// let f = gravity.pair_force(&a, &b);
///
/// // |F| = 1·1·1 / 2² = 0.25, along +x (toward b)
/// assert!((f.x - 0.25).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct DirectGravity {
    /// Gravitational constant
    pub g: f64,
    /// Softening length
    pub softening: f64,
}

impl DirectGravity {
    /// Creates the model with the default simulation-unit constants.
    pub fn new() -> Self {
        Self {
            g: G,
            softening: SOFTENING,
        }
    }

    /// Creates the model with explicit constants.
    pub fn with_constants(g: f64, softening: f64) -> Self {
        Self { g, softening }
    }

    /// Creates the model from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            g: config.gravitational_constant,
            softening: config.softening,
        }
    }

    /// Force exerted by `b` on `a`: attractive, pointing from `a`
    /// toward `b`.
    ///
    /// Pure function of the two bodies. Coincident positions yield the
    /// zero vector: the softened magnitude would stay finite there,
    /// but the direction is undefined, so the pair contributes
    /// nothing instead of a NaN.
    pub fn pair_force(&self, a: &Body, b: &Body) -> Vector3<f64> {
        let r = b.position() - a.position();
        let d2 = r.magnitude_squared();
        if d2 == 0.0 {
            return Vector3::zeros();
        }

        let d = d2.sqrt();
        let magnitude = self.g * a.mass() * b.mass() / (d2 + self.softening * self.softening);

        r * (magnitude / d)
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn force(&self, idx: usize, bodies: &[Body]) -> Vector3<f64> {
        let body = &bodies[idx];

        // In-order fold keeps the summation deterministic
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .map(|(_, other)| self.pair_force(body, other))
            .fold(Vector3::zeros(), |acc, f| acc + f)
    }

    fn potential_energy(&self, bodies: &[Body]) -> f64 {
        let eps2 = self.softening * self.softening;

        // Each pair counted once
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let d = ((b.position() - a.position()).magnitude_squared() + eps2).sqrt();
                    if d == 0.0 {
                        0.0
                    } else {
                        -self.g * a.mass() * b.mass() / d
                    }
                })
            })
            .sum()
    }
}
