//! Body state and per-body operations.

use nalgebra::{Point3, Vector3};

use crate::error::SimError;
use crate::trail::Trail;

/// Identity of a body, assigned at creation.
///
/// Used for display and debugging only; the physics identifies bodies
/// by their index in the driver's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// One simulated point mass.
///
/// State is mutated only through the explicit operations: the updater
/// drives [`reset_force`](Body::reset_force) /
/// [`add_force`](Body::add_force) / [`integrate`](Body::integrate) each
/// tick, and [`absorb`](Body::absorb) applies a collision merge. Mass
/// is strictly positive at all times; construction and merging reject
/// anything else.
///
/// # Examples
///
/// ```
/// use pointmass::body::{Body, BodyId};
/// use nalgebra::{Point3, Vector3};
///
/// let body = Body::new(
///     BodyId(0),
///     0,
///     1.0,
///     Point3::new(1.0, 0.0, 0.0),
///     Vector3::new(0.0, 0.5, 0.0),
/// )
/// .unwrap();
///
/// assert_eq!(body.mass(), 1.0);
/// assert_eq!(body.force(), Vector3::zeros());
/// ```
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    generation: u32,
    position: Point3<f64>,
    velocity: Vector3<f64>,
    /// Net force accumulated for the current step only
    force: Vector3<f64>,
    mass: f64,
    trail: Option<Trail>,
}

impl Body {
    /// Creates a body at rest force-wise, with no trail attached.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonPositiveMass`] if `mass <= 0`, rather
    /// than letting a later force evaluation divide by it.
    pub fn new(
        id: BodyId,
        generation: u32,
        mass: f64,
        position: Point3<f64>,
        velocity: Vector3<f64>,
    ) -> Result<Self, SimError> {
        if mass <= 0.0 {
            return Err(SimError::NonPositiveMass(mass));
        }
        Ok(Self {
            id,
            generation,
            position,
            velocity,
            force: Vector3::zeros(),
            mass,
            trail: None,
        })
    }

    /// Attaches a position trail with the given capacity and sampling
    /// stride.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointmass::body::{Body, BodyId};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let body = Body::new(BodyId(0), 0, 1.0, Point3::origin(), Vector3::zeros())
    ///     .unwrap()
    ///     .with_trail(128, 4);
    ///
    /// assert!(body.trail().is_some());
    /// ```
    pub fn with_trail(mut self, capacity: usize, stride: u32) -> Self {
        self.trail = Some(Trail::new(capacity, stride));
        self
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Net force from the most recent accumulation pass.
    pub fn force(&self) -> Vector3<f64> {
        self.force
    }

    /// Position trail, if one is attached.
    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    /// Zeroes the force accumulator.
    ///
    /// Must run before each accumulation pass; the accumulator never
    /// carries over between steps.
    pub fn reset_force(&mut self) {
        self.force = Vector3::zeros();
    }

    /// Adds a force contribution to the accumulator.
    pub fn add_force(&mut self, force: Vector3<f64>) {
        self.force += force;
    }

    /// Advances velocity and position by one time step using the
    /// accumulated force (semi-implicit Euler).
    ///
    /// Velocity is updated first and the new velocity moves the
    /// position. If a trail is attached, the pre-drift position is
    /// offered to it between the two updates.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += self.force * (dt / self.mass);
        if let Some(trail) = &mut self.trail {
            trail.record(self.position);
        }
        self.position += self.velocity * dt;
    }

    /// Merges `other` into this body as a fully inelastic collision.
    ///
    /// Mass is summed and the velocities are summed directly. The
    /// direct vector sum (rather than a momentum-conserving weighted
    /// average) is the fixed reference behavior of this kernel;
    /// changing it would change simulation output. Position is
    /// unaffected. Removing `other` from the collection is the
    /// driver's job.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonPositiveMass`] if `other` carries a
    /// non-positive mass.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointmass::body::{Body, BodyId};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let mut a = Body::new(BodyId(0), 0, 2.0, Point3::origin(), Vector3::new(1.0, 0.0, 0.0))
    ///     .unwrap();
    /// let b = Body::new(BodyId(1), 0, 3.0, Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0))
    ///     .unwrap();
    ///
    /// a.absorb(&b).unwrap();
    ///
    /// assert_eq!(a.mass(), 5.0);
    /// assert_eq!(a.velocity(), Vector3::new(1.0, 2.0, 0.0));
    /// ```
    pub fn absorb(&mut self, other: &Body) -> Result<(), SimError> {
        if other.mass <= 0.0 {
            return Err(SimError::NonPositiveMass(other.mass));
        }
        self.mass += other.mass;
        self.velocity += other.velocity;
        Ok(())
    }

    /// Euclidean distance to another body.
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
