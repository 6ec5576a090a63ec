use nalgebra::{Point3, Vector3};

use crate::body::{Body, BodyId};
use crate::error::SimError;

fn body_at(id: u32, mass: f64, position: [f64; 3], velocity: [f64; 3]) -> Body {
    Body::new(
        BodyId(id),
        0,
        mass,
        Point3::new(position[0], position[1], position[2]),
        Vector3::new(velocity[0], velocity[1], velocity[2]),
    )
    .unwrap()
}

#[test]
fn test_new_sets_state() {
    let body = body_at(7, 2.5, [1.0, 2.0, 3.0], [0.1, 0.2, 0.3]);

    assert_eq!(body.id(), BodyId(7));
    assert_eq!(body.generation(), 0);
    assert_eq!(body.mass(), 2.5);
    assert_eq!(body.position(), Point3::new(1.0, 2.0, 3.0));
    assert_eq!(body.velocity(), Vector3::new(0.1, 0.2, 0.3));
    assert_eq!(body.force(), Vector3::zeros());
    assert!(body.trail().is_none());
}

#[test]
fn test_new_rejects_non_positive_mass() {
    let zero = Body::new(BodyId(0), 0, 0.0, Point3::origin(), Vector3::zeros());
    assert_eq!(zero.unwrap_err(), SimError::NonPositiveMass(0.0));

    let negative = Body::new(BodyId(0), 0, -1.0, Point3::origin(), Vector3::zeros());
    assert_eq!(negative.unwrap_err(), SimError::NonPositiveMass(-1.0));
}

#[test]
fn test_force_accumulation_and_reset() {
    let mut body = body_at(0, 1.0, [0.0; 3], [0.0; 3]);

    body.add_force(Vector3::new(1.0, 0.0, 0.0));
    body.add_force(Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(body.force(), Vector3::new(1.0, 2.0, 0.0));

    body.reset_force();
    assert_eq!(body.force(), Vector3::zeros());
}

#[test]
fn test_integrate_without_force_drifts() {
    let mut body = body_at(0, 1.0, [0.0; 3], [2.0, -1.0, 0.5]);

    body.integrate(0.5);

    // No force: velocity unchanged, position moves by dt * v
    assert_eq!(body.velocity(), Vector3::new(2.0, -1.0, 0.5));
    assert_eq!(body.position(), Point3::new(1.0, -0.5, 0.25));
}

#[test]
fn test_integrate_applies_force_before_drift() {
    let mut body = body_at(0, 2.0, [0.0; 3], [0.0; 3]);
    body.add_force(Vector3::new(4.0, 0.0, 0.0));

    body.integrate(0.5);

    // v += dt * F / m = 0.5 * 4 / 2 = 1; then x += dt * v = 0.5
    assert_eq!(body.velocity(), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(body.position(), Point3::new(0.5, 0.0, 0.0));
}

#[test]
fn test_integrate_samples_trail_on_stride() {
    let mut body = body_at(0, 1.0, [0.0; 3], [1.0, 0.0, 0.0]).with_trail(16, 3);

    for _ in 0..9 {
        body.integrate(1.0);
    }

    // 9 integrations at stride 3 store 3 positions
    let trail = body.trail().unwrap();
    assert_eq!(trail.len(), 3);

    // The pre-drift position is sampled: after 2 drifts x = 2, etc.
    let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 5.0, 8.0]);
}

#[test]
fn test_absorb_sums_mass_and_velocity() {
    let mut a = body_at(0, 1.0, [0.0; 3], [1.0, 0.0, 0.0]);
    let b = body_at(1, 3.0, [5.0, 0.0, 0.0], [0.0, 2.0, 0.0]);

    a.absorb(&b).unwrap();

    assert_eq!(a.mass(), 4.0);
    // Direct vector sum, not a momentum-weighted average
    assert_eq!(a.velocity(), Vector3::new(1.0, 2.0, 0.0));
    // Absorbing body keeps its position
    assert_eq!(a.position(), Point3::origin());
}

#[test]
fn test_distance_to() {
    let a = body_at(0, 1.0, [0.0; 3], [0.0; 3]);
    let b = body_at(1, 1.0, [3.0, 4.0, 0.0], [0.0; 3]);

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), 5.0);
}

#[test]
fn test_momentum_and_kinetic_energy() {
    let body = body_at(0, 2.0, [0.0; 3], [3.0, 4.0, 0.0]);

    assert_eq!(body.momentum(), Vector3::new(6.0, 8.0, 0.0));
    // KE = 0.5 * 2 * 25
    assert_eq!(body.kinetic_energy(), 25.0);
    assert_eq!(body.speed(), 5.0);
}
