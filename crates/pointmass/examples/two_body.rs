//! Two-body collapse example
//!
//! Two equal masses at rest fall toward each other under mutual
//! gravity. Shows the symmetry of the motion and the energy balance
//! over the run.
//!
//! Run with: cargo run --package pointmass --example two_body

use pointmass::forces::{DirectGravity, ForceModel};
use pointmass::scenario::symmetric_pair;
use pointmass::updater::{BruteForceUpdater, Updater};

fn main() {
    println!("Two-Body Collapse\n");
    println!("{}", "=".repeat(60));

    let mut bodies = symmetric_pair(1.0, 2.0).expect("positive mass");
    let gravity = DirectGravity::with_constants(1.0, 0.01);
    let updater = BruteForceUpdater;

    println!("\nInitial conditions:");
    for body in &bodies {
        println!(
            "  body {:?}: x = {:+.4}, v = {:+.4}",
            body.id(),
            body.position().x,
            body.velocity().x
        );
    }

    let initial_ke: f64 = bodies.iter().map(|b| b.kinetic_energy()).sum();
    let initial_pe = gravity.potential_energy(&bodies);
    println!("\nInitial energy: KE = {:.6}, PE = {:.6}", initial_ke, initial_pe);

    let dt = 0.001;
    let n_steps = 1000;

    println!("\nIntegrating {} steps at dt = {}...", n_steps, dt);

    for step in 1..=n_steps {
        updater.advance(&mut bodies, dt, &gravity);

        if step % 200 == 0 {
            let separation = bodies[0].distance_to(&bodies[1]);
            println!(
                "  step {:4}: separation = {:.6}, |v| = {:.6}",
                step,
                separation,
                bodies[0].speed()
            );
        }
    }

    let final_ke: f64 = bodies.iter().map(|b| b.kinetic_energy()).sum();
    let final_pe = gravity.potential_energy(&bodies);

    println!("\n{}", "=".repeat(60));
    println!("Final energy:   KE = {:.6}, PE = {:.6}", final_ke, final_pe);
    println!(
        "Energy drift:   {:+.3e}",
        (final_ke + final_pe) - (initial_ke + initial_pe)
    );
    println!(
        "Symmetry check: x₀ = {:+.6}, x₁ = {:+.6}",
        bodies[0].position().x,
        bodies[1].position().x
    );
}
