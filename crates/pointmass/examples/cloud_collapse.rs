//! Cloud collapse with driver-side mergers
//!
//! A seeded cloud of bodies falls in on itself. When two bodies pass
//! within a merge threshold, the heavier absorbs the lighter and the
//! driver removes the absorbed body from its collection — removal is
//! the driver's job, never the kernel's.
//!
//! Run with: cargo run --package pointmass --example cloud_collapse

use pointmass::body::Body;
use pointmass::config::SimConfig;
use pointmass::forces::DirectGravity;
use pointmass::scenario::random_cloud;
use pointmass::updater::{BruteForceUpdater, Updater};

const MERGE_DISTANCE: f64 = 0.05;

fn main() {
    println!("Cloud Collapse with Mergers\n");
    println!("{}", "=".repeat(60));

    let config = SimConfig::default();
    let mut bodies = random_cloud(64, 5.0, 42, &config).expect("positive masses");
    let gravity = DirectGravity::from_config(&config);
    let updater = BruteForceUpdater;

    let total_mass: f64 = bodies.iter().map(|b| b.mass()).sum();
    println!("\nInitial bodies: {}", bodies.len());
    println!("Total mass:     {:.4}", total_mass);

    let dt = 0.005;
    let n_steps = 2000;
    let mut mergers = 0;

    for step in 1..=n_steps {
        updater.advance(&mut bodies, dt, &gravity);
        mergers += merge_close_pairs(&mut bodies);

        if step % 400 == 0 {
            println!(
                "  step {:4}: {} bodies, {} mergers so far",
                step,
                bodies.len(),
                mergers
            );
        }
    }

    let final_mass: f64 = bodies.iter().map(|b| b.mass()).sum();

    println!("\n{}", "=".repeat(60));
    println!("Final bodies: {} ({} mergers)", bodies.len(), mergers);
    println!("Total mass:   {:.4} (conserved)", final_mass);

    if let Some(heaviest) = bodies
        .iter()
        .max_by(|a, b| a.mass().partial_cmp(&b.mass()).expect("finite masses"))
    {
        println!(
            "Heaviest body: {:?}, m = {:.4}, trail holds {} positions",
            heaviest.id(),
            heaviest.mass(),
            heaviest.trail().map_or(0, |t| t.len())
        );
    }
}

/// Merges every pair closer than `MERGE_DISTANCE`, heavier body
/// absorbing the lighter, and drops absorbed bodies from the
/// collection. Returns the number of mergers performed.
fn merge_close_pairs(bodies: &mut Vec<Body>) -> usize {
    let mut mergers = 0;

    'outer: loop {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].distance_to(&bodies[j]) < MERGE_DISTANCE {
                    let (keep, drop) = if bodies[i].mass() >= bodies[j].mass() {
                        (i, j)
                    } else {
                        (j, i)
                    };

                    let absorbed = bodies.swap_remove(drop);
                    // swap_remove moved the last body into `drop`
                    let keep = if keep == bodies.len() { drop } else { keep };
                    bodies[keep].absorb(&absorbed).expect("positive mass");
                    mergers += 1;
                    continue 'outer;
                }
            }
        }
        break;
    }

    mergers
}
