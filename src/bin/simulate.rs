//! Headless bounce simulation
//!
//! Steps the ball simulation at a fixed 60 Hz without graphics and reports
//! each ground impact and the apex height that follows it. Useful for
//! eyeballing how tuning changes affect the bounce decay.

use bevy::math::Vec3;
use tossball::{BallSim, PhysicsTweaks};

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 3600; // One minute of simulated time

fn main() {
    let tweaks = PhysicsTweaks::default();
    let mut sim = BallSim::default();

    println!(
        "dropping from {:?} (gravity {}, air {}, friction {}, bounce {})",
        sim.position,
        tweaks.gravity_magnitude,
        tweaks.air_resistance,
        tweaks.friction,
        tweaks.bounciness
    );

    let mut bounce = 0;
    let mut peak = sim.position.y;
    let mut rising = false;

    for frame in 0..MAX_FRAMES {
        let velocity_before = sim.velocity;
        sim.advance(DT, &tweaks, false);

        if sim.position.y == sim.radius && velocity_before.y < 0.0 {
            bounce += 1;
            println!(
                "t={:6.2}s  bounce {:2}: impact speed {:5.2}, rebound {:5.2}",
                frame as f32 * DT,
                bounce,
                velocity_before.y.abs(),
                sim.velocity.y
            );
            if sim.velocity.y == 0.0 {
                println!("ball at rest after {} bounces", bounce);
                break;
            }
        }

        if sim.velocity.y > 0.0 {
            rising = true;
            peak = peak.max(sim.position.y);
        } else if rising {
            println!("           apex {:5.2}", peak);
            peak = 0.0;
            rising = false;
        }
    }

    let Vec3 { x, y, z } = sim.position;
    println!("final position ({:.2}, {:.2}, {:.2})", x, y, z);
}
