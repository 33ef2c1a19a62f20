//! Ball physics systems

use bevy::prelude::*;

use crate::ball::body::BallSim;
use crate::ball::components::*;
use crate::constants::BALL_RADIUS;
use crate::tuning::PhysicsTweaks;

/// Step the simulation once per rendered frame and mirror the result into
/// the ball's transform. The sphere mesh is built at `BALL_RADIUS`, so
/// radius changes are applied as uniform scale.
pub fn advance_ball(
    time: Res<Time>,
    tweaks: Res<PhysicsTweaks>,
    display: Res<DisplayOptions>,
    mut query: Query<(&mut BallSim, &mut Transform), With<Ball>>,
) {
    let dt = time.delta_secs();

    for (mut sim, mut transform) in &mut query {
        sim.advance(dt, &tweaks, display.show_trail);
        transform.translation = sim.position;
        transform.scale = Vec3::splat(sim.radius / BALL_RADIUS);
    }
}
