//! Keyboard controls for display toggles and ball bookkeeping

use bevy::prelude::*;

use crate::ball::{Ball, BallSim, DisplayOptions};
use crate::camera::OrbitCamera;
use crate::constants::*;

/// Display toggles, reset, and radius adjustment.
///
/// T trail, V velocity arrow, C acceleration arrow, H ball visibility,
/// R reset, [ and ] shrink/grow the radius.
pub fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut display: ResMut<DisplayOptions>,
    mut cameras: Query<&mut OrbitCamera>,
    mut balls: Query<&mut BallSim, With<Ball>>,
) {
    if keys.just_pressed(KeyCode::KeyT) {
        display.show_trail = !display.show_trail;
    }
    if keys.just_pressed(KeyCode::KeyV) {
        display.show_velocity_indicator = !display.show_velocity_indicator;
    }
    if keys.just_pressed(KeyCode::KeyC) {
        display.show_acceleration_indicator = !display.show_acceleration_indicator;
    }
    if keys.just_pressed(KeyCode::KeyH) {
        display.visible = !display.visible;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        for mut sim in &mut balls {
            // Resetting mid-drag abandons the drag; give the camera back
            if sim.is_dragging() {
                for mut orbit in &mut cameras {
                    orbit.enabled = true;
                }
            }
            sim.reset();
        }
    }

    let radius_step = match (
        keys.just_pressed(KeyCode::BracketRight),
        keys.just_pressed(KeyCode::BracketLeft),
    ) {
        (true, false) => RADIUS_STEP,
        (false, true) => -RADIUS_STEP,
        _ => return,
    };
    for mut sim in &mut balls {
        let radius = (sim.radius + radius_step).clamp(MIN_BALL_RADIUS, MAX_BALL_RADIUS);
        sim.set_radius(radius);
    }
}
