//! Pointer interaction systems
//!
//! These systems are the input adapter: they turn the window's cursor (or
//! primary touch point) into world-space rays and drive the grab / drag /
//! release transitions on `BallSim`. The simulation itself never touches
//! the window or event system.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ball::body::BallSim;
use crate::ball::components::Ball;
use crate::camera::OrbitCamera;
use crate::tuning::PhysicsTweaks;

/// Current pointer position in window coordinates, preferring the mouse
/// cursor and falling back to the primary touch point.
fn pointer_position(window: &Window, touches: &Touches) -> Option<Vec2> {
    window
        .cursor_position()
        .or_else(|| touches.first_pressed_position())
}

fn pointer_just_pressed(buttons: &ButtonInput<MouseButton>, touches: &Touches) -> bool {
    buttons.just_pressed(MouseButton::Left) || touches.any_just_pressed()
}

fn pointer_just_released(buttons: &ButtonInput<MouseButton>, touches: &Touches) -> bool {
    buttons.just_released(MouseButton::Left) || touches.any_just_released()
}

/// Pointer-down: cast a ray through the cursor and try to grab the ball.
/// A successful grab locks the orbit camera until release.
pub fn pointer_grab(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&Camera, &GlobalTransform, &mut OrbitCamera)>,
    mut balls: Query<&mut BallSim, With<Ball>>,
) {
    if !pointer_just_pressed(&buttons, &touches) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform, mut orbit)) = cameras.single_mut() else {
        return;
    };
    let Some(cursor) = pointer_position(window, &touches) else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let view_direction = *camera_transform.forward();
    for mut sim in &mut balls {
        if sim.begin_drag(ray.origin, *ray.direction, view_direction) {
            orbit.enabled = false;
        }
    }
}

/// Pointer-move while dragging: re-intersect the captured drag plane and
/// slide the ball along it. Only fires when the pointer actually moved, so
/// the pre-move snapshot (and therefore the throw velocity) reflects real
/// pointer motion rather than idle frames.
pub fn pointer_drag(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut balls: Query<&mut BallSim, With<Ball>>,
    mut last_pointer: Local<Option<Vec2>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = pointer_position(window, &touches) else {
        return;
    };
    if *last_pointer == Some(cursor) {
        return;
    }
    *last_pointer = Some(cursor);

    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    for mut sim in &mut balls {
        if sim.is_dragging() {
            sim.drag_to(ray.origin, *ray.direction);
        }
    }
}

/// Pointer-up: convert the last drag move into a throw and give the orbit
/// camera back.
pub fn pointer_release(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    tweaks: Res<PhysicsTweaks>,
    mut cameras: Query<&mut OrbitCamera>,
    mut balls: Query<&mut BallSim, With<Ball>>,
) {
    if !pointer_just_released(&buttons, &touches) {
        return;
    }

    for mut sim in &mut balls {
        if !sim.is_dragging() {
            continue;
        }
        sim.end_drag(tweaks.throw_amplification);
        for mut orbit in &mut cameras {
            orbit.enabled = true;
        }
    }
}
