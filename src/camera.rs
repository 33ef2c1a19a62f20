//! Orbit camera controller
//!
//! Yaw/pitch/distance camera around a fixed focus: rotate with the right
//! mouse button, zoom with the scroll wheel. The `enabled` flag is the
//! camera lock the ball interaction flips while a drag is in progress.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::constants::*;

#[derive(Component)]
pub struct OrbitCamera {
    /// Cleared while the ball is being dragged so camera rotation does not
    /// fight the drag gesture
    pub enabled: bool,
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            enabled: true,
            focus: ORBIT_FOCUS,
            yaw: 0.0,
            pitch: ORBIT_DEFAULT_PITCH,
            distance: ORBIT_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Camera transform for the current yaw/pitch/distance
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let translation = self.focus + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(translation).looking_at(self.focus, Vec3::Y)
    }
}

/// Apply mouse input to the orbit state and reposition the camera
pub fn orbit_camera(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    for (mut orbit, mut transform) in &mut query {
        if orbit.enabled {
            if buttons.pressed(MouseButton::Right) {
                orbit.yaw -= motion.delta.x * ORBIT_ROTATE_SENSITIVITY;
                orbit.pitch = (orbit.pitch - motion.delta.y * ORBIT_ROTATE_SENSITIVITY)
                    .clamp(ORBIT_MIN_PITCH, ORBIT_MAX_PITCH);
            }
            orbit.distance = (orbit.distance - scroll.delta.y * ORBIT_ZOOM_SENSITIVITY)
                .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        }

        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_at_focus() {
        let orbit = OrbitCamera::default();
        let transform = orbit.transform();
        let to_focus = (orbit.focus - transform.translation).normalize();
        let forward = *transform.forward();
        assert!(
            to_focus.dot(forward) > 0.999,
            "Camera forward {:?} should point at the focus",
            forward
        );
    }

    #[test]
    fn test_negative_pitch_places_camera_above_focus() {
        let orbit = OrbitCamera::default();
        let transform = orbit.transform();
        assert!(transform.translation.y > orbit.focus.y);
    }
}
