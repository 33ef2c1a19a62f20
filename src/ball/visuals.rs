//! Visual derivation systems: speed coloring, trail, indicator arrows
//!
//! Everything here is a read-only consumer of the simulation state,
//! recomputed every frame whether or not the ball is being dragged.

use bevy::prelude::*;

use crate::ball::body::BallSim;
use crate::ball::components::*;
use crate::constants::*;

/// Speed mapped into [0, 1] against the color ramp's saturation speed
pub fn normalized_speed(speed: f32) -> f32 {
    (speed / MAX_COLOR_SPEED).min(1.0)
}

fn lerp_srgb(a: Color, b: Color, t: f32) -> Color {
    let a = a.to_srgba();
    let b = b.to_srgba();
    Color::srgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}

/// Three-stop color ramp: slow -> mid over the lower half of the range,
/// mid -> fast over the upper half.
pub fn speed_color(normalized: f32) -> Color {
    if normalized < 0.5 {
        lerp_srgb(BALL_COLOR_SLOW, BALL_COLOR_MID, normalized * 2.0)
    } else {
        lerp_srgb(BALL_COLOR_MID, BALL_COLOR_FAST, (normalized - 0.5) * 2.0)
    }
}

pub fn emissive_intensity(normalized: f32) -> f32 {
    EMISSIVE_BASE + EMISSIVE_SPEED_SCALE * normalized
}

pub fn velocity_indicator_length(speed: f32) -> f32 {
    (speed * VELOCITY_INDICATOR_SCALE).min(VELOCITY_INDICATOR_MAX_LENGTH)
}

pub fn acceleration_indicator_length(magnitude: f32) -> f32 {
    (magnitude * ACCELERATION_INDICATOR_SCALE).min(ACCELERATION_INDICATOR_MAX_LENGTH)
}

/// Recolor the ball material from its current speed
pub fn update_ball_color(
    mut materials: ResMut<Assets<StandardMaterial>>,
    query: Query<(&BallSim, &MeshMaterial3d<StandardMaterial>), With<Ball>>,
) {
    for (sim, material_handle) in &query {
        let Some(material) = materials.get_mut(&material_handle.0) else {
            continue;
        };
        let normalized = normalized_speed(sim.speed());
        let color = speed_color(normalized);
        material.base_color = color;
        material.emissive = color.to_linear() * emissive_intensity(normalized);
    }
}

/// Draw the position history as a polyline
pub fn draw_trail(display: Res<DisplayOptions>, mut gizmos: Gizmos, query: Query<&BallSim>) {
    if !display.show_trail || !display.visible {
        return;
    }
    for sim in &query {
        if sim.trail.len() < 2 {
            continue;
        }
        gizmos.linestrip(sim.trail.iter().copied(), TRAIL_COLOR);
    }
}

/// Draw the velocity and acceleration arrows from the ball's center
pub fn draw_indicators(display: Res<DisplayOptions>, mut gizmos: Gizmos, query: Query<&BallSim>) {
    if !display.visible {
        return;
    }
    for sim in &query {
        if display.show_velocity_indicator {
            let speed = sim.speed();
            if speed > VELOCITY_INDICATOR_MIN_SPEED {
                let tip = sim.position + sim.velocity / speed * velocity_indicator_length(speed);
                gizmos.arrow(sim.position, tip, VELOCITY_INDICATOR_COLOR);
            }
        }
        if display.show_acceleration_indicator {
            let magnitude = sim.acceleration.length();
            if magnitude > ACCELERATION_INDICATOR_MIN_MAGNITUDE {
                let tip = sim.position
                    + sim.acceleration / magnitude * acceleration_indicator_length(magnitude);
                gizmos.arrow(sim.position, tip, ACCELERATION_INDICATOR_COLOR);
            }
        }
    }
}

/// Reflect the overall visibility toggle onto the ball mesh
pub fn apply_ball_visibility(
    display: Res<DisplayOptions>,
    mut query: Query<&mut Visibility, With<Ball>>,
) {
    for mut visibility in &mut query {
        *visibility = if display.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_speed_saturates() {
        assert_eq!(normalized_speed(0.0), 0.0);
        assert_eq!(normalized_speed(MAX_COLOR_SPEED * 2.0), 1.0);
        assert!((normalized_speed(MAX_COLOR_SPEED / 2.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_speed_color_endpoints() {
        let slow = speed_color(0.0).to_srgba();
        let expected = BALL_COLOR_SLOW.to_srgba();
        assert!((slow.red - expected.red).abs() < 1e-6);
        assert!((slow.blue - expected.blue).abs() < 1e-6);

        let fast = speed_color(1.0).to_srgba();
        let expected = BALL_COLOR_FAST.to_srgba();
        assert!((fast.red - expected.red).abs() < 1e-6);
        assert!((fast.green - expected.green).abs() < 1e-6);
    }

    #[test]
    fn test_speed_color_midpoint_is_mid_hue() {
        let mid = speed_color(0.5).to_srgba();
        let expected = BALL_COLOR_MID.to_srgba();
        assert!((mid.red - expected.red).abs() < 1e-6);
        assert!((mid.green - expected.green).abs() < 1e-6);
        assert!((mid.blue - expected.blue).abs() < 1e-6);
    }

    #[test]
    fn test_emissive_intensity_range() {
        assert!((emissive_intensity(0.0) - EMISSIVE_BASE).abs() < 1e-6);
        assert!(
            (emissive_intensity(1.0) - (EMISSIVE_BASE + EMISSIVE_SPEED_SCALE)).abs() < 1e-6
        );
    }

    #[test]
    fn test_indicator_lengths_are_capped() {
        assert!((velocity_indicator_length(1.0) - 0.3).abs() < 1e-6);
        assert_eq!(velocity_indicator_length(100.0), VELOCITY_INDICATOR_MAX_LENGTH);
        assert!((acceleration_indicator_length(9.8) - 0.98).abs() < 1e-5);
        assert_eq!(
            acceleration_indicator_length(100.0),
            ACCELERATION_INDICATOR_MAX_LENGTH
        );
    }
}
