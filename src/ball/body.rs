//! Core ball simulation state and transitions
//!
//! `BallSim` owns every piece of physics and interaction state for the
//! sphere: integration, ground response, the drag-and-throw state machine,
//! and the trail history. It is pure sequential state transition; the Bevy
//! systems around it only feed it frame deltas and pointer rays.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::constants::*;
use crate::helpers::{ray_plane_intersection, ray_sphere_intersection};
use crate::tuning::PhysicsTweaks;

/// Scratch state held while the pointer drags the ball.
///
/// The drag plane is captured once at grab time (normal = camera view
/// direction at that moment) and is not updated as the camera or pointer
/// moves. `previous_position` is the pre-move snapshot used to derive the
/// throw velocity at release; it only changes on actual pointer moves, so
/// a release with no intervening move throws with zero velocity.
#[derive(Debug, Clone, Copy)]
struct DragState {
    plane_origin: Vec3,
    plane_normal: Vec3,
    /// Vector from the ball center to the picked point, constant through
    /// the drag, so the pick point (not the center) tracks the cursor.
    offset: Vec3,
    previous_position: Vec3,
}

/// Single owner of the ball's physics and interaction state.
#[derive(Component, Debug, Clone)]
pub struct BallSim {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Diagnostic readout only: recomputed from current forces each
    /// non-dragging step, never fed back into the integrator.
    pub acceleration: Vec3,
    pub radius: f32,
    /// FIFO position history, bounded to `TRAIL_MAX_POINTS`
    pub trail: VecDeque<Vec3>,
    drag: Option<DragState>,
}

impl Default for BallSim {
    fn default() -> Self {
        let mut trail = VecDeque::with_capacity(TRAIL_MAX_POINTS + 1);
        trail.push_back(SPAWN_POSITION);
        Self {
            position: SPAWN_POSITION,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            radius: BALL_RADIUS,
            trail,
            drag: None,
        }
    }
}

impl BallSim {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Step the simulation by `dt` seconds.
    ///
    /// While dragging, physics is skipped entirely: position is driven by
    /// the pointer and velocity stays zeroed until release. Otherwise this
    /// applies gravity, per-frame air damping, semi-implicit Euler position
    /// integration, and the ground-plane response, then samples the trail.
    ///
    /// The air damping multiplies velocity by `air_resistance` once per
    /// frame without dt scaling, so its half-life depends on frame rate.
    /// That coupling is part of the ball's tuned feel and is kept as-is.
    pub fn advance(&mut self, dt: f32, tweaks: &PhysicsTweaks, trail_enabled: bool) {
        if self.drag.is_some() {
            return;
        }

        // Diagnostic acceleration for the HUD and indicator arrow. Uses a
        // continuous drag-force term that deliberately differs from the
        // per-frame damping the integrator applies below.
        let drag_accel = self.velocity * (-(1.0 - tweaks.air_resistance) * DRAG_ACCEL_SCALE);
        self.acceleration = Vec3::new(0.0, tweaks.gravity_magnitude, 0.0) + drag_accel;

        // Gravity acts on the vertical axis only; damping acts on all axes
        self.velocity.y += tweaks.gravity_magnitude * dt;
        self.velocity *= tweaks.air_resistance;

        self.position += self.velocity * dt;

        // Ground contact: the floor is the plane y = 0, contact at y < radius
        if self.position.y < self.radius {
            self.position.y = self.radius;
            self.velocity.y *= -tweaks.bounciness;
            self.velocity.x *= tweaks.friction;
            self.velocity.z *= tweaks.friction;

            // Settle instead of micro-bouncing forever
            if self.velocity.y.abs() < REST_SNAP_SPEED {
                self.velocity.y = 0.0;
            }
        }

        if trail_enabled {
            self.record_trail_point();
        }
    }

    fn record_trail_point(&mut self) {
        self.trail.push_back(self.position);
        while self.trail.len() > TRAIL_MAX_POINTS {
            self.trail.pop_front();
        }
    }

    /// Try to start a drag from a pointer ray. Returns whether the ray hit
    /// the ball; on a hit the caller is expected to disable its camera
    /// controls until `end_drag`.
    ///
    /// `view_direction` is the camera's current view direction and becomes
    /// the drag plane normal, captured once for the whole drag.
    pub fn begin_drag(&mut self, ray_origin: Vec3, ray_direction: Vec3, view_direction: Vec3) -> bool {
        if ray_sphere_intersection(ray_origin, ray_direction, self.position, self.radius).is_none() {
            return false;
        }

        let plane_origin = self.position;
        let plane_normal = view_direction;
        let offset =
            match ray_plane_intersection(ray_origin, ray_direction, plane_origin, plane_normal) {
                Some(hit) => hit - self.position,
                // Degenerate grab angle; drag from the center instead
                None => Vec3::ZERO,
            };

        self.drag = Some(DragState {
            plane_origin,
            plane_normal,
            offset,
            previous_position: self.position,
        });
        self.velocity = Vec3::ZERO;
        true
    }

    /// Move the ball along the captured drag plane. A ray that misses the
    /// plane (parallel, or plane behind the pointer) skips the update.
    pub fn drag_to(&mut self, ray_origin: Vec3, ray_direction: Vec3) {
        let Some(mut drag) = self.drag else {
            return;
        };
        let Some(hit) =
            ray_plane_intersection(ray_origin, ray_direction, drag.plane_origin, drag.plane_normal)
        else {
            return;
        };

        drag.previous_position = self.position;
        self.position = hit - drag.offset;
        self.drag = Some(drag);
    }

    /// Release the drag, converting the last pointer move into a throw.
    pub fn end_drag(&mut self, throw_amplification: f32) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.velocity = (self.position - drag.previous_position) * throw_amplification;
    }

    /// Restore position, velocity, acceleration, and trail to their spawn
    /// defaults. Tunables and radius are left alone.
    pub fn reset(&mut self) {
        self.position = SPAWN_POSITION;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
        self.drag = None;
        self.trail.clear();
        self.trail.push_back(self.position);
    }

    /// Replace the sphere radius, keeping the current center but pushing it
    /// back above the ground if the new radius would penetrate it.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        if self.position.y < radius {
            self.position.y = radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn grab_ray() -> (Vec3, Vec3, Vec3) {
        // Ray from in front of the spawn point straight through the center
        (
            Vec3::new(0.0, 3.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
    }

    #[test]
    fn test_gravity_applies_to_vertical_axis() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        sim.advance(DT, &tweaks, false);

        // One step from rest: v_y = (g * dt) * air_resistance
        let expected = tweaks.gravity_magnitude * DT * tweaks.air_resistance;
        assert!(
            (sim.velocity.y - expected).abs() < 1e-5,
            "Expected v_y {}, got {}",
            expected,
            sim.velocity.y
        );
        assert_eq!(sim.velocity.x, 0.0);
        assert_eq!(sim.velocity.z, 0.0);
    }

    #[test]
    fn test_damping_applies_to_all_axes() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        sim.velocity = Vec3::new(2.0, 0.0, -3.0);
        sim.advance(DT, &tweaks, false);

        assert!((sim.velocity.x - 2.0 * tweaks.air_resistance).abs() < 1e-5);
        assert!((sim.velocity.z - -3.0 * tweaks.air_resistance).abs() < 1e-5);
    }

    #[test]
    fn test_diagnostic_acceleration_formula() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        sim.velocity = Vec3::new(4.0, 0.0, 0.0);
        sim.advance(DT, &tweaks, false);

        // acceleration = gravity + v * (-(1 - air_resistance) * 10), using
        // the pre-step velocity
        let drag = 4.0 * (-(1.0 - tweaks.air_resistance) * DRAG_ACCEL_SCALE);
        assert!((sim.acceleration.x - drag).abs() < 1e-5);
        assert!((sim.acceleration.y - tweaks.gravity_magnitude).abs() < 1e-4);
    }

    #[test]
    fn test_ground_invariant_holds_across_fall() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        for _ in 0..600 {
            sim.advance(DT, &tweaks, false);
            assert!(
                sim.position.y >= sim.radius,
                "Ball penetrated the ground: y={} radius={}",
                sim.position.y,
                sim.radius
            );
        }
    }

    #[test]
    fn test_bounce_restitution_and_friction() {
        let mut tweaks = PhysicsTweaks::default();
        tweaks.air_resistance = 1.0; // Isolate the contact response
        let mut sim = BallSim::default();
        sim.position = Vec3::new(0.0, sim.radius + 0.001, 0.0);
        sim.velocity = Vec3::new(2.0, -5.0, 1.0);
        sim.advance(DT, &tweaks, false);

        let incoming_y = -5.0 + tweaks.gravity_magnitude * DT;
        let expected_y = -tweaks.bounciness * incoming_y;
        assert!(
            (sim.velocity.y - expected_y).abs() < 1e-4,
            "Expected outgoing v_y {}, got {}",
            expected_y,
            sim.velocity.y
        );
        assert!((sim.velocity.x - 2.0 * tweaks.friction).abs() < 1e-4);
        assert!((sim.velocity.z - 1.0 * tweaks.friction).abs() < 1e-4);
        assert_eq!(sim.position.y, sim.radius);
    }

    #[test]
    fn test_rest_snap_zeroes_small_bounces() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        sim.position = Vec3::new(0.0, sim.radius + 0.0001, 0.0);
        // Slow enough that the post-bounce vertical speed lands under the
        // snap threshold (small step so the single gravity increment does
        // not push the rebound back over it)
        sim.velocity = Vec3::new(0.0, -0.05, 0.0);
        sim.advance(1.0 / 240.0, &tweaks, false);

        assert_eq!(sim.velocity.y, 0.0, "Small bounce should snap to rest");
    }

    #[test]
    fn test_dragging_freezes_physics() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        let (origin, direction, view) = grab_ray();
        assert!(sim.begin_drag(origin, direction, view));

        let position = sim.position;
        let acceleration = sim.acceleration;
        for _ in 0..120 {
            sim.advance(DT, &tweaks, true);
        }
        assert_eq!(sim.position, position);
        assert_eq!(sim.velocity, Vec3::ZERO);
        assert_eq!(sim.acceleration, acceleration);
    }

    #[test]
    fn test_grab_miss_leaves_state_unchanged() {
        let mut sim = BallSim::default();
        let hit = sim.begin_drag(
            Vec3::new(50.0, 3.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert!(!hit);
        assert!(!sim.is_dragging());
    }

    #[test]
    fn test_release_without_move_throws_nothing() {
        let mut sim = BallSim::default();
        let (origin, direction, view) = grab_ray();
        assert!(sim.begin_drag(origin, direction, view));
        sim.end_drag(THROW_AMPLIFICATION);

        assert!(!sim.is_dragging());
        assert_eq!(sim.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_throw_velocity_from_last_move() {
        let mut sim = BallSim::default();
        let (origin, direction, view) = grab_ray();
        assert!(sim.begin_drag(origin, direction, view));

        // Move the pointer one unit right and one up on the drag plane
        sim.drag_to(Vec3::new(1.0, 4.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(sim.position, Vec3::new(1.0, 4.0, 0.0));

        sim.end_drag(10.0);
        assert_eq!(sim.velocity, Vec3::new(10.0, 10.0, 0.0));
    }

    #[test]
    fn test_drag_offset_keeps_pick_point_under_cursor() {
        let mut sim = BallSim::default();
        // Grab slightly off-center: the plane hit is offset from the center
        let origin = Vec3::new(0.2, 3.1, 10.0);
        let direction = Vec3::new(0.0, 0.0, -1.0);
        assert!(sim.begin_drag(origin, direction, Vec3::new(0.0, 0.0, -1.0)));

        // Without moving the pointer, the ball must not jump
        sim.drag_to(origin, direction);
        assert!(
            (sim.position - SPAWN_POSITION).length() < 1e-5,
            "Ball snapped on grab: {:?}",
            sim.position
        );
    }

    #[test]
    fn test_parallel_drag_ray_skips_update() {
        let mut sim = BallSim::default();
        let (origin, direction, view) = grab_ray();
        assert!(sim.begin_drag(origin, direction, view));

        // Ray parallel to the drag plane: no update this event
        sim.drag_to(Vec3::new(0.0, 3.0, 10.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(sim.position, SPAWN_POSITION);
        assert!(sim.is_dragging());
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();

        let mut appended = vec![SPAWN_POSITION]; // Seed point from spawn
        for _ in 0..60 {
            sim.advance(DT, &tweaks, true);
            appended.push(sim.position);
        }

        assert_eq!(sim.trail.len(), TRAIL_MAX_POINTS);
        let expected = &appended[appended.len() - TRAIL_MAX_POINTS..];
        for (kept, expected) in sim.trail.iter().zip(expected) {
            assert_eq!(kept, expected, "Trail should keep the newest points");
        }
    }

    #[test]
    fn test_trail_disabled_frames_are_not_sampled() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        for _ in 0..10 {
            sim.advance(DT, &tweaks, false);
        }
        assert_eq!(sim.trail.len(), 1, "Only the seed point should remain");
    }

    #[test]
    fn test_reset_restores_defaults_and_is_idempotent() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();
        for _ in 0..90 {
            sim.advance(DT, &tweaks, true);
        }
        // Grab wherever the ball ended up so reset also exits the drag
        let grabbed = sim.begin_drag(
            sim.position + Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert!(grabbed);

        for _ in 0..2 {
            sim.reset();
            assert_eq!(sim.position, SPAWN_POSITION);
            assert_eq!(sim.velocity, Vec3::ZERO);
            assert_eq!(sim.acceleration, Vec3::ZERO);
            assert!(!sim.is_dragging());
            assert_eq!(sim.trail.len(), 1);
            assert_eq!(sim.trail[0], SPAWN_POSITION);
        }
    }

    #[test]
    fn test_reset_preserves_radius() {
        let mut sim = BallSim::default();
        sim.set_radius(1.3);
        sim.reset();
        assert_eq!(sim.radius, 1.3);
    }

    #[test]
    fn test_set_radius_reclamps_above_ground() {
        let mut sim = BallSim::default();
        sim.position = Vec3::new(0.0, 0.5, 0.0);
        sim.set_radius(1.0);
        assert_eq!(sim.radius, 1.0);
        assert_eq!(sim.position.y, 1.0);

        // Shrinking never moves the center
        sim.position = Vec3::new(0.0, 2.0, 0.0);
        sim.set_radius(0.25);
        assert_eq!(sim.position.y, 2.0);
    }

    /// Drop from spawn with default tuning: one clean bounce at first
    /// contact, then monotonically decreasing apex heights.
    #[test]
    fn test_drop_produces_decaying_bounces() {
        let tweaks = PhysicsTweaks::default();
        let mut sim = BallSim::default();

        // Fall until first contact
        let mut previous_velocity_y = 0.0;
        let mut steps = 0;
        while sim.position.y > sim.radius || sim.velocity.y == 0.0 {
            previous_velocity_y = sim.velocity.y;
            sim.advance(DT, &tweaks, false);
            steps += 1;
            assert!(steps < 600, "Ball never reached the ground");
            if sim.position.y == sim.radius {
                break;
            }
        }

        // Outgoing vertical speed is -bounciness times the impact speed
        let impact =
            (previous_velocity_y + tweaks.gravity_magnitude * DT) * tweaks.air_resistance;
        let expected = -tweaks.bounciness * impact;
        assert!(
            (sim.velocity.y - expected).abs() < 1e-3,
            "Expected rebound {}, got {}",
            expected,
            sim.velocity.y
        );
        assert!(sim.velocity.y > 0.0, "Ball should rebound upward");

        // Track apex heights across the next few bounces
        let mut apexes: Vec<f32> = Vec::new();
        let mut peak = sim.position.y;
        let mut rising = true;
        for _ in 0..2000 {
            sim.advance(DT, &tweaks, false);
            if sim.velocity.y > 0.0 {
                rising = true;
                peak = peak.max(sim.position.y);
            } else if rising {
                apexes.push(peak);
                peak = 0.0;
                rising = false;
            }
            if apexes.len() >= 3 {
                break;
            }
        }

        assert!(apexes.len() >= 2, "Expected multiple bounces, got {:?}", apexes);
        for pair in apexes.windows(2) {
            assert!(
                pair[1] < pair[0],
                "Apex heights should decay: {:?}",
                apexes
            );
        }
    }
}
