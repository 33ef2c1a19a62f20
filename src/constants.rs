//! Tunable constants for tossball
//!
//! All physics and presentation values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// SCENE COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::srgb(0.08, 0.09, 0.12);
pub const GROUND_COLOR: Color = Color::srgb(0.16, 0.17, 0.2);

// =============================================================================
// TEXT/UI COLORS
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8); // Bone white/cream
pub const TEXT_SECONDARY: Color = Color::srgb(0.7, 0.65, 0.55); // Aged parchment
pub const TEXT_ACCENT: Color = Color::srgb(0.9, 0.75, 0.4); // Gold/amber

// =============================================================================
// BALL PHYSICS
// =============================================================================

pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 3.0, 0.0);
pub const BALL_RADIUS: f32 = 0.5;
pub const BALL_GRAVITY: f32 = -9.8; // Signed, along the vertical axis
pub const BALL_AIR_RESISTANCE: f32 = 0.99; // Velocity retained per frame, all axes
pub const BALL_FRICTION: f32 = 0.98; // Horizontal velocity retained per ground contact
pub const BALL_BOUNCINESS: f32 = 0.7; // Coefficient of restitution (0 = dead, 1 = perfect)
pub const REST_SNAP_SPEED: f32 = 0.1; // Vertical speed below which a bounce settles to rest

// Scale applied to (1 - air_resistance) for the diagnostic drag acceleration.
// The readout intentionally does not match the per-frame damping the
// integrator applies; both formulas are kept as-is.
pub const DRAG_ACCEL_SCALE: f32 = 10.0;

// =============================================================================
// THROWING
// =============================================================================

pub const THROW_AMPLIFICATION: f32 = 10.0; // Release velocity per unit of last drag delta

// =============================================================================
// RADIUS ADJUSTMENT
// =============================================================================

pub const MIN_BALL_RADIUS: f32 = 0.1;
pub const MAX_BALL_RADIUS: f32 = 2.0;
pub const RADIUS_STEP: f32 = 0.1;

// =============================================================================
// VISUAL DERIVATION
// =============================================================================

pub const MAX_COLOR_SPEED: f32 = 15.0; // Speed at which the color ramp saturates
pub const BALL_COLOR_SLOW: Color = Color::srgb(0.25, 0.5, 1.0);
pub const BALL_COLOR_MID: Color = Color::srgb(1.0, 0.85, 0.25);
pub const BALL_COLOR_FAST: Color = Color::srgb(1.0, 0.25, 0.15);
pub const EMISSIVE_BASE: f32 = 0.2;
pub const EMISSIVE_SPEED_SCALE: f32 = 0.3;

pub const TRAIL_MAX_POINTS: usize = 50;
pub const TRAIL_COLOR: Color = Color::srgb(0.6, 0.75, 1.0);

pub const VELOCITY_INDICATOR_MIN_SPEED: f32 = 0.1;
pub const VELOCITY_INDICATOR_SCALE: f32 = 0.3;
pub const VELOCITY_INDICATOR_MAX_LENGTH: f32 = 3.0;
pub const VELOCITY_INDICATOR_COLOR: Color = Color::srgb(0.3, 0.95, 0.4);

pub const ACCELERATION_INDICATOR_MIN_MAGNITUDE: f32 = 0.1;
pub const ACCELERATION_INDICATOR_SCALE: f32 = 0.1;
pub const ACCELERATION_INDICATOR_MAX_LENGTH: f32 = 2.0;
pub const ACCELERATION_INDICATOR_COLOR: Color = Color::srgb(0.95, 0.45, 0.9);

// =============================================================================
// WORLD
// =============================================================================

pub const GROUND_SIZE: f32 = 24.0; // Side length of the visible ground plane

// =============================================================================
// ORBIT CAMERA
// =============================================================================

pub const ORBIT_FOCUS: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const ORBIT_DISTANCE: f32 = 9.0;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_DEFAULT_PITCH: f32 = -0.35;
pub const ORBIT_MIN_PITCH: f32 = -1.5;
pub const ORBIT_MAX_PITCH: f32 = 1.5;
pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005; // Radians per pixel of mouse motion
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.5; // Distance per scroll line
