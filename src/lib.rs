//! Tossball - a grab-and-throw physics sandbox built with Bevy
//!
//! One interactive sphere under gravity, air drag, ground friction, and
//! bounce restitution. Grab it with the mouse or touch, throw it, and
//! watch the trail and force indicators. This crate provides the
//! simulation core plus the scene, camera, input, and UI systems around it.

pub mod ball;
pub mod camera;
pub mod constants;
pub mod helpers;
pub mod tuning;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use ball::{
    Ball, BallSim, DisplayOptions, advance_ball, apply_ball_visibility, draw_indicators,
    draw_trail, pointer_drag, pointer_grab, pointer_release, update_ball_color,
};
pub use camera::{OrbitCamera, orbit_camera};
pub use constants::*;
pub use helpers::{ray_plane_intersection, ray_sphere_intersection};
pub use tuning::{BALL_TUNING_FILE, BallTuning, PhysicsTweaks};
pub use world::{Ground, spawn_arena};
