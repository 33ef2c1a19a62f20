//! Ball-related components and display state

use bevy::prelude::*;

/// Marker for the interactive ball entity
#[derive(Component)]
pub struct Ball;

/// Pure display toggles, grouped so the visual-derivation systems read one
/// record instead of flags scattered across the simulation state. None of
/// these affect physics.
#[derive(Resource)]
pub struct DisplayOptions {
    pub show_trail: bool,
    pub show_velocity_indicator: bool,
    pub show_acceleration_indicator: bool,
    pub visible: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_trail: true,
            show_velocity_indicator: true,
            show_acceleration_indicator: false,
            visible: true,
        }
    }
}
