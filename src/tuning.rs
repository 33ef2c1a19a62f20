//! Global physics tuning settings (decoupled from UI)

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;

// Serde default functions so older config files keep loading
fn default_gravity_magnitude() -> f32 {
    BALL_GRAVITY
}
fn default_air_resistance() -> f32 {
    BALL_AIR_RESISTANCE
}
fn default_friction() -> f32 {
    BALL_FRICTION
}
fn default_bounciness() -> f32 {
    BALL_BOUNCINESS
}
fn default_throw_amplification() -> f32 {
    THROW_AMPLIFICATION
}

/// Path to the persisted ball tuning config
pub const BALL_TUNING_FILE: &str = "config/ball_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallTuning {
    #[serde(default = "default_gravity_magnitude")]
    pub gravity_magnitude: f32,
    #[serde(default = "default_air_resistance")]
    pub air_resistance: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default = "default_bounciness")]
    pub bounciness: f32,
    #[serde(default = "default_throw_amplification")]
    pub throw_amplification: f32,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            gravity_magnitude: BALL_GRAVITY,
            air_resistance: BALL_AIR_RESISTANCE,
            friction: BALL_FRICTION,
            bounciness: BALL_BOUNCINESS,
            throw_amplification: THROW_AMPLIFICATION,
        }
    }
}

impl BallTuning {
    /// Load tuning from the config file. Returns `None` (with a warning)
    /// when the file is missing or unparseable.
    pub fn load() -> Option<Self> {
        let content = match fs::read_to_string(BALL_TUNING_FILE) {
            Ok(content) => content,
            Err(_) => return None, // No file yet, defaults apply
        };

        match serde_json::from_str(&content) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                warn!("Could not parse {}: {}, using defaults", BALL_TUNING_FILE, e);
                None
            }
        }
    }

    /// Save tuning to the config file, creating the directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(dir) = Path::new(BALL_TUNING_FILE).parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(BALL_TUNING_FILE, content)
    }
}

/// Runtime-adjustable physics values for tweaking the ball's feel.
/// Out-of-range values are accepted as-is; degenerate settings are the
/// caller's responsibility, not an error.
#[derive(Resource)]
pub struct PhysicsTweaks {
    pub gravity_magnitude: f32,
    pub air_resistance: f32,
    pub friction: f32,
    pub bounciness: f32,
    pub throw_amplification: f32,
    pub selected_index: usize, // Which value is currently selected for adjustment
    pub panel_visible: bool,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        Self {
            gravity_magnitude: BALL_GRAVITY,
            air_resistance: BALL_AIR_RESISTANCE,
            friction: BALL_FRICTION,
            bounciness: BALL_BOUNCINESS,
            throw_amplification: THROW_AMPLIFICATION,
            selected_index: 0,
            panel_visible: false,
        }
    }
}

impl PhysicsTweaks {
    pub const LABELS: [&'static str; 5] = [
        "Gravity Strength",
        "Air Resistance",
        "Friction",
        "Bounciness",
        "Throw Power",
    ];

    /// Panel value for a row. Gravity is displayed as a positive strength;
    /// the sign flip back into `gravity_magnitude` happens in `set_value`.
    pub fn get_value(&self, index: usize) -> f32 {
        match index {
            0 => -self.gravity_magnitude,
            1 => self.air_resistance,
            2 => self.friction,
            3 => self.bounciness,
            4 => self.throw_amplification,
            _ => 0.0,
        }
    }

    pub fn get_default_value(index: usize) -> f32 {
        match index {
            0 => -BALL_GRAVITY,
            1 => BALL_AIR_RESISTANCE,
            2 => BALL_FRICTION,
            3 => BALL_BOUNCINESS,
            4 => THROW_AMPLIFICATION,
            _ => 0.0,
        }
    }

    pub fn set_value(&mut self, index: usize, value: f32) {
        match index {
            0 => self.gravity_magnitude = -value,
            1 => self.air_resistance = value,
            2 => self.friction = value,
            3 => self.bounciness = value,
            4 => self.throw_amplification = value,
            _ => {}
        }
    }

    /// Adjustment step per row (coarse for gravity/throw, fine for ratios)
    pub fn adjust_step(index: usize) -> f32 {
        match index {
            0 => 0.5,
            1 | 2 | 3 => 0.01,
            4 => 0.5,
            _ => 0.0,
        }
    }

    pub fn from_tuning(tuning: &BallTuning) -> Self {
        Self {
            gravity_magnitude: tuning.gravity_magnitude,
            air_resistance: tuning.air_resistance,
            friction: tuning.friction,
            bounciness: tuning.bounciness,
            throw_amplification: tuning.throw_amplification,
            ..Self::default()
        }
    }

    pub fn to_tuning(&self) -> BallTuning {
        BallTuning {
            gravity_magnitude: self.gravity_magnitude,
            air_resistance: self.air_resistance,
            friction: self.friction,
            bounciness: self.bounciness,
            throw_amplification: self.throw_amplification,
        }
    }
}
