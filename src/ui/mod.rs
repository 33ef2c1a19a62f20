//! UI module - HUD readout, tweak panel, keyboard controls

mod controls;
mod hud;
mod tweak_panel;

pub use controls::*;
pub use hud::*;
pub use tweak_panel::*;
