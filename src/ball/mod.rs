//! Ball module - simulation core, components, physics, interaction, visuals

mod body;
mod components;
mod interaction;
mod physics;
mod visuals;

pub use body::*;
pub use components::*;
pub use interaction::*;
pub use physics::*;
pub use visuals::*;
