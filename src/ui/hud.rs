//! HUD components and systems (simulation state readout)

use bevy::prelude::*;

use crate::ball::{Ball, BallSim};
use crate::constants::*;

/// Simulation readout text component
#[derive(Component)]
pub struct HudText;

/// Spawn the top-left readout
pub fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

/// Update the position/velocity/acceleration readout
pub fn update_hud(
    ball_query: Query<&BallSim, With<Ball>>,
    mut text_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(sim) = ball_query.single() else {
        return;
    };
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let state = if sim.is_dragging() { "dragging" } else { "free" };
    text.0 = format!(
        "pos  ({:+.2}, {:+.2}, {:+.2})\n\
         vel  ({:+.2}, {:+.2}, {:+.2})  |v| {:.2}\n\
         acc  ({:+.2}, {:+.2}, {:+.2})\n\
         radius {:.2}  [{}]",
        sim.position.x,
        sim.position.y,
        sim.position.z,
        sim.velocity.x,
        sim.velocity.y,
        sim.velocity.z,
        sim.speed(),
        sim.acceleration.x,
        sim.acceleration.y,
        sim.acceleration.z,
        sim.radius,
        state,
    );
}
