//! Physics tweak panel UI components and systems
//!
//! Keyboard-driven panel over `PhysicsTweaks`: Tab toggles it, up/down
//! select a row, left/right adjust (shift for x10), Backspace restores the
//! row default, Enter saves to the config file. Values are written straight
//! into the tweaks with no validation.

use bevy::prelude::*;

use crate::constants::*;
use crate::tuning::{BALL_TUNING_FILE, PhysicsTweaks};

/// Root node of the tweak panel
#[derive(Component)]
pub struct TweakPanel;

/// One row of the panel, indexed into `PhysicsTweaks::LABELS`
#[derive(Component)]
pub struct TweakRow(pub usize);

/// Spawn the panel, hidden until toggled
pub fn spawn_tweak_panel(commands: &mut Commands) {
    commands
        .spawn((
            TweakPanel,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                right: Val::Px(8.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                padding: UiRect::all(Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("physics tweaks (tab)"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_ACCENT),
            ));
            for (index, _) in PhysicsTweaks::LABELS.iter().enumerate() {
                parent.spawn((
                    TweakRow(index),
                    Text::new(""),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(TEXT_SECONDARY),
                ));
            }
        });
}

/// Toggle panel visibility with Tab
pub fn toggle_tweak_panel(
    keys: Res<ButtonInput<KeyCode>>,
    mut tweaks: ResMut<PhysicsTweaks>,
    mut panel_query: Query<&mut Visibility, With<TweakPanel>>,
) {
    if !keys.just_pressed(KeyCode::Tab) {
        return;
    }
    tweaks.panel_visible = !tweaks.panel_visible;
    for mut visibility in &mut panel_query {
        *visibility = if tweaks.panel_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Row selection and value adjustment while the panel is open
pub fn adjust_tweaks(keys: Res<ButtonInput<KeyCode>>, mut tweaks: ResMut<PhysicsTweaks>) {
    if !tweaks.panel_visible {
        return;
    }

    let rows = PhysicsTweaks::LABELS.len();
    if keys.just_pressed(KeyCode::ArrowUp) {
        tweaks.selected_index = (tweaks.selected_index + rows - 1) % rows;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        tweaks.selected_index = (tweaks.selected_index + 1) % rows;
    }

    let mut step = PhysicsTweaks::adjust_step(tweaks.selected_index);
    if keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight) {
        step *= 10.0;
    }

    let index = tweaks.selected_index;
    if keys.just_pressed(KeyCode::ArrowLeft) {
        let value = tweaks.get_value(index) - step;
        tweaks.set_value(index, value);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        let value = tweaks.get_value(index) + step;
        tweaks.set_value(index, value);
    }
    if keys.just_pressed(KeyCode::Backspace) {
        tweaks.set_value(index, PhysicsTweaks::get_default_value(index));
    }

    if keys.just_pressed(KeyCode::Enter) {
        match tweaks.to_tuning().save() {
            Ok(()) => info!("Saved ball tuning to {}", BALL_TUNING_FILE),
            Err(e) => warn!("Failed to save {}: {}", BALL_TUNING_FILE, e),
        }
    }
}

/// Refresh row text and highlight the selected row
pub fn update_tweak_panel(
    tweaks: Res<PhysicsTweaks>,
    mut row_query: Query<(&TweakRow, &mut Text, &mut TextColor)>,
) {
    if !tweaks.panel_visible {
        return;
    }

    for (row, mut text, mut color) in &mut row_query {
        let selected = row.0 == tweaks.selected_index;
        let marker = if selected { ">" } else { " " };
        text.0 = format!(
            "{} {:<16} {:>7.2}",
            marker,
            PhysicsTweaks::LABELS[row.0],
            tweaks.get_value(row.0),
        );
        color.0 = if selected { TEXT_ACCENT } else { TEXT_SECONDARY };
    }
}
