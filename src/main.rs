//! Tossball - grab-and-throw physics sandbox
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use tossball::{
    Ball, BallSim, BallTuning, DisplayOptions, OrbitCamera, PhysicsTweaks, ball, camera,
    constants::*, ui, world,
};

fn main() {
    // Load persisted tuning (defaults if the file doesn't exist yet)
    let tweaks = match BallTuning::load() {
        Some(tuning) => {
            info!("Loaded ball tuning from {}", tossball::BALL_TUNING_FILE);
            PhysicsTweaks::from_tuning(&tuning)
        }
        None => PhysicsTweaks::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: WindowResolution::new(1280, 720),
                title: "Tossball".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 250.0,
            ..default()
        })
        .insert_resource(tweaks)
        .init_resource::<DisplayOptions>()
        .add_systems(Startup, setup)
        // Pointer transitions must run before the physics step so a grab
        // freezes the ball on the same frame
        .add_systems(
            Update,
            (
                ball::pointer_grab,
                ball::pointer_drag,
                ball::pointer_release,
                ball::advance_ball,
            )
                .chain(),
        )
        .add_systems(Update, camera::orbit_camera)
        .add_systems(
            Update,
            (
                ball::update_ball_color,
                ball::draw_trail,
                ball::draw_indicators,
                ball::apply_ball_visibility,
            ),
        )
        .add_systems(
            Update,
            (
                ui::keyboard_controls,
                ui::toggle_tweak_panel,
                ui::adjust_tweaks,
                ui::update_tweak_panel,
                ui::update_hud,
            ),
        )
        .run();
}

/// Setup the scene: camera, arena, ball, and UI
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let orbit = OrbitCamera::default();
    let camera_transform = orbit.transform();
    commands.spawn((Camera3d::default(), orbit, camera_transform));

    world::spawn_arena(&mut commands, &mut meshes, &mut materials);

    commands.spawn((
        Ball,
        BallSim::default(),
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BALL_COLOR_SLOW,
            emissive: BALL_COLOR_SLOW.to_linear() * EMISSIVE_BASE,
            ..default()
        })),
        Transform::from_translation(SPAWN_POSITION),
    ));

    ui::spawn_hud(&mut commands);
    ui::spawn_tweak_panel(&mut commands);
}
