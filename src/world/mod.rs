//! Scene setup: ground plane and lighting

use bevy::prelude::*;

use crate::constants::*;

/// Marker for the ground plane entity
#[derive(Component)]
pub struct Ground;

/// Spawn the static scene: ground plane and a key light. The ground is
/// purely visual; the simulation treats y = 0 as the floor regardless.
pub fn spawn_arena(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
