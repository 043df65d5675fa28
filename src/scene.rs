use bevy::math::Affine2;
use bevy::prelude::*;
use rand::Rng;

use crate::sim::cone_corridor;
use crate::texture::asphalt_image;

// Ground quad (world units), matching the play-area bounds plus a shoulder.
const GROUND_WIDTH: f32 = 24.0;
const GROUND_DEPTH: f32 = 40.0;
const GROUND_CENTER_Z: f32 = -4.0;

// The 256px asphalt tile repeats this many times across the ground.
const ASPHALT_TILING: f32 = 6.0;

const CONE_RADIUS: f32 = 0.22;
const CONE_HEIGHT: f32 = 0.5;

/// Build the static scene: the textured asphalt plane, the cone corridor,
/// and the lights. Runs once at startup; nothing here moves afterwards.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let seed: u64 = rand::rng().random();
    let asphalt = images.add(asphalt_image(seed));
    info!("generated asphalt texture (seed {seed})");

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_WIDTH, GROUND_DEPTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asphalt),
            uv_transform: Affine2::from_scale(Vec2::splat(ASPHALT_TILING)),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, GROUND_CENTER_Z),
    ));

    let cone_mesh = meshes.add(Cone {
        radius: CONE_RADIUS,
        height: CONE_HEIGHT,
    });
    let cone_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.45, 0.05),
        perceptual_roughness: 0.6,
        ..default()
    });

    let cones = cone_corridor();
    info!("placed {} cones", cones.len());
    for cone in cones {
        commands.spawn((
            Mesh3d(cone_mesh.clone()),
            MeshMaterial3d(cone_material.clone()),
            // the cone mesh is centered on its midpoint; lift it onto the ground
            Transform::from_xyz(cone.x, CONE_HEIGHT / 2.0, cone.y),
        ));
    }

    // Warm directional "sun" plus a soft ambient term.
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.95, 0.85),
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_translation(Vec3::new(0.2, 1.0, 0.3)).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}
