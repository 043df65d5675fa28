use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::sim::CarState;

/// Marker for the two front wheels, which visually follow the steer angle.
#[derive(Component)]
pub struct SteeredWheel;

// Wheel placement relative to the body
const WHEEL_X: f32 = 0.55;
const WHEEL_Y: f32 = -0.25;
const WHEEL_Z: f32 = 0.65;

/// Spawn the car: a blue body cuboid with a light cabin on top and four
/// torus wheels. The model faces -Z at heading 180, straight down the cone
/// corridor from its start position.
pub fn spawn_car(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let car = CarState::default();

    let body_mesh = meshes.add(Cuboid::new(1.1, 0.5, 1.8));
    let roof_mesh = meshes.add(Cuboid::new(0.7, 0.3, 0.6));
    let wheel_mesh = meshes.add(Torus {
        minor_radius: 0.06,
        major_radius: 0.12,
    });

    let body_material = materials.add(Color::srgb(0.15, 0.25, 0.9));
    let roof_material = materials.add(Color::srgb(0.8, 0.9, 0.95));
    let wheel_material = materials.add(Color::srgb(0.02, 0.02, 0.02));

    commands
        .spawn((
            Transform::from_xyz(car.x, car.y + 0.25, car.z)
                .with_rotation(Quat::from_rotation_y(car.heading.to_radians())),
            Visibility::default(),
            car,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(body_mesh),
                MeshMaterial3d(body_material),
                Transform::default(),
            ));
            parent.spawn((
                Mesh3d(roof_mesh),
                MeshMaterial3d(roof_material),
                Transform::from_xyz(0.0, 0.35, -0.1),
            ));

            // Front wheels steer, rear wheels stay fixed.
            for (x, z, steered) in [
                (-WHEEL_X, -WHEEL_Z, true),
                (WHEEL_X, -WHEEL_Z, true),
                (-WHEEL_X, WHEEL_Z, false),
                (WHEEL_X, WHEEL_Z, false),
            ] {
                let mut wheel = parent.spawn((
                    Mesh3d(wheel_mesh.clone()),
                    MeshMaterial3d(wheel_material.clone()),
                    Transform::from_xyz(x, WHEEL_Y, z).with_rotation(wheel_rotation(0.0)),
                ));
                if steered {
                    wheel.insert(SteeredWheel);
                }
            }
        });
}

/// Copy the simulated pose onto the render transform and yaw the front
/// wheels by the live steer angle.
pub fn sync_car_transform(
    car: Single<(&CarState, &mut Transform)>,
    mut wheels: Query<&mut Transform, (With<SteeredWheel>, Without<CarState>)>,
) {
    let (car, mut transform) = car.into_inner();
    transform.translation = Vec3::new(car.x, car.y + 0.25, car.z);
    transform.rotation = Quat::from_rotation_y(car.heading.to_radians());

    for mut wheel in wheels.iter_mut() {
        wheel.rotation = wheel_rotation(car.wheel_angle);
    }
}

// The torus mesh lies flat; rolling it onto its side puts the axle along X,
// then the steer angle yaws the whole wheel.
fn wheel_rotation(steer_deg: f32) -> Quat {
    Quat::from_rotation_y(steer_deg.to_radians()) * Quat::from_rotation_z(FRAC_PI_2)
}
