use bevy::prelude::*;

use crate::sim::FreeCamera;

// Window constants
pub const WIN_W: f32 = 1000.;
pub const WIN_H: f32 = 700.;

/// Everything the camera looks at orbits this point just above the ground.
const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 0.5, 0.0);

/// Spawn the observation camera: 60 degree vertical FOV perspective with the
/// near/far planes sized for the little play area. Bevy keeps the aspect
/// ratio in sync with the window on resize.
pub fn camera_setup(mut commands: Commands) {
    let freecam = FreeCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 60f32.to_radians(),
            near: 0.1,
            far: 300.0,
            ..default()
        }),
        Transform::from_translation(freecam.position).looking_at(CAMERA_FOCUS, Vec3::Y),
        freecam,
    ));
}

/// Re-aim the camera every frame from its simulated position. Orientation is
/// never free: the camera always looks at the fixed focus point with +Y up.
pub fn move_camera(camera: Single<(&FreeCamera, &mut Transform), With<Camera3d>>) {
    let (freecam, mut transform) = camera.into_inner();
    *transform = Transform::from_translation(freecam.position).looking_at(CAMERA_FOCUS, Vec3::Y);
}
