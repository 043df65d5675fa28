use bevy::app::AppExit;
use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::sim::{CameraInput, CarState, DriveInput, FreeCamera};

/// Sample the held keys into the two flag resources the simulation reads.
/// Arrows drive the car; WASD pans the camera on the ground plane, Q/E
/// change its height. Anything else is left to the reset/quit handlers.
pub fn gather_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut drive: ResMut<DriveInput>,
    mut cam: ResMut<CameraInput>,
) {
    drive.accel = keys.pressed(KeyCode::ArrowUp);
    drive.brake = keys.pressed(KeyCode::ArrowDown);
    drive.left = keys.pressed(KeyCode::ArrowLeft);
    drive.right = keys.pressed(KeyCode::ArrowRight);

    cam.forward = keys.pressed(KeyCode::KeyW);
    cam.back = keys.pressed(KeyCode::KeyS);
    cam.left = keys.pressed(KeyCode::KeyA);
    cam.right = keys.pressed(KeyCode::KeyD);
    cam.up = keys.pressed(KeyCode::KeyQ);
    cam.down = keys.pressed(KeyCode::KeyE);
}

/// R puts the car back at the corridor entrance and the camera back on its
/// perch. Runs before the tick so the reset pose survives the frame intact.
pub fn handle_reset(
    keys: Res<ButtonInput<KeyCode>>,
    car: Single<&mut CarState>,
    freecam: Single<&mut FreeCamera>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        car.into_inner().reset();
        freecam.into_inner().reset();
        info!("scene reset");
    }
}

pub fn handle_quit(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
