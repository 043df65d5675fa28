mod camera;
mod car;
mod hud;
mod input;
mod scene;
mod sim;
mod texture;

use bevy::{prelude::*, window::PresentMode};

use camera::{camera_setup, move_camera, WIN_W, WIN_H};
use car::{spawn_car, sync_car_transform};
use hud::{setup_hud, update_hud};
use input::{gather_input, handle_quit, handle_reset};
use scene::setup_scene;
use sim::{advance_simulation, CameraInput, DriveInput, SimClock};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Baliza - Asfalto Procedural, Cones, Carro e Camera".into(),
                resolution: (WIN_W, WIN_H).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<DriveInput>()
        .init_resource::<CameraInput>()
        .init_resource::<SimClock>()
        .add_systems(Startup, (camera_setup, setup_scene, spawn_car, setup_hud))
        // One tick per frame: sample the keys, honor a reset, integrate, then
        // mirror the new state into the transforms and the HUD.
        .add_systems(
            Update,
            (gather_input, handle_reset, advance_simulation).chain(),
        )
        .add_systems(
            Update,
            (sync_car_transform, move_camera, update_hud).after(advance_simulation),
        )
        .add_systems(Update, handle_quit)
        .run();
}
