use bevy::prelude::*;

use crate::sim::constants::{CAM_SPEED, CAR_RIDE_HEIGHT};

/// Full kinematic state of the car. Angles are in degrees; heading 0 faces
/// +Z and grows clockwise about +Y, so the initial 180 faces down the cone
/// corridor (-Z). Speed is signed: negative means reversing.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CarState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
    pub speed: f32,
    pub wheel_angle: f32,
}

impl Default for CarState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: CAR_RIDE_HEIGHT,
            z: 6.0,
            heading: 180.0,
            speed: 0.0,
            wheel_angle: 0.0,
        }
    }
}

impl CarState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Free-flying observation camera. Position only: the render side always
/// aims it at a fixed focus point, so motion happens along world axes.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FreeCamera {
    pub position: Vec3,
    pub speed: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.2, 10.0),
            speed: CAM_SPEED,
        }
    }
}

impl FreeCamera {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Held-key flags for the car, sampled once per frame from the keyboard.
/// Opposing flags may both be set; the physics step resolves the conflict.
#[derive(Resource, Clone, Debug, Default)]
pub struct DriveInput {
    pub accel: bool,
    pub brake: bool,
    pub left: bool,
    pub right: bool,
}

/// Held-key flags for the free camera.
#[derive(Resource, Clone, Debug, Default)]
pub struct CameraInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}
