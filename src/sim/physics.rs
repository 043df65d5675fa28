use crate::sim::components::{CameraInput, CarState, DriveInput, FreeCamera};
use crate::sim::constants::{
    BOUND_X, BOUND_Z_MAX, BOUND_Z_MIN, CAM_MIN_HEIGHT, CAR_ACCEL, FRICTION, MAX_REVERSE,
    MAX_SPEED, MAX_WHEEL_DEG, WHEEL_BASE, WHEEL_RECENTER_DEG, WHEEL_SPEED_DEG,
};

/// Below this steer angle (radians) the car is treated as driving straight,
/// keeping the turning radius away from the tan() singularity.
const STEER_EPSILON: f32 = 1e-4;

/// Advance the car by one tick of the bicycle model.
///
/// The step order matters: steering, then speed, then heading, then
/// position, then the play-area clamp. Both the car and the HUD read the
/// state produced here, so every invariant (speed and steer clamps, bounds)
/// holds once this returns.
pub fn apply_car_physics(car: &mut CarState, input: &DriveInput, dt: f32) {
    step_steering(car, input, dt);
    step_speed(car, input, dt);
    step_pose(car, dt);
}

/// Steering wheel update. Left wins over right when both are held;
/// with neither held the wheel recenters and snaps to zero inside the
/// one-degree dead band.
fn step_steering(car: &mut CarState, input: &DriveInput, dt: f32) {
    if input.left {
        car.wheel_angle += WHEEL_SPEED_DEG * dt;
    } else if input.right {
        car.wheel_angle -= WHEEL_SPEED_DEG * dt;
    } else if car.wheel_angle > 1.0 {
        car.wheel_angle -= WHEEL_RECENTER_DEG * dt;
    } else if car.wheel_angle < -1.0 {
        car.wheel_angle += WHEEL_RECENTER_DEG * dt;
    } else {
        car.wheel_angle = 0.0;
    }
    car.wheel_angle = car.wheel_angle.clamp(-MAX_WHEEL_DEG, MAX_WHEEL_DEG);
}

/// Throttle update. Accelerating and braking share one magnitude (the brake
/// doubles as reverse); accel wins when both are held. With neither held,
/// friction drags the speed toward zero without overshooting it.
fn step_speed(car: &mut CarState, input: &DriveInput, dt: f32) {
    if input.accel {
        car.speed += CAR_ACCEL * dt;
    } else if input.brake {
        car.speed -= CAR_ACCEL * dt;
    } else if car.speed > 0.0 {
        car.speed = (car.speed - FRICTION * dt).max(0.0);
    } else if car.speed < 0.0 {
        car.speed = (car.speed + FRICTION * dt).min(0.0);
    }
    car.speed = car.speed.clamp(MAX_REVERSE, MAX_SPEED);
}

/// Heading and position update.
///
/// Bicycle kinematics: turning radius R = wheel_base / tan(steer), angular
/// velocity v / R. The signed speed feeds the heading unchanged, so
/// reversing with the wheel turned swings the nose the opposite way, like a
/// real car backing up. Position is hard-clipped to the play area; speed is
/// preserved on contact and decays by friction alone.
fn step_pose(car: &mut CarState, dt: f32) {
    let steer = car.wheel_angle.to_radians();
    if steer.abs() > STEER_EPSILON {
        let radius = WHEEL_BASE / steer.tan();
        car.heading += (car.speed / radius).to_degrees() * dt;
    }

    let heading = car.heading.to_radians();
    car.x += heading.sin() * car.speed * dt;
    car.z += heading.cos() * car.speed * dt;

    car.x = car.x.clamp(-BOUND_X, BOUND_X);
    car.z = car.z.clamp(BOUND_Z_MIN, BOUND_Z_MAX);
}

/// Translate the free camera along the world axes. Flags are independent,
/// so opposing keys cancel out. Only the down branch checks the floor;
/// matching the car clamp style, height is never pushed back up otherwise.
pub fn apply_camera_motion(cam: &mut FreeCamera, input: &CameraInput, dt: f32) {
    let step = cam.speed * dt;
    if input.forward {
        cam.position.z -= step;
    }
    if input.back {
        cam.position.z += step;
    }
    if input.left {
        cam.position.x -= step;
    }
    if input.right {
        cam.position.x += step;
    }
    if input.up {
        cam.position.y += step;
    }
    if input.down {
        cam.position.y -= step;
        if cam.position.y < CAM_MIN_HEIGHT {
            cam.position.y = CAM_MIN_HEIGHT;
        }
    }
}
