use bevy::prelude::*;

use crate::sim::components::{CameraInput, CarState, DriveInput, FreeCamera};
use crate::sim::constants::{FALLBACK_DT, MAX_FRAME_DT};
use crate::sim::physics::{apply_camera_motion, apply_car_physics};

/// Per-frame delta source. Keeps the previous tick's millisecond timestamp
/// and clamps pathological deltas (first tick, clock going nowhere, window
/// hidden for half a second or more) to a nominal 16 ms frame.
#[derive(Resource, Default)]
pub struct SimClock {
    last_ms: Option<u64>,
}

impl SimClock {
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) as f32 / 1000.0,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        if dt <= 0.0 || dt > MAX_FRAME_DT {
            FALLBACK_DT
        } else {
            dt
        }
    }
}

/// The simulation tick: one clock read drives both the car and the free
/// camera so they always integrate over the same dt.
pub fn advance_simulation(
    time: Res<Time>,
    mut clock: ResMut<SimClock>,
    drive: Res<DriveInput>,
    cam_input: Res<CameraInput>,
    car: Single<&mut CarState>,
    freecam: Single<&mut FreeCamera>,
) {
    let dt = clock.tick(time.elapsed().as_millis() as u64);
    let mut car = car.into_inner();
    let mut freecam = freecam.into_inner();
    apply_car_physics(&mut car, &drive, dt);
    apply_camera_motion(&mut freecam, &cam_input, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_falls_back_to_nominal_frame() {
        let mut clock = SimClock::default();
        assert_eq!(clock.tick(1000), FALLBACK_DT);
    }

    #[test]
    fn steady_ticks_yield_elapsed_seconds() {
        let mut clock = SimClock::default();
        clock.tick(0);
        let dt = clock.tick(16);
        assert!((dt - 0.016).abs() < 1e-6);
        let dt = clock.tick(116);
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn long_pause_is_clamped() {
        let mut clock = SimClock::default();
        clock.tick(0);
        assert_eq!(clock.tick(700), FALLBACK_DT);
        // exactly the limit still counts as a real frame
        let dt = clock.tick(1200);
        assert!((dt - 0.5).abs() < 1e-6);
    }

    #[test]
    fn non_advancing_clock_is_clamped() {
        let mut clock = SimClock::default();
        clock.tick(500);
        assert_eq!(clock.tick(500), FALLBACK_DT);
        assert_eq!(clock.tick(400), FALLBACK_DT);
        // recovers once time moves forward again
        let dt = clock.tick(432);
        assert!((dt - 0.032).abs() < 1e-6);
    }
}
