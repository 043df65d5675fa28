// Simulation timing
pub const FALLBACK_DT: f32 = 0.016;
pub const MAX_FRAME_DT: f32 = 0.5;

// Car physics constants
pub const CAR_ACCEL: f32 = 6.0;
pub const FRICTION: f32 = 3.0;
pub const MAX_SPEED: f32 = 8.0;
pub const MAX_REVERSE: f32 = -3.0;

// Steering constants (degrees)
pub const MAX_WHEEL_DEG: f32 = 30.0;
pub const WHEEL_SPEED_DEG: f32 = 90.0;
pub const WHEEL_RECENTER_DEG: f32 = 60.0;
pub const WHEEL_BASE: f32 = 1.0;

// Play area bounds
pub const BOUND_X: f32 = 10.0;
pub const BOUND_Z_MIN: f32 = -24.0;
pub const BOUND_Z_MAX: f32 = 16.0;

// Free camera
pub const CAM_SPEED: f32 = 6.0;
pub const CAM_MIN_HEIGHT: f32 = 0.5;

// Car model
pub const CAR_RIDE_HEIGHT: f32 = 0.25;

// Cone corridor
pub const CORRIDOR_HALF_WIDTH: f32 = 1.2;
pub const NUM_PAIRS: usize = 3;
pub const PAIR_SPACING: f32 = 3.0;
pub const CORRIDOR_START_Z: f32 = 2.0;
