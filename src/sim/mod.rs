pub mod clock;
pub mod components;
pub mod constants;
pub mod course;
pub mod physics;

pub use clock::*;
pub use components::*;
pub use constants::*;
pub use course::*;
pub use physics::*;
