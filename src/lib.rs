pub mod error;
pub mod field;
pub mod integrator;
pub mod planet;
pub mod stepper;
pub mod sweep;
pub mod trajectory;
pub mod utils;
pub mod c_api;

/// Two-component SI vector used for position, velocity and acceleration.
pub type Vector2 = ultraviolet::DVec2;

pub use error::FlybyError;
pub use field::{G, acceleration};
pub use integrator::{SimulationConfig, integrate, validate};
pub use planet::PlanetModel;
pub use stepper::{StepDelta, step_delta};
pub use sweep::integrate_all;
pub use trajectory::{Sample, Trajectory};
