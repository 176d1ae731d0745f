use crate::Vector2;

/// Position and velocity change over one time step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepDelta {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// Advances a state by `dt` using the acceleration sampled at the start of the interval.
/// Velocity moves linearly, position quadratically:
///
/// ```text
/// dv = a * dt
/// ds = v * dt + 0.5 * a * dt^2
/// ```
#[inline(always)]
pub fn step_delta(acceleration: Vector2, velocity: Vector2, dt: f64) -> StepDelta {
    StepDelta {
        position: velocity * dt + acceleration * 0.5 * (dt * dt),
        velocity: acceleration * dt,
    }
}
