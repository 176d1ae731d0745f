use thiserror::Error;

/// Reasons a trajectory cannot be integrated.
///
/// Every variant is raised before any sample is produced; a run either
/// fails here or completes.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlybyError {
    #[error("initial position is {distance} m from the planet centre, at or below the surface radius {radius} m")]
    InvalidPosition { distance: f64, radius: f64 },
    #[error("initial y-velocity {vy} m/s is negative")]
    InvalidVelocity { vy: f64 },
    #[error("time step must be positive and finite, got {0} s")]
    InvalidTimeStep(f64),
    #[error("total time must be non-negative and finite, got {0} s")]
    InvalidTotalTime(f64),
    #[error("time horizon spans {0} steps, more than a single run may hold")]
    TooManySamples(f64),
}
