use crate::{
    Vector2,
    error::FlybyError,
    field,
    planet::PlanetModel,
    stepper,
    trajectory::{Sample, Trajectory},
};

use tracing::{debug, warn};

/// Initial conditions and time horizon of one integration run.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Position relative to the planet centre (m).
    pub initial_position: Vector2,
    /// Velocity (m/s).
    pub initial_velocity: Vector2,
    /// Fixed interval between samples (s).
    pub time_step: f64,
    /// Length of the time horizon (s).
    pub total_time: f64,
}

impl SimulationConfig {
    /// Default constants.
    pub const DEFAULT_TIME_STEP: f64 = 1.0;
    pub const DEFAULT_TOTAL_TIME: f64 = 1000.0;
    /// Largest number of samples a single run may hold.
    pub const MAX_SAMPLES: usize = 10_000_000;

    /// Starts from `position` and `velocity` with the default time horizon.
    pub fn new(initial_position: Vector2, initial_velocity: Vector2) -> Self {
        Self {
            initial_position,
            initial_velocity,
            time_step: Self::DEFAULT_TIME_STEP,
            total_time: Self::DEFAULT_TOTAL_TIME,
        }
    }

    /// Builds a config from the six scalar inputs (SI units).
    pub fn from_scalars(
        s_x0: f64,
        s_y0: f64,
        v_x0: f64,
        v_y0: f64,
        time_step: f64,
        total_time: f64,
    ) -> Self {
        Self::new(Vector2::new(s_x0, s_y0), Vector2::new(v_x0, v_y0))
            .with_time(time_step, total_time)
    }

    pub fn with_time(mut self, time_step: f64, total_time: f64) -> Self {
        self.time_step = time_step;
        self.total_time = total_time;
        self
    }

    /// Number of samples the run will produce: `floor(total_time / time_step) + 1`.
    ///
    /// Fails if the time step or horizon is out of range, or the run would
    /// exceed [`Self::MAX_SAMPLES`].
    pub fn sample_count(&self) -> Result<usize, FlybyError> {
        validate_time(self.time_step, self.total_time)?;

        let steps = self.total_time / self.time_step;
        if !(steps < Self::MAX_SAMPLES as f64) {
            return Err(FlybyError::TooManySamples(steps));
        }
        Ok(steps as usize + 1)
    }
}

/// Checks that the spacecraft starts above the surface with a non-negative y-velocity.
///
/// Only the first failing check is reported; position takes priority.
pub fn validate(
    initial_position: Vector2,
    initial_velocity: Vector2,
    planet_radius: f64,
) -> Result<(), FlybyError> {
    let s = initial_position.mag();
    if s.abs() <= planet_radius {
        return Err(FlybyError::InvalidPosition {
            distance: s,
            radius: planet_radius,
        });
    }
    if initial_velocity.y < 0.0 {
        return Err(FlybyError::InvalidVelocity {
            vy: initial_velocity.y,
        });
    }
    Ok(())
}

fn validate_time(time_step: f64, total_time: f64) -> Result<(), FlybyError> {
    if !(time_step > 0.0 && time_step.is_finite()) {
        return Err(FlybyError::InvalidTimeStep(time_step));
    }
    if !(total_time >= 0.0 && total_time.is_finite()) {
        return Err(FlybyError::InvalidTotalTime(total_time));
    }
    Ok(())
}

/// Time of sample `i` out of `n`, evenly spread over `[0, total_time]`.
/// The final sample lands exactly on `total_time`.
fn sample_time(i: usize, n: usize, total_time: f64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    if i == n - 1 {
        return total_time;
    }
    i as f64 * (total_time / (n - 1) as f64)
}

/// Integrates the spacecraft's motion under the planet's gravity.
///
/// 1. Validates the initial conditions and time horizon.
/// 2. Seeds sample 0 with the initial state and its acceleration.
/// 3. Steps each subsequent sample from the previous one by `time_step`,
///    re-evaluating the acceleration at the new position.
///
/// Non-finite values (e.g. after passing through the planet centre) are not
/// caught and propagate into the remaining samples.
pub fn integrate(config: SimulationConfig, planet: PlanetModel) -> Result<Trajectory, FlybyError> {
    let n = match validate(config.initial_position, config.initial_velocity, planet.radius)
        .and_then(|()| config.sample_count())
    {
        Ok(n) => n,
        Err(err) => {
            warn!(error = %err, "rejected initial conditions");
            return Err(err);
        }
    };
    let dt = config.time_step;
    debug!(samples = n, time_step = dt, total_time = config.total_time, "integrating trajectory");

    let mut trajectory = Trajectory::with_capacity(n);
    let mut prev = Sample {
        t: 0.0,
        acceleration: field::acceleration(config.initial_position, planet.mass),
        velocity: config.initial_velocity,
        position: config.initial_position,
    };
    trajectory.push(prev);

    let mut reported_fault = false;
    for i in 1..n {
        let delta = stepper::step_delta(prev.acceleration, prev.velocity, dt);
        let velocity = prev.velocity + delta.velocity;
        let position = prev.position + delta.position;

        let sample = Sample {
            t: sample_time(i, n, config.total_time),
            acceleration: field::acceleration(position, planet.mass),
            velocity,
            position,
        };

        if !reported_fault && !(sample.acceleration.x.is_finite() && sample.acceleration.y.is_finite()) {
            warn!(index = i, t = sample.t, "trajectory became non-finite");
            reported_fault = true;
        }

        trajectory.push(sample);
        prev = sample;
    }

    debug!(samples = trajectory.len(), "trajectory complete");

    Ok(trajectory)
}
