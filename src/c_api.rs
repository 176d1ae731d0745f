use crate::{
    Vector2,
    error::FlybyError,
    integrator::{self, SimulationConfig},
    planet::PlanetModel,
    trajectory::Trajectory,
};

/// Outcome of `Trajectory_Integrate`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlybyStatus {
    Ok = 0,
    InvalidPosition = 1,
    InvalidVelocity = 2,
    InvalidTimeStep = 3,
    InvalidTotalTime = 4,
    TooManySamples = 5,
}

impl From<&FlybyError> for FlybyStatus {
    fn from(err: &FlybyError) -> Self {
        match err {
            FlybyError::InvalidPosition { .. } => Self::InvalidPosition,
            FlybyError::InvalidVelocity { .. } => Self::InvalidVelocity,
            FlybyError::InvalidTimeStep(_) => Self::InvalidTimeStep,
            FlybyError::InvalidTotalTime(_) => Self::InvalidTotalTime,
            FlybyError::TooManySamples(_) => Self::TooManySamples,
        }
    }
}

/// Integrates a trajectory and hands ownership to the caller.
/// Returns null and writes the failure to `status` (if non-null) when the inputs are rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_Integrate(
    s_x0: f64,
    s_y0: f64,
    v_x0: f64,
    v_y0: f64,
    time_step: f64,
    total_time: f64,
    planet_mass: f64,
    planet_radius: f64,
    status: *mut FlybyStatus,
) -> *mut Trajectory {
    let config = SimulationConfig::from_scalars(s_x0, s_y0, v_x0, v_y0, time_step, total_time);
    let planet = PlanetModel::new(planet_mass, planet_radius);

    let (code, handle) = match integrator::integrate(config, planet) {
        Ok(trajectory) => (FlybyStatus::Ok, Box::into_raw(Box::new(trajectory))),
        Err(err) => (FlybyStatus::from(&err), std::ptr::null_mut()),
    };

    if let Some(out) = unsafe { status.as_mut() } {
        *out = code;
    }
    handle
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_Destroy(handle: *mut Trajectory) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_GetSampleCount(handle: *const Trajectory) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |t| t.len())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_GetTimes(handle: *const Trajectory) -> *const f64 {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |t| t.times().as_ptr())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_GetAccelerations(handle: *const Trajectory) -> *const Vector2 {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |t| t.accelerations().as_ptr())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_GetVelocities(handle: *const Trajectory) -> *const Vector2 {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |t| t.velocities().as_ptr())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Trajectory_GetPositions(handle: *const Trajectory) -> *const Vector2 {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |t| t.positions().as_ptr())
}
