use crate::{
    error::FlybyError,
    integrator::{self, SimulationConfig},
    planet::PlanetModel,
    trajectory::Trajectory,
};

use rayon::prelude::*;

/// Integrates many independent scenarios around the same planet in parallel.
///
/// Each run is its own sequential recurrence; only whole runs are spread across
/// threads. Results come back in the order of `configs`.
pub fn integrate_all(
    configs: &[SimulationConfig],
    planet: PlanetModel,
) -> Vec<Result<Trajectory, FlybyError>> {
    configs
        .par_iter()
        .map(|&config| integrator::integrate(config, planet))
        .collect()
}

/// Closest approach distance of every valid scenario, `None` where the run was rejected
/// or never held a finite position.
pub fn closest_approaches(configs: &[SimulationConfig], planet: PlanetModel) -> Vec<Option<f64>> {
    configs
        .par_iter()
        .map(|&config| {
            integrator::integrate(config, planet)
                .ok()
                .and_then(|trajectory| trajectory.closest_approach())
                .map(|(_, distance)| distance)
        })
        .collect()
}
