use crate::{Vector2, field::G, integrator::SimulationConfig, planet::PlanetModel};

/// Generates `n` reproducible flyby scenarios around `planet`.
/// - Start between 1.5 and 4 planet radii from the centre, at a random angle.
/// - Speed up to 1.5x the local escape velocity, with a non-negative y-component.
/// - Time step of 10 s over one hour.
pub fn random_flybys(n: usize, seed: u64, planet: PlanetModel) -> Vec<SimulationConfig> {
    let mut rng = fastrand::Rng::with_seed(seed);

    (0..n)
        .map(|_| {
            // Random angle and distance outside the surface
            let a = rng.f64() * std::f64::consts::TAU;
            let (sin, cos) = a.sin_cos();
            let r = planet.radius * (1.5 + 2.5 * rng.f64());
            let pos = Vector2::new(cos, sin) * r;

            // Escape velocity: v = sqrt(2GM / r)
            let v_esc = (2.0 * G * planet.mass / r).sqrt();
            let heading = rng.f64() * std::f64::consts::PI;
            let (vs, vc) = heading.sin_cos();
            let vel = Vector2::new(vc, vs) * (v_esc * 1.5 * rng.f64());

            SimulationConfig::new(pos, vel).with_time(10.0, 3600.0)
        })
        .collect()
}
