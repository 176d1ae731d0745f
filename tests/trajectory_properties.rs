use flyby_trajectory::{
    FlybyError, G, PlanetModel, SimulationConfig, Vector2, acceleration, integrate, step_delta,
};

const EARTH: PlanetModel = PlanetModel::EARTH;

fn free_fall() -> SimulationConfig {
    SimulationConfig::new(Vector2::new(0.0, 1.0e7), Vector2::zero()).with_time(0.1, 1.0)
}

#[test]
fn repeated_runs_are_bit_identical() {
    let config = SimulationConfig::from_scalars(-2.0e7, 5.0e6, 4000.0, 1200.0, 5.0, 2000.0);
    let first = integrate(config, EARTH).unwrap();
    let second = integrate(config, EARTH).unwrap();

    for (a, b) in first.samples().zip(second.samples()) {
        assert_eq!(a.t.to_bits(), b.t.to_bits());
        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
        assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
        assert_eq!(a.acceleration.x.to_bits(), b.acceleration.x.to_bits());
        assert_eq!(a.acceleration.y.to_bits(), b.acceleration.y.to_bits());
    }
}

#[test]
fn one_second_steps_over_ten_seconds() {
    let config = SimulationConfig::from_scalars(0.0, 1.0e7, 0.0, 0.0, 1.0, 10.0);
    let trajectory = integrate(config, EARTH).unwrap();

    let expected: Vec<f64> = (0..=10).map(f64::from).collect();
    assert_eq!(trajectory.len(), 11);
    assert_eq!(trajectory.times(), expected.as_slice());
    assert_eq!(trajectory.accelerations().len(), 11);
    assert_eq!(trajectory.velocities().len(), 11);
    assert_eq!(trajectory.positions().len(), 11);
}

#[test]
fn first_sample_is_initial_state() {
    let config = SimulationConfig::from_scalars(8.1e6, 3.3e6, -512.25, 7.5, 2.0, 20.0);
    let first = integrate(config, EARTH).unwrap().sample(0).unwrap();

    assert_eq!(first.t, 0.0);
    assert_eq!(first.position, config.initial_position);
    assert_eq!(first.velocity, config.initial_velocity);
    assert_eq!(first.acceleration, acceleration(config.initial_position, EARTH.mass));
}

#[test]
fn origin_is_rejected_as_position() {
    let config = SimulationConfig::from_scalars(0.0, 0.0, 3.0, -3.0, 1.0, 10.0);
    let err = integrate(config, PlanetModel::new(EARTH.mass, 1.0)).unwrap_err();
    assert_eq!(err, FlybyError::InvalidPosition { distance: 0.0, radius: 1.0 });
}

#[test]
fn downward_velocity_is_rejected() {
    let config = SimulationConfig::from_scalars(0.0, 1.0e7, 0.0, -100.0, 1.0, 10.0);
    let err = integrate(config, EARTH).unwrap_err();
    assert_eq!(err, FlybyError::InvalidVelocity { vy: -100.0 });
    assert!(err.to_string().contains("-100"));
}

#[test]
fn acceleration_above_planet_points_down() {
    let r = 4.2e7;
    let acc = acceleration(Vector2::new(0.0, r), EARTH.mass);
    assert_eq!(acc.x, 0.0);
    assert_eq!(acc.y, -G * EARTH.mass / (r * r));
}

#[test]
fn free_fall_stays_on_y_axis() {
    let trajectory = integrate(free_fall(), EARTH).unwrap();
    assert_eq!(trajectory.len(), 11);

    for sample in trajectory.samples() {
        assert_eq!(sample.position.x, 0.0);
        assert_eq!(sample.velocity.x, 0.0);
    }

    let ys: Vec<f64> = trajectory.positions().iter().map(|p| p.y).collect();
    assert!(ys.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn free_fall_speeds_up() {
    let trajectory = integrate(free_fall(), EARTH).unwrap();
    let speeds: Vec<f64> = trajectory.velocities().iter().map(|v| -v.y).collect();
    assert!(speeds.windows(2).all(|w| w[1] > w[0]));

    // Roughly g(1e7 m) * 1 s after one second
    let g = G * EARTH.mass / 1.0e14;
    let last = trajectory.last().unwrap();
    assert!((last.velocity.y + g).abs() < 1e-3 * g);
}

#[test]
fn doubling_step_scales_deltas() {
    let acc = Vector2::new(-3.98, 0.5);
    let vel = Vector2::new(-10.0, 20.0);
    let single = step_delta(acc, vel, 0.25);
    let double = step_delta(acc, vel, 0.5);

    assert_eq!(double.velocity, single.velocity * 2.0);

    // Quadratic term: exactly 2x the linear part plus 4x the quadratic part
    let quad = acc * 0.5 * (0.25 * 0.25);
    let expected = (single.position - quad) * 2.0 + quad * 4.0;
    assert!((double.position - expected).mag() < 1e-12);
    assert!(double.position.x.abs() > 2.0 * single.position.x.abs());
}

#[test]
fn escape_speed_flyby_recedes() {
    let r = 1.0e7;
    let v_esc = (2.0 * G * EARTH.mass / r).sqrt();
    let config = SimulationConfig::from_scalars(0.0, r, 0.0, 2.0 * v_esc, 10.0, 3600.0);
    let trajectory = integrate(config, EARTH).unwrap();

    let (index, distance) = trajectory.closest_approach().unwrap();
    assert_eq!(index, 0);
    assert_eq!(distance, r);
    assert!(trajectory.last().unwrap().position.y > r);
    assert_eq!(trajectory.first_non_finite(), None);
}
