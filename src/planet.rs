/// The single gravitating planet a spacecraft moves around.
/// Read-only to the integrator.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetModel {
    /// Mass in kilograms.
    pub mass: f64,
    /// Surface radius in meters.
    pub radius: f64,
}

impl Default for PlanetModel {
    fn default() -> Self {
        Self::EARTH
    }
}

impl PlanetModel {
    pub const EARTH: Self = Self::new(5.972e24, 6.371e6);

    pub const fn new(mass: f64, radius: f64) -> Self {
        Self { mass, radius }
    }
}
