use crate::Vector2;

/// Gravitational constant in N·m²/kg².
pub const G: f64 = 6.67e-11;

/// Gravitational acceleration at `position` (relative to the planet centre)
/// due to a planet of mass `planet_mass`.
///
/// Magnitude is `G·M/s²`, directed from the spacecraft towards the planet.
/// A zero `position` is not guarded against: the result is NaN.
#[inline(always)]
pub fn acceleration(position: Vector2, planet_mass: f64) -> Vector2 {
    let s = position.mag();
    let a = G * planet_mass / (s * s);

    // Unit vector pointing at the planet centre
    let toward_x = -position.x / s;
    let toward_y = -position.y / s;

    Vector2::new(a * toward_x, a * toward_y)
}
