//! Low-precision nutation (four-term series, ~0.5″ in longitude).
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 22, with the
//! lunar node polynomial from the same chapter.

/// Mean longitude of the Moon's ascending node, degrees.
pub fn lunar_node_longitude_deg(t: f64) -> f64 {
    125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0
}

/// Nutation in longitude (Δψ) and obliquity (Δε), both in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let om = lunar_node_longitude_deg(t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    let deps = 9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();
    (dpsi, deps)
}

/// Nutation in longitude in degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_arcsec(t).0 / 3600.0
}
