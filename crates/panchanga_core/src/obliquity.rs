//! Obliquity of the ecliptic and ecliptic → equatorial conversion.

use crate::nutation::nutation_arcsec;

/// IAU 2006 mean obliquity of the ecliptic in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5;
    arcsec / 3600.0
}

/// True obliquity (mean plus nutation in obliquity) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_arcsec(t).1 / 3600.0
}

/// Convert ecliptic longitude/latitude to right ascension/declination.
///
/// All angles in degrees; RA is returned in [0, 360).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();

    let ra = (sl * ce - (sb / cb) * se).atan2(cl);
    let dec = (sb * ce + cb * se * sl).clamp(-1.0, 1.0).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}
