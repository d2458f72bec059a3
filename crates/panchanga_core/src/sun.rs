//! Geocentric solar longitude from the low-accuracy theory of Meeus ch. 25.
//!
//! Accuracy is about 0.01° in longitude, i.e. under a minute of time for a
//! tithi or yoga boundary.

use crate::nutation::nutation_longitude_deg;

/// Constant of aberration in arcseconds (divided by the distance in AU).
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Geometric mean longitude, mean anomaly and orbital eccentricity.
fn mean_elements(t: f64) -> (f64, f64, f64) {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    (l0, m, e)
}

/// True geometric longitude (mean equinox of date) in degrees, and the
/// Earth–Sun distance in AU.
pub fn true_longitude_and_distance(t: f64) -> (f64, f64) {
    let (l0, m, e) = mean_elements(t);
    let mr = m.to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mr.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mr).sin()
        + 0.000289 * (3.0 * mr).sin();
    let true_lon = l0 + c;
    let v = (m + c).to_radians();
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());
    (true_lon.rem_euclid(360.0), r)
}

/// Apparent longitude (true equinox of date, aberration applied), degrees [0, 360).
pub fn apparent_longitude_deg(t: f64) -> f64 {
    let (lon, r) = true_longitude_and_distance(t);
    let aberration = ABERRATION_ARCSEC / r / 3600.0;
    (lon + nutation_longitude_deg(t) - aberration).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// 1992 October 13.0 TD.
    const T_25A: f64 = (2_448_908.5 - 2_451_545.0) / 36525.0;

    #[test]
    fn meeus_example_25a_true_longitude() {
        let (lon, r) = true_longitude_and_distance(T_25A);
        assert_abs_diff_eq!(lon, 199.90988, epsilon = 0.001);
        assert_abs_diff_eq!(r, 0.99766, epsilon = 0.0001);
    }

    #[test]
    fn meeus_example_25a_apparent_longitude() {
        let lon = apparent_longitude_deg(T_25A);
        assert_abs_diff_eq!(lon, 199.90895, epsilon = 0.002);
    }

    #[test]
    fn moves_about_one_degree_per_day() {
        let a = apparent_longitude_deg(0.25);
        let b = apparent_longitude_deg(0.25 + 1.0 / 36525.0);
        let rate = (b - a).rem_euclid(360.0);
        assert!((0.95..1.03).contains(&rate), "rate = {rate}");
    }
}
