//! Geocentric lunar longitude and latitude from the main terms of the
//! ELP-2000/82 series as tabulated by Meeus, ch. 47 (Tables 47.A/47.B).
//!
//! Longitude carries all 59 tabulated terms (~10″); latitude carries the
//! 30 largest terms (~0.001°).

use crate::nutation::nutation_longitude_deg;

/// Longitude terms: multiples of D, M, M′, F and the amplitude in 1e-6 degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),   (0, 1, 0, 0, -185_116),   (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),   (2, -1, -1, 0, 57_066),   (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),   (0, 1, -1, 0, -40_923),   (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),   (2, 0, 0, -2, 15_327),    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),   (4, 0, -1, 0, 10_675),    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),    (2, 1, -1, 0, -7_888),    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),   (1, 1, 0, 0, 4_987),      (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994),     (4, 0, 0, 0, 3_861),      (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689),   (2, 0, -1, 2, -2_602),    (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348),    (2, -2, 0, 0, 2_236),     (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069),    (2, -2, -1, 0, 2_048),    (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595),    (4, -1, -1, 0, 1_215),    (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892),     (2, 1, 1, 0, -810),       (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713),     (2, 2, -1, 0, -700),      (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596),     (4, 0, 1, 0, 549),        (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520),      (1, 0, -2, 0, -487),      (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381),     (1, 1, 1, 0, 351),        (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330),      (2, -1, 2, 0, 327),       (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299),      (2, 0, 3, 0, 294),
];

/// Latitude terms: multiples of D, M, M′, F and the amplitude in 1e-6 degrees.
#[rustfmt::skip]
static LATITUDE_TERMS: [(i8, i8, i8, i8, i32); 30] = [
    (0, 0, 0, 1, 5_128_122), (0, 0, 1, 1, 280_602),  (0, 0, 1, -1, 277_693),
    (2, 0, 0, -1, 173_237),  (2, 0, -1, 1, 55_413),  (2, 0, -1, -1, 46_271),
    (2, 0, 0, 1, 32_573),    (0, 0, 2, 1, 17_198),   (2, 0, 1, -1, 9_266),
    (0, 0, 2, -1, 8_822),    (2, -1, 0, -1, 8_216),  (2, 0, -2, -1, 4_324),
    (2, 0, 1, 1, 4_200),     (2, 1, 0, -1, -3_359),  (2, -1, -1, 1, 2_463),
    (2, -1, 0, 1, 2_211),    (2, -1, -1, -1, 2_065), (0, 1, -1, -1, -1_870),
    (4, 0, -1, -1, 1_828),   (0, 1, 0, 1, -1_794),   (0, 0, 0, 3, -1_749),
    (0, 1, -1, 1, -1_565),   (1, 0, 0, 1, -1_491),   (0, 1, 1, 1, -1_475),
    (0, 1, 1, -1, -1_410),   (0, 1, 0, -1, -1_344),  (1, 0, 0, -1, -1_335),
    (0, 0, 3, 1, 1_107),     (4, 0, 0, -1, 1_021),   (4, 0, -1, 1, 833),
];

/// Fundamental arguments in degrees: L′, D, M, M′, F.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    [lp, d, m, mp, f]
}

/// Sum a periodic series; terms in the solar anomaly are scaled by E^|m|.
fn sum_series(terms: &[(i8, i8, i8, i8, i32)], args: &[f64; 5], e: f64) -> f64 {
    let [_, d, m, mp, f] = *args;
    terms
        .iter()
        .map(|&(nd, nm, nmp, nf, amp)| {
            let angle = (nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f)
                .to_radians();
            let scale = match nm.unsigned_abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            amp as f64 * scale * angle.sin()
        })
        .sum()
}

/// Geometric longitude (mean equinox of date) and latitude in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn geometric_longitude_latitude(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let [lp, _, _, mp, f] = args;
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let (lpr, mpr, fr) = (lp.to_radians(), mp.to_radians(), f.to_radians());

    let sigma_l = sum_series(&LONGITUDE_TERMS, &args, e)
        + 3958.0 * a1.sin()
        + 1962.0 * (lpr - fr).sin()
        + 318.0 * a2.sin();
    let sigma_b = sum_series(&LATITUDE_TERMS, &args, e) - 2235.0 * lpr.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - fr).sin()
        + 175.0 * (a1 + fr).sin()
        + 127.0 * (lpr - mpr).sin()
        - 115.0 * (lpr + mpr).sin();

    let lon = (lp + sigma_l / 1e6).rem_euclid(360.0);
    (lon, sigma_b / 1e6)
}

/// Apparent longitude (true equinox of date) in degrees [0, 360), and latitude.
pub fn apparent_longitude_latitude(t: f64) -> (f64, f64) {
    let (lon, lat) = geometric_longitude_latitude(t);
    ((lon + nutation_longitude_deg(t)).rem_euclid(360.0), lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1992 April 12, 0h TD.
    const T_47A: f64 = (2_448_724.5 - 2_451_545.0) / 36525.0;

    #[test]
    fn meeus_example_47a_longitude() {
        let (lon, _) = geometric_longitude_latitude(T_47A);
        assert!((lon - 133.162655).abs() < 0.001, "λ = {lon}");
    }

    #[test]
    fn meeus_example_47a_latitude() {
        let (_, lat) = geometric_longitude_latitude(T_47A);
        assert!((lat + 3.229126).abs() < 0.002, "β = {lat}");
    }

    #[test]
    fn meeus_example_47a_apparent() {
        let (lon, _) = apparent_longitude_latitude(T_47A);
        assert!((lon - 133.167265).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn mean_motion_about_thirteen_degrees_per_day() {
        let (a, _) = apparent_longitude_latitude(0.25);
        let (b, _) = apparent_longitude_latitude(0.25 + 1.0 / 36525.0);
        let rate = (b - a).rem_euclid(360.0);
        assert!((11.5..15.5).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn latitude_within_inclination() {
        for i in 0..100 {
            let (_, lat) = geometric_longitude_latitude(0.2 + i as f64 * 0.0007);
            assert!(lat.abs() < 5.4, "β = {lat}");
        }
    }
}
