//! Earth Rotation Angle and Greenwich/local mean sidereal time.
//!
//! UT1 is approximated by UTC (|UT1 − UTC| < 0.9 s), which moves a horizon
//! crossing by well under a second.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::Instant;
use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Sidereal rotation rate relative to the mean Sun, in revolutions per UT day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in degrees [0, 360) at a UT Julian Date.
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + SIDEREAL_RATE * du;
    (turns.rem_euclid(1.0) * 360.0).rem_euclid(360.0)
}

/// Greenwich Mean Sidereal Time in degrees [0, 360) at a UT Julian Date.
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local mean sidereal time in degrees for an observer at `longitude_deg` (east positive).
pub fn local_sidereal_time_deg(instant: Instant, longitude_deg: f64) -> f64 {
    (gmst_deg(instant.jd_utc()) + longitude_deg).rem_euclid(360.0)
}
