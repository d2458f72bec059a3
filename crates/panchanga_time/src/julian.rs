//! Julian Date arithmetic on the proleptic Gregorian calendar.
//!
//! Algorithms follow Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fractional part (e.g. `20.5` is noon on the 20th).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day
        + b as f64
        - 1524.5
}

/// Convert a Julian Date to a Gregorian calendar date.
///
/// Returns `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian Day Number (integer day count beginning at noon) containing `jd`.
pub fn julian_day_number(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}

/// Convert a Julian Date to seconds past J2000.0 on the same time scale.
pub fn jd_to_j2000_seconds(jd: f64) -> f64 {
    (jd - J2000_JD) * SECONDS_PER_DAY
}

/// Convert seconds past J2000.0 back to a Julian Date on the same time scale.
pub fn j2000_seconds_to_jd(s: f64) -> f64 {
    J2000_JD + s / SECONDS_PER_DAY
}

/// Julian centuries since J2000.0 for a Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
