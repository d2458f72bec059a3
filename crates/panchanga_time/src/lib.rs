//! Time representation for the panchanga engine.
//!
//! This crate provides:
//! - `Instant`, the single UTC-normalized absolute time used by every
//!   computation in the workspace
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - ΔT (TT − UT) for feeding dynamical-time series
//! - Greenwich and local mean sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};

pub use delta_t::{delta_t_at_jd, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, julian_day_number,
};
pub use sidereal::{SIDEREAL_RATE, earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};
pub use utc_time::{CivilDate, UtcTime};

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// An absolute point in time, stored as UTC seconds past J2000.0
/// (2000-01-01T12:00:00Z).
///
/// Leap seconds are not counted: a UTC day is always 86 400 s long here.
/// Dynamical time (TT) is derived on demand through ΔT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    utc_seconds: f64,
}

impl Instant {
    /// The J2000.0 epoch.
    pub const J2000: Instant = Instant { utc_seconds: 0.0 };

    /// Create an instant from UTC seconds past J2000.0.
    pub fn from_j2000_seconds(s: f64) -> Self {
        Self { utc_seconds: s }
    }

    /// Create an instant from a Julian Date in UTC.
    pub fn from_jd_utc(jd: f64) -> Self {
        Self {
            utc_seconds: julian::jd_to_j2000_seconds(jd),
        }
    }

    /// Create an instant from broken-down UTC fields.
    pub fn from_utc(utc: &UtcTime) -> Self {
        Self::from_jd_utc(utc.to_jd())
    }

    /// Create an instant from validated broken-down UTC fields.
    pub fn try_from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Ok(Self::from_utc(utc))
    }

    /// Create an instant from seconds since the Unix epoch.
    pub fn from_unix_seconds(s: f64) -> Self {
        Self::from_jd_utc(UNIX_EPOCH_JD + s / SECONDS_PER_DAY)
    }

    /// Create an instant from a `chrono` UTC timestamp.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let s = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
        Self::from_unix_seconds(s)
    }

    /// UTC seconds past J2000.0.
    pub fn j2000_seconds(self) -> f64 {
        self.utc_seconds
    }

    /// Julian Date in UTC.
    pub fn jd_utc(self) -> f64 {
        julian::j2000_seconds_to_jd(self.utc_seconds)
    }

    /// Julian Date in Terrestrial Time, via ΔT.
    pub fn jd_tt(self) -> f64 {
        let jd = self.jd_utc();
        jd + delta_t_at_jd(jd) / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        jd_to_centuries(self.jd_tt())
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(self) -> f64 {
        (self.jd_utc() - UNIX_EPOCH_JD) * SECONDS_PER_DAY
    }

    /// Broken-down UTC fields.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd(self.jd_utc())
    }

    /// Convert to a `chrono` UTC timestamp (rounded to the nanosecond).
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        let unix = self.unix_seconds();
        if !unix.is_finite() {
            return Err(TimeError::NonFinite);
        }
        let secs = unix.floor();
        let nanos = (((unix - secs) * 1e9).round() as u32).min(999_999_999);
        if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
            return Err(TimeError::OutOfRange("outside chrono timestamp range"));
        }
        DateTime::from_timestamp(secs as i64, nanos)
            .ok_or(TimeError::OutOfRange("outside chrono timestamp range"))
    }

    /// Calendar date of local mean solar time at `longitude_deg` (east positive).
    ///
    /// Local mean time is UTC shifted by `longitude / 15` hours. Display
    /// time zones play no part.
    pub fn local_mean_date(self, longitude_deg: f64) -> CivilDate {
        CivilDate::from_julian_day_number(self.local_julian_day_number(longitude_deg))
    }

    /// Julian Day Number of the local mean solar date at `longitude_deg`.
    pub fn local_julian_day_number(self, longitude_deg: f64) -> i64 {
        julian_day_number(self.jd_utc() + longitude_deg / 360.0)
    }

    /// The instant halfway between `self` and `other`.
    pub fn midpoint(self, other: Instant) -> Instant {
        Self {
            utc_seconds: 0.5 * (self.utc_seconds + other.utc_seconds),
        }
    }

    /// Shift by a signed number of seconds.
    pub fn add_seconds(self, s: f64) -> Instant {
        Self {
            utc_seconds: self.utc_seconds + s,
        }
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    fn add(self, seconds: f64) -> Instant {
        self.add_seconds(seconds)
    }
}

impl Sub<f64> for Instant {
    type Output = Instant;

    fn sub(self, seconds: f64) -> Instant {
        self.add_seconds(-seconds)
    }
}

/// Difference in seconds.
impl Sub<Instant> for Instant {
    type Output = f64;

    fn sub(self, other: Instant) -> f64 {
        self.utc_seconds - other.utc_seconds
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utc())
    }
}
