//! Broken-down UTC date/time and civil dates.
//!
//! `UtcTime` is a display and construction aid; all arithmetic goes through
//! [`Instant`](crate::Instant). `CivilDate` names a calendar day without a
//! time of day, as consumed by sunrise solvers.

use std::fmt;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar, julian_day_number};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check field ranges. Leap seconds (`second` in [60, 61)) are rejected.
    pub fn validate(&self) -> Result<(), TimeError> {
        CivilDate::new(self.year, self.month, self.day)?;
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be in 0..=59"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Julian Date (UTC) of this moment.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Broken-down time for a Julian Date (UTC).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = ((total_seconds / 3600.0).floor() as u32).min(23);
        let minute = (((total_seconds % 3600.0) / 60.0).floor() as u32).min(59);
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// The calendar day of this moment.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut second = self.second.round() as u32;
        let mut minute = self.minute;
        let mut hour = self.hour;
        let mut date = self.date();
        if second >= 60 {
            second -= 60;
            minute += 1;
        }
        if minute >= 60 {
            minute -= 60;
            hour += 1;
        }
        if hour >= 24 {
            hour -= 24;
            date = date.next();
        }
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            date.year, date.month, date.day, hour, minute, second
        )
    }
}

/// A proleptic Gregorian calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Date at 0h UT of this day.
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Julian Day Number of this day.
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.jd_midnight() + 0.5)
    }

    /// The date for a Julian Day Number.
    pub fn from_julian_day_number(jdn: i64) -> Self {
        let (year, month, day) = jd_to_calendar(jdn as f64);
        Self {
            year,
            month,
            day: day.floor() as u32,
        }
    }

    /// Date shifted by a whole number of days.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_julian_day_number(self.julian_day_number() + days)
    }

    pub fn next(&self) -> Self {
        self.add_days(1)
    }

    pub fn previous(&self) -> Self {
        self.add_days(-1)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2025, 7, 20, 19, 0, 0.0);
        assert_eq!(t.year, 2025);
        assert_eq!(t.hour, 19);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_rounds_up_across_minute() {
        let t = UtcTime::new(2024, 1, 15, 23, 59, 59.7);
        assert_eq!(t.to_string(), "2024-01-16T00:00:00Z");
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(2025, 7, 20, 12, 12, 30.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2025, 7, 20));
        assert_eq!((back.hour, back.minute), (12, 12));
        assert!((back.second - 30.0).abs() < 1e-3, "second = {}", back.second);
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(UtcTime::new(2025, 13, 1, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2025, 2, 29, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 2, 29, 0, 0, 0.0).validate().is_ok());
        assert!(UtcTime::new(2025, 1, 1, 24, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2025, 1, 1, 0, 0, 60.0).validate().is_err());
    }

    #[test]
    fn civil_date_neighbours() {
        let d = CivilDate::new(2025, 2, 28).unwrap();
        assert_eq!(d.next(), CivilDate::new(2025, 3, 1).unwrap());
        let d = CivilDate::new(2025, 1, 1).unwrap();
        assert_eq!(d.previous(), CivilDate::new(2024, 12, 31).unwrap());
    }

    #[test]
    fn civil_date_jdn() {
        let d = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(d.julian_day_number(), 2_451_545);
        assert_eq!(CivilDate::from_julian_day_number(2_451_545), d);
    }

    #[test]
    fn civil_date_display() {
        let d = CivilDate::new(2025, 7, 20).unwrap();
        assert_eq!(d.to_string(), "2025-07-20");
    }
}
