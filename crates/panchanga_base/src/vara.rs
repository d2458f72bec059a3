//! Vara (weekday) from the Julian Day Number.
//!
//! The weekday follows from the JDN alone: JDN 0 is a Monday, so
//! `(JDN + 1) mod 7` counts from Sunday.

use panchanga_time::Instant;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VARAS: [Vara; 7] = [
    Vara::Ravivara,
    Vara::Somavara,
    Vara::Mangalavara,
    Vara::Budhavara,
    Vara::Guruvara,
    Vara::Shukravara,
    Vara::Shanivara,
];

impl Vara {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_VARAS[(index % 7) as usize]
    }

    pub const fn next(self) -> Self {
        Self::from_index(self as u8 + 1)
    }
}

/// Weekday of a Julian Day Number.
pub fn vara_from_jdn(jdn: i64) -> Vara {
    Vara::from_index((jdn + 1).rem_euclid(7) as u8)
}

/// Weekday of the local mean solar date containing `instant` at a
/// longitude (degrees, east positive).
pub fn vara_at(instant: Instant, longitude_deg: f64) -> Vara {
    vara_from_jdn(instant.local_julian_day_number(longitude_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_zero_is_monday() {
        assert_eq!(vara_from_jdn(0), Vara::Somavara);
    }

    #[test]
    fn y2k_is_saturday() {
        // 2000-01-01 has JDN 2451545
        assert_eq!(vara_from_jdn(2_451_545), Vara::Shanivara);
    }

    #[test]
    fn apollo_11_landing_sunday() {
        // 1969-07-20, JDN 2440423
        assert_eq!(vara_from_jdn(2_440_423).english_name(), "Sunday");
    }

    #[test]
    fn negative_jdn() {
        assert_eq!(vara_from_jdn(-1), Vara::Ravivara);
    }

    #[test]
    fn kelowna_sunrise_sunday() {
        let t = Instant::from_jd_utc(2_460_877.008_680_6);
        assert_eq!(vara_at(t, -119.496), Vara::Ravivara);
    }

    #[test]
    fn east_longitude_advances_date() {
        // 2025-07-20 20:00 UTC is already Monday in local mean time at 90E
        let t = Instant::from_jd_utc(2_460_877.333_333_3);
        assert_eq!(vara_at(t, 0.0), Vara::Ravivara);
        assert_eq!(vara_at(t, 90.0), Vara::Somavara);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Vara::Shanivara.next(), Vara::Ravivara);
    }
}
