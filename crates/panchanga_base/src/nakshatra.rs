//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′ each, and
//! every nakshatra into 4 padas of 3°20′.

use crate::util::{normalize_360, segment_of};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Nakshatra with a 0-based index, or `None` outside 0..27.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 27 {
            Some(ALL_NAKSHATRAS[index as usize])
        } else {
            None
        }
    }

    /// The nakshatra that follows, wrapping Revati to Ashwini.
    pub const fn next(self) -> Self {
        ALL_NAKSHATRAS[((self as u8 + 1) % 27) as usize]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
    /// Fraction of the nakshatra elapsed, in [0, 1).
    pub fraction_complete: f64,
}

/// Determine nakshatra and pada from a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let (nak_idx, fraction) = segment_of(lon, NAKSHATRA_SPAN_DEG, 27);
    let degrees_in_nakshatra = lon - nak_idx as f64 * NAKSHATRA_SPAN_DEG;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8).min(3);
    let degrees_in_pada = (degrees_in_nakshatra - pada_idx as f64 * PADA_SPAN_DEG).max(0.0);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
        fraction_complete: fraction,
    }
}

/// Sidereal longitude from a nakshatra, pada (1-4) and offset into the pada.
pub fn longitude_from_position(nakshatra: Nakshatra, pada: u8, degrees_in_pada: f64) -> f64 {
    nakshatra.index() as f64 * NAKSHATRA_SPAN_DEG
        + (pada.clamp(1, 4) - 1) as f64 * PADA_SPAN_DEG
        + degrees_in_pada
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ashwini_start() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn krittika_reference() {
        let info = nakshatra_from_longitude(36.89);
        assert_eq!(info.nakshatra, Nakshatra::Krittika);
        assert_eq!(info.nakshatra.number(), 3);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn revati_end() {
        let info = nakshatra_from_longitude(359.99);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN_DEG - 1e-9).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN_DEG + 1e-9).pada, 2);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn index_roundtrip() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_index(i as u8), Some(*n));
        }
        assert_eq!(Nakshatra::Revati.next(), Nakshatra::Ashwini);
        assert!(Nakshatra::from_index(27).is_none());
    }

    #[test]
    fn names_nonempty() {
        for n in Nakshatra::all() {
            assert!(!n.name().is_empty());
        }
    }

    proptest! {
        #[test]
        fn number_and_pada_in_range(moon in 0.0f64..360.0) {
            let info = nakshatra_from_longitude(moon);
            prop_assert!((1..=27).contains(&info.nakshatra.number()));
            prop_assert!((1..=4).contains(&info.pada));
        }

        #[test]
        fn position_roundtrip(moon in 0.0f64..360.0) {
            let info = nakshatra_from_longitude(moon);
            let back = longitude_from_position(info.nakshatra, info.pada, info.degrees_in_pada);
            prop_assert!((back - moon).abs() < 1e-9, "{} vs {}", back, moon);
        }
    }
}
