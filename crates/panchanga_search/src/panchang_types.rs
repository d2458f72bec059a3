//! Types for panchanga classification results.

use panchanga_base::{
    Ayanamsa, AyanamsaSystem, DayBounds, DayHalves, Karana, KalamWindow, MuhurtaWindow, Nakshatra, Paksha,
    SiderealSnapshot, Tithi, Vara, Yoga,
};
use panchanga_core::GeoLocation;
use panchanga_time::{CivilDate, Instant};

use crate::transition_types::TransitionConfig;

/// Instant at which the day's elements are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Sunrise that opens the Vedic day containing the query instant.
    /// Falls back to the query instant when there is no sunrise.
    #[default]
    Sunrise,
    /// The query instant itself.
    Instant,
}

/// Configuration for [`panchanga_for_instant`](crate::panchanga_for_instant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaConfig {
    pub transition: TransitionConfig,
    pub anchor: Anchor,
    /// Also search backward for each element's start (default true).
    pub include_start_times: bool,
}

impl Default for PanchangaConfig {
    fn default() -> Self {
        Self {
            transition: TransitionConfig::default(),
            anchor: Anchor::Sunrise,
            include_start_times: true,
        }
    }
}

impl PanchangaConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        self.transition.validate()
    }
}

/// Sunrise bracket of the Vedic day containing an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VedicDay {
    /// Local mean solar date of the opening sunrise.
    pub date: CivilDate,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    /// Sunrise of the following date.
    pub next_sunrise: Option<Instant>,
}

impl VedicDay {
    /// Day/night bounds, `None` when any crossing is missing.
    pub fn bounds(&self) -> Option<DayBounds> {
        DayBounds::new(self.sunrise?, self.sunset?, self.next_sunrise?)
    }

    /// Day and night spans, each present when its own crossings are.
    pub fn halves(&self) -> DayHalves {
        DayHalves::from_crossings(self.sunrise, self.sunset, self.next_sunrise)
    }
}

/// Tithi (lunar day) classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub number: u8,
    /// Fraction of the tithi elapsed at the anchor.
    pub fraction_complete: f64,
    /// Start of this tithi, if searched and found.
    pub start: Option<Instant>,
    /// End of this tithi, if found within the search horizon.
    pub end: Option<Instant>,
    /// Tithi that begins at `end`.
    pub next: Tithi,
}

/// Moon's nakshatra classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangNakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    pub fraction_complete: f64,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub next: Nakshatra,
}

/// Yoga classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub fraction_complete: f64,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub next: Yoga,
}

/// Karana (half-tithi) classification result with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based karana slot within the synodic month (0..60).
    pub raw_index: u8,
    pub fraction_complete: f64,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub next: Karana,
}

/// Vara (weekday) classification result with sunrise boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaraInfo {
    pub vara: Vara,
    /// Fraction of the Vedic day (or the local mean day, without
    /// sunrises) elapsed at the query instant.
    pub fraction_complete: f64,
    /// Start of this Vedic day (sunrise).
    pub start: Option<Instant>,
    /// End of this Vedic day (next sunrise).
    pub end: Option<Instant>,
}

/// Which of the five elements a [`PanchangaElement`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    Vara,
}

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
            Self::Vara => "vara",
        }
    }

    /// Length of the element's cycle.
    pub const fn cycle_length(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
            Self::Vara => 7,
        }
    }
}

/// Uniform view of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaElement {
    pub kind: ElementKind,
    /// 0-based position in the cycle, below `kind.cycle_length()`.
    pub index: u8,
    pub name: &'static str,
    pub fraction_complete: f64,
    pub end: Option<Instant>,
}

/// Combined panchanga for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Panchanga {
    /// The query instant.
    pub instant: Instant,
    pub location: GeoLocation,
    /// Instant at which the elements were classified.
    pub anchor: Instant,
    pub system: &'static AyanamsaSystem,
    pub ayanamsa: Ayanamsa,
    pub snapshot: SiderealSnapshot,
    pub day: VedicDay,
    pub tithi: TithiInfo,
    pub nakshatra: PanchangNakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vara: VaraInfo,
    /// Rahu Kaal, Yamaganda and Gulikai, day and night.
    pub kalam: Vec<KalamWindow>,
    /// Abhijit, Vijaya, Nishita and Brahma muhurtas.
    pub muhurtas: Vec<MuhurtaWindow>,
}

impl Panchanga {
    pub fn sunrise(&self) -> Option<Instant> {
        self.day.sunrise
    }

    pub fn sunset(&self) -> Option<Instant> {
        self.day.sunset
    }

    /// The five elements in traditional order.
    pub fn elements(&self) -> [PanchangaElement; 5] {
        [
            PanchangaElement {
                kind: ElementKind::Tithi,
                index: self.tithi.tithi.index(),
                name: self.tithi.tithi.name(),
                fraction_complete: self.tithi.fraction_complete,
                end: self.tithi.end,
            },
            PanchangaElement {
                kind: ElementKind::Vara,
                index: self.vara.vara.index(),
                name: self.vara.vara.name(),
                fraction_complete: self.vara.fraction_complete,
                end: self.vara.end,
            },
            PanchangaElement {
                kind: ElementKind::Nakshatra,
                index: self.nakshatra.nakshatra.index(),
                name: self.nakshatra.nakshatra.name(),
                fraction_complete: self.nakshatra.fraction_complete,
                end: self.nakshatra.end,
            },
            PanchangaElement {
                kind: ElementKind::Yoga,
                index: self.yoga.yoga.index(),
                name: self.yoga.yoga.name(),
                fraction_complete: self.yoga.fraction_complete,
                end: self.yoga.end,
            },
            PanchangaElement {
                kind: ElementKind::Karana,
                index: self.karana.raw_index,
                name: self.karana.karana.name(),
                fraction_complete: self.karana.fraction_complete,
                end: self.karana.end,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let c = PanchangaConfig::default();
        assert_eq!(c.anchor, Anchor::Sunrise);
        assert!(c.include_start_times);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn vedic_day_without_sunrise_has_no_bounds() {
        let day = VedicDay {
            date: CivilDate::new(2025, 6, 21).unwrap(),
            sunrise: None,
            sunset: None,
            next_sunrise: None,
        };
        assert!(day.bounds().is_none());
        assert!(day.halves().is_empty());
    }

    #[test]
    fn cycle_lengths() {
        assert_eq!(ElementKind::Tithi.cycle_length(), 30);
        assert_eq!(ElementKind::Karana.cycle_length(), 60);
        assert_eq!(ElementKind::Vara.cycle_length(), 7);
    }
}
