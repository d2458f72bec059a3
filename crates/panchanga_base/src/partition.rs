//! Equal partitioning of the day and night spans.

use panchanga_core::SunTimes;
use panchanga_time::Instant;

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub start: Instant,
    pub end: Instant,
}

impl TimeSpan {
    pub fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, t: Instant) -> bool {
        self.start <= t && t < self.end
    }
}

/// Day or night half of a Vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    /// Sunrise to sunset.
    Day,
    /// Sunset to the next sunrise.
    Night,
}

impl DayPart {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Sunrise, sunset and the following sunrise of one Vedic day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayBounds {
    pub sunrise: Instant,
    pub sunset: Instant,
    pub next_sunrise: Instant,
}

impl DayBounds {
    /// Bounds from three instants, `None` unless strictly increasing.
    pub fn new(sunrise: Instant, sunset: Instant, next_sunrise: Instant) -> Option<Self> {
        (sunrise < sunset && sunset < next_sunrise).then_some(Self {
            sunrise,
            sunset,
            next_sunrise,
        })
    }

    /// Bounds from solver output for two consecutive dates. `None` when any
    /// of the three crossings is missing.
    pub fn from_sun_times(today: &SunTimes, tomorrow: &SunTimes) -> Option<Self> {
        Self::new(today.sunrise?, today.sunset?, tomorrow.sunrise?)
    }

    pub fn span(&self, part: DayPart) -> TimeSpan {
        match part {
            DayPart::Day => TimeSpan::new(self.sunrise, self.sunset),
            DayPart::Night => TimeSpan::new(self.sunset, self.next_sunrise),
        }
    }

    /// The whole Vedic day, sunrise to next sunrise.
    pub fn vedic_day(&self) -> TimeSpan {
        TimeSpan::new(self.sunrise, self.next_sunrise)
    }
}

/// Day and night spans placed independently of each other.
///
/// The day half needs only sunrise and sunset, so it survives a missing
/// next sunrise. Each half is `None` unless both ends exist and are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayHalves {
    pub day: Option<TimeSpan>,
    pub night: Option<TimeSpan>,
}

impl DayHalves {
    pub fn from_crossings(
        sunrise: Option<Instant>,
        sunset: Option<Instant>,
        next_sunrise: Option<Instant>,
    ) -> Self {
        let half = |start: Option<Instant>, end: Option<Instant>| {
            let (start, end) = (start?, end?);
            (start < end).then(|| TimeSpan::new(start, end))
        };
        Self {
            day: half(sunrise, sunset),
            night: half(sunset, next_sunrise),
        }
    }

    pub fn span(&self, part: DayPart) -> Option<TimeSpan> {
        match part {
            DayPart::Day => self.day,
            DayPart::Night => self.night,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.night.is_none()
    }
}

impl From<&DayBounds> for DayHalves {
    fn from(bounds: &DayBounds) -> Self {
        Self {
            day: Some(bounds.span(DayPart::Day)),
            night: Some(bounds.span(DayPart::Night)),
        }
    }
}

/// Split `span` into `n` contiguous equal segments.
///
/// Segment `i` ends exactly where segment `i + 1` starts, the first starts at
/// `span.start` and the last ends at `span.end`. `n == 0` yields nothing.
pub fn partition(span: TimeSpan, n: usize) -> Vec<TimeSpan> {
    if n == 0 {
        return Vec::new();
    }
    let step = span.duration_seconds() / n as f64;
    let boundary = |i: usize| {
        if i == n {
            span.end
        } else {
            span.start + step * i as f64
        }
    };
    (0..n)
        .map(|i| TimeSpan::new(boundary(i), boundary(i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(s: f64) -> Instant {
        Instant::from_j2000_seconds(s)
    }

    #[test]
    fn bounds_require_order() {
        assert!(DayBounds::new(t(0.0), t(10.0), t(20.0)).is_some());
        assert!(DayBounds::new(t(0.0), t(0.0), t(20.0)).is_none());
        assert!(DayBounds::new(t(0.0), t(30.0), t(20.0)).is_none());
    }

    #[test]
    fn bounds_from_missing_sunrise() {
        let today = SunTimes {
            sunrise: None,
            sunset: Some(t(10.0)),
        };
        let tomorrow = SunTimes {
            sunrise: Some(t(20.0)),
            sunset: Some(t(30.0)),
        };
        assert!(DayBounds::from_sun_times(&today, &tomorrow).is_none());
    }

    #[test]
    fn halves_keep_day_without_next_sunrise() {
        let h = DayHalves::from_crossings(Some(t(0.0)), Some(t(10.0)), None);
        assert_eq!(h.day, Some(TimeSpan::new(t(0.0), t(10.0))));
        assert_eq!(h.night, None);
        assert!(!h.is_empty());

        let h = DayHalves::from_crossings(None, Some(t(10.0)), Some(t(20.0)));
        assert_eq!(h.day, None);
        assert_eq!(h.span(DayPart::Night), Some(TimeSpan::new(t(10.0), t(20.0))));

        assert!(DayHalves::from_crossings(Some(t(10.0)), Some(t(0.0)), None).is_empty());
    }

    #[test]
    fn halves_from_bounds() {
        let b = DayBounds::new(t(0.0), t(10.0), t(20.0)).unwrap();
        let h = DayHalves::from(&b);
        assert_eq!(h.span(DayPart::Day), Some(b.span(DayPart::Day)));
        assert_eq!(h.span(DayPart::Night), Some(b.span(DayPart::Night)));
    }

    #[test]
    fn partition_zero() {
        assert!(partition(TimeSpan::new(t(0.0), t(1.0)), 0).is_empty());
    }

    #[test]
    fn contains_half_open() {
        let s = TimeSpan::new(t(0.0), t(10.0));
        assert!(s.contains(t(0.0)));
        assert!(!s.contains(t(10.0)));
    }

    proptest! {
        #[test]
        fn partition_is_exact(start in -1.0e9f64..1.0e9, len in 1.0f64..90_000.0, n in 1usize..32) {
            let span = TimeSpan::new(t(start), t(start + len));
            let parts = partition(span, n);
            prop_assert_eq!(parts.len(), n);
            prop_assert_eq!(parts[0].start, span.start);
            prop_assert_eq!(parts[n - 1].end, span.end);
            for w in parts.windows(2) {
                prop_assert_eq!(w[0].end, w[1].start);
            }
            let total: f64 = parts.iter().map(TimeSpan::duration_seconds).sum();
            prop_assert!((total - span.duration_seconds()).abs() < 1e-6);
        }
    }
}
