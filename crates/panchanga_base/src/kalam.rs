//! Rahu Kaal, Yamaganda and Gulikai windows.
//!
//! Day and night are each split into eight equal segments. A weekday table
//! picks the day segment for each window; the night window uses the day
//! table of the weekday four days ahead.

use crate::partition::{DayBounds, DayHalves, DayPart, TimeSpan, partition};
use crate::vara::Vara;

/// Segments per day or night half.
pub const KALAM_SEGMENTS: usize = 8;

// 1-based day segment, indexed Sunday..Saturday.
const RAHU: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];
const YAMAGANDA: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKA: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Inauspicious window kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KalamKind {
    RahuKaal,
    Yamaganda,
    Gulikai,
}

pub const ALL_KALAMS: [KalamKind; 3] = [KalamKind::RahuKaal, KalamKind::Yamaganda, KalamKind::Gulikai];

impl KalamKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::Gulikai => "Gulikai Kaal",
        }
    }

    /// 1-based segment (1..=8) of `part` that this window occupies on `vara`.
    pub const fn segment(self, vara: Vara, part: DayPart) -> u8 {
        let row = match part {
            DayPart::Day => vara.index(),
            DayPart::Night => (vara.index() + 4) % 7,
        };
        let table = match self {
            Self::RahuKaal => &RAHU,
            Self::Yamaganda => &YAMAGANDA,
            Self::Gulikai => &GULIKA,
        };
        table[row as usize]
    }
}

/// One placed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalamWindow {
    pub kind: KalamKind,
    pub part: DayPart,
    /// 1-based segment number.
    pub segment: u8,
    pub span: TimeSpan,
}

impl KalamWindow {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The eight equal segments of the day or night half.
pub fn kalam_segments(bounds: &DayBounds, part: DayPart) -> Vec<TimeSpan> {
    partition(bounds.span(part), KALAM_SEGMENTS)
}

/// Windows of every half that is present, in start order. A half without
/// both of its crossings contributes nothing.
pub fn kalam_windows(halves: &DayHalves, vara: Vara) -> Vec<KalamWindow> {
    let mut out = Vec::with_capacity(2 * ALL_KALAMS.len());
    for part in [DayPart::Day, DayPart::Night] {
        let Some(span) = halves.span(part) else {
            continue;
        };
        let segments = partition(span, KALAM_SEGMENTS);
        for kind in ALL_KALAMS {
            let segment = kind.segment(vara, part);
            out.push(KalamWindow {
                kind,
                part,
                segment,
                span: segments[usize::from(segment - 1)],
            });
        }
    }
    out.sort_by(|a, b| {
        a.span
            .start
            .j2000_seconds()
            .total_cmp(&b.span.start.j2000_seconds())
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use panchanga_time::Instant;

    fn bounds() -> DayBounds {
        // 06:00 sunrise, 18:00 sunset, 06:00 next sunrise (seconds).
        let base = 800_000_000.0;
        DayBounds::new(
            Instant::from_j2000_seconds(base),
            Instant::from_j2000_seconds(base + 43_200.0),
            Instant::from_j2000_seconds(base + 86_400.0),
        )
        .unwrap()
    }

    #[test]
    fn day_durations_sum_to_daylight() {
        let b = bounds();
        let total: f64 = kalam_segments(&b, DayPart::Day)
            .iter()
            .map(TimeSpan::duration_seconds)
            .sum();
        assert_abs_diff_eq!(total, b.sunset - b.sunrise, epsilon = 1e-6);
    }

    #[test]
    fn sunday_rahu_is_last_segment() {
        let b = bounds();
        let w = kalam_windows(&DayHalves::from(&b), Vara::Ravivara);
        let rahu = w
            .iter()
            .find(|w| w.kind == KalamKind::RahuKaal && w.part == DayPart::Day)
            .unwrap();
        assert_eq!(rahu.segment, 8);
        assert_eq!(rahu.span.end, b.sunset);
        assert_abs_diff_eq!(rahu.span.duration_seconds(), 5400.0, epsilon = 1e-6);
    }

    #[test]
    fn monday_table() {
        assert_eq!(KalamKind::RahuKaal.segment(Vara::Somavara, DayPart::Day), 2);
        assert_eq!(KalamKind::Yamaganda.segment(Vara::Somavara, DayPart::Day), 4);
        assert_eq!(KalamKind::Gulikai.segment(Vara::Somavara, DayPart::Day), 6);
    }

    #[test]
    fn night_uses_fifth_weekday() {
        // Sunday night follows Thursday's day table.
        assert_eq!(KalamKind::RahuKaal.segment(Vara::Ravivara, DayPart::Night), 6);
        assert_eq!(KalamKind::Gulikai.segment(Vara::Ravivara, DayPart::Night), 3);
    }

    #[test]
    fn windows_sorted_and_in_range() {
        let b = bounds();
        for vara in crate::vara::ALL_VARAS {
            let w = kalam_windows(&DayHalves::from(&b), vara);
            assert_eq!(w.len(), 6);
            for win in &w {
                assert!((1..=8).contains(&win.segment));
                let part = b.span(win.part);
                assert!(part.start <= win.span.start && win.span.end <= part.end);
            }
            for pair in w.windows(2) {
                assert!(pair[0].span.start <= pair[1].span.start);
            }
        }
    }

    #[test]
    fn missing_bounds_give_nothing() {
        assert!(kalam_windows(&DayHalves::default(), Vara::Ravivara).is_empty());
    }

    #[test]
    fn day_windows_without_next_sunrise() {
        let b = bounds();
        let halves = DayHalves::from_crossings(Some(b.sunrise), Some(b.sunset), None);
        let w = kalam_windows(&halves, Vara::Ravivara);
        assert_eq!(w.len(), 3);
        assert!(w.iter().all(|w| w.part == DayPart::Day));
        let full = kalam_windows(&DayHalves::from(&b), Vara::Ravivara);
        for win in &w {
            assert!(full.contains(win));
        }
    }
}
