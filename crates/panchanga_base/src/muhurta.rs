//! Muhurtas: fifteen equal divisions of the day and of the night, and the
//! named windows placed on them.

use crate::partition::{DayBounds, DayHalves, DayPart, TimeSpan, partition};

/// Muhurtas per day or night half.
pub const MUHURTA_SEGMENTS: usize = 15;

const DAY_NAMES: [&str; MUHURTA_SEGMENTS] = [
    "Rudra",
    "Ahi",
    "Mitra",
    "Pitri",
    "Vasu",
    "Varaha",
    "Vishvedeva",
    "Vidhi",
    "Sutamukhi",
    "Puruhuta",
    "Vahini",
    "Naktanakara",
    "Varuna",
    "Aryaman",
    "Bhaga",
];

const NIGHT_NAMES: [&str; MUHURTA_SEGMENTS] = [
    "Girisha",
    "Ajapada",
    "Ahirbudhnya",
    "Pushya",
    "Ashvini",
    "Yama",
    "Agni",
    "Vidhatri",
    "Kanda",
    "Aditi",
    "Jiva",
    "Vishnu",
    "Dyumadgadyuti",
    "Brahma",
    "Samudra",
];

/// One of the thirty muhurtas of a Vedic day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muhurta {
    pub part: DayPart,
    /// 1-based position within its half (1..=15).
    pub number: u8,
    pub span: TimeSpan,
}

impl Muhurta {
    /// Traditional name, `None` when `number` is outside 1..=15.
    pub fn name(&self) -> Option<&'static str> {
        let names = match self.part {
            DayPart::Day => &DAY_NAMES,
            DayPart::Night => &NIGHT_NAMES,
        };
        let index = usize::from(self.number).checked_sub(1)?;
        names.get(index).copied()
    }
}

/// All thirty muhurtas, day then night.
pub fn muhurtas(bounds: &DayBounds) -> Vec<Muhurta> {
    [DayPart::Day, DayPart::Night]
        .into_iter()
        .flat_map(|part| {
            partition(bounds.span(part), MUHURTA_SEGMENTS)
                .into_iter()
                .zip(1u8..)
                .map(move |(span, number)| Muhurta { part, number, span })
        })
        .collect()
}

/// Named auspicious windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuhurtaKind {
    /// Eighth day muhurta, around local noon.
    Abhijit,
    /// Eleventh day muhurta.
    Vijaya,
    /// Eighth night muhurta, around local midnight.
    Nishita,
    /// Fourteenth night muhurta, before sunrise.
    Brahma,
}

pub const ALL_MUHURTA_KINDS: [MuhurtaKind; 4] = [
    MuhurtaKind::Abhijit,
    MuhurtaKind::Vijaya,
    MuhurtaKind::Nishita,
    MuhurtaKind::Brahma,
];

impl MuhurtaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abhijit => "Abhijit Muhurat",
            Self::Vijaya => "Vijaya Muhurat",
            Self::Nishita => "Nishita Muhurat",
            Self::Brahma => "Brahma Muhurat",
        }
    }

    pub const fn part(self) -> DayPart {
        match self {
            Self::Abhijit | Self::Vijaya => DayPart::Day,
            Self::Nishita | Self::Brahma => DayPart::Night,
        }
    }

    /// 1-based muhurta within its half.
    pub const fn number(self) -> u8 {
        match self {
            Self::Abhijit | Self::Nishita => 8,
            Self::Vijaya => 11,
            Self::Brahma => 14,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhurtaWindow {
    pub kind: MuhurtaKind,
    pub span: TimeSpan,
}

impl MuhurtaWindow {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The named windows of every half that is present, in start order.
pub fn muhurta_windows(halves: &DayHalves) -> Vec<MuhurtaWindow> {
    let day = halves
        .day
        .map(|span| partition(span, MUHURTA_SEGMENTS))
        .unwrap_or_default();
    let night = halves
        .night
        .map(|span| partition(span, MUHURTA_SEGMENTS))
        .unwrap_or_default();
    ALL_MUHURTA_KINDS
        .into_iter()
        .filter_map(|kind| {
            let segments = match kind.part() {
                DayPart::Day => &day,
                DayPart::Night => &night,
            };
            let span = *segments.get(usize::from(kind.number() - 1))?;
            Some(MuhurtaWindow { kind, span })
        })
        .collect()
}
