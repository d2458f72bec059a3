//! Tithi (lunar day) classification from Moon−Sun elongation.
//!
//! A synodic month holds 30 tithis of 12° elongation each. The first 15 are
//! the waxing (Shukla) fortnight, the rest the waning (Krishna) fortnight.

use crate::util::segment_of;

/// Elongation covered by one tithi, in degrees.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Tithis per synodic month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight, elongation in [0, 180).
    Shukla,
    /// Waning fortnight, elongation in [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

const DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dvitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dvadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// One of the 30 tithis, by 0-based index within the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tithi(u8);

impl Tithi {
    /// Tithi with the given 0-based index, or `None` outside 0..30.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < TITHI_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// 0-based index within the month (0..30).
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn paksha(self) -> Paksha {
        if self.0 < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based number within the fortnight (1..=15).
    pub const fn number(self) -> u8 {
        self.0 % 15 + 1
    }

    /// Name of the tithi. Number 15 is Purnima in the Shukla fortnight and
    /// Amavasya in the Krishna fortnight.
    pub const fn name(self) -> &'static str {
        match (self.number(), self.paksha()) {
            (15, Paksha::Shukla) => "Purnima",
            (15, Paksha::Krishna) => "Amavasya",
            (n, _) => DAY_NAMES[(n - 1) as usize],
        }
    }

    /// The tithi that follows, wrapping Amavasya to Shukla Pratipada.
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % TITHI_COUNT)
    }
}

/// Tithi at a given elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// Fraction of the tithi elapsed, in [0, 1).
    pub fraction_complete: f64,
    /// Degrees of elongation into the tithi, in [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify an elongation (Moon − Sun, degrees). Out-of-range input is
/// normalized first.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let (idx, fraction) = segment_of(elongation_deg, TITHI_SPAN_DEG, TITHI_COUNT);
    TithiPosition {
        tithi: Tithi(idx),
        fraction_complete: fraction,
        degrees_in_tithi: fraction * TITHI_SPAN_DEG,
    }
}
