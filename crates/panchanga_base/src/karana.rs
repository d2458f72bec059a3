//! Karana (half-tithi) classification.
//!
//! Each karana spans 6° of elongation, 60 per synodic month. Four are fixed:
//! Kimstughna opens the month and Shakuni, Chatushpada and Naga close it.
//! The 56 between cycle through seven movable karanas eight times.

use crate::util::segment_of;

/// Elongation covered by one karana, in degrees.
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// Karana slots per synodic month.
pub const KARANA_COUNT: u8 = 60;

/// The 11 named karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana occupying slot `raw` (0..60) of the synodic month.
    ///
    /// Slot 0 is Kimstughna, slots 1..=56 are `(raw - 1) mod 7` over the
    /// movable karanas, and 57, 58, 59 are Shakuni, Chatushpada, Naga.
    /// Values above 59 wrap.
    pub const fn from_raw_index(raw: u8) -> Self {
        match raw % KARANA_COUNT {
            0 => Self::Kimstughna,
            r @ 1..=56 => MOVABLE[((r - 1) % 7) as usize],
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            _ => Self::Naga,
        }
    }

    /// Whether this karana is one of the four fixed ones.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Slot within the synodic month, 0..60.
    pub raw_index: u8,
    /// Fraction of the karana elapsed, in [0, 1).
    pub fraction_complete: f64,
}

/// Classify an elongation (Moon − Sun, degrees).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let (raw, fraction) = segment_of(elongation_deg, KARANA_SPAN_DEG, KARANA_COUNT);
    KaranaPosition {
        karana: Karana::from_raw_index(raw),
        raw_index: raw,
        fraction_complete: fraction,
    }
}
