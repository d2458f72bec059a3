//! Yoga classification from the sum of sidereal Sun and Moon longitudes.

use crate::util::segment_of;

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkambha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn next(self) -> Self {
        ALL_YOGAS[((self as u8 + 1) % 27) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// Fraction of the yoga elapsed, in [0, 1).
    pub fraction_complete: f64,
}

/// Classify a Sun+Moon sidereal sum in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let (idx, fraction) = segment_of(sum_deg, YOGA_SPAN_DEG, 27);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        fraction_complete: fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(359.9).yoga, Yoga::Vaidhriti);
    }

    #[test]
    fn ganda_reference() {
        let y = yoga_from_sum(130.72).yoga;
        assert_eq!(y, Yoga::Ganda);
        assert_eq!(y.number(), 10);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Yoga::Vaidhriti.next(), Yoga::Vishkambha);
        assert_eq!(Yoga::Ganda.next(), Yoga::Vriddhi);
    }

    #[test]
    fn sum_wraps() {
        assert_eq!(yoga_from_sum(365.0).yoga, Yoga::Vishkambha);
    }

    proptest! {
        #[test]
        fn number_in_range(sum in 0.0f64..360.0) {
            let n = yoga_from_sum(sum).yoga.number();
            prop_assert!((1..=27).contains(&n));
        }
    }
}
