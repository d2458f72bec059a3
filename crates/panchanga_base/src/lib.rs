//! Vedic calendar primitives built on provider outputs.
//!
//! This crate provides:
//! - The ayanamsa registry (41 sidereal reference systems)
//! - Tropical-to-sidereal snapshots of Sun and Moon
//! - Tithi, nakshatra, yoga, karana and vara classification
//! - Kalam and muhurta partitioning of the day and night
//! - A horizon-crossing sunrise/sunset solver

pub mod ayanamsa;
pub mod error;
pub mod kalam;
pub mod karana;
pub mod muhurta;
pub mod nakshatra;
pub mod partition;
pub mod riseset;
pub mod riseset_types;
pub mod sidereal;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use ayanamsa::{
    Ayanamsa, AyanamsaReading, AyanamsaRegistry, AyanamsaSelector, AyanamsaSystem,
    FallbackPolynomial, LAHIRI_ID, years_since_j1900,
};
pub use error::VedicError;
pub use kalam::{ALL_KALAMS, KALAM_SEGMENTS, KalamKind, KalamWindow, kalam_segments, kalam_windows};
pub use karana::{KARANA_COUNT, KARANA_SPAN_DEG, Karana, KaranaPosition, karana_from_elongation};
pub use muhurta::{
    ALL_MUHURTA_KINDS, MUHURTA_SEGMENTS, Muhurta, MuhurtaKind, MuhurtaWindow, muhurta_windows,
    muhurtas,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo, PADA_SPAN_DEG,
    longitude_from_position, nakshatra_from_longitude,
};
pub use partition::{DayBounds, DayHalves, DayPart, TimeSpan, partition};
pub use riseset::{HorizonSolver, approximate_local_noon_jd, compute_rise_set, sun_times};
pub use riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use sidereal::{SiderealContext, SiderealPair, SiderealSnapshot, sidereal_longitude};
pub use tithi::{Paksha, TITHI_COUNT, TITHI_SPAN_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vara::{ALL_VARAS, Vara, vara_at, vara_from_jdn};
pub use yoga::{ALL_YOGAS, YOGA_SPAN_DEG, Yoga, YogaPosition, yoga_from_sum};
